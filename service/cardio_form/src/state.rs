// Explicit, immutable form state. A transition takes a state and one field
// edit and returns the successor state; the predecessor is never mutated.

use std::collections::BTreeMap;

use log::debug;
use serde_json::{Map, Value};

use crate::fields::{field, FIELDS};

/// The questionnaire's value object: one string value per registered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<&'static str, String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// A form with every field unanswered.
    pub fn new() -> Self {
        Self {
            values: FIELDS.iter().map(|f| (f.name, String::new())).collect(),
        }
    }

    /// Reducer transition: the same form with `name` set to `value`. Edits
    /// to unregistered field names leave the state unchanged.
    pub fn with_field(&self, name: &str, value: &str) -> Self {
        let Some(spec) = field(name) else {
            debug!("ignoring edit to unknown field {name:?}");
            return self.clone();
        };
        let mut next = self.clone();
        next.values.insert(spec.name, value.to_string());
        next
    }

    /// Current value of a field; empty when unanswered or unregistered.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// True once every field has a non-empty answer. Gates submission.
    pub fn is_complete(&self) -> bool {
        self.values.values().all(|v| !v.is_empty())
    }

    /// The JSON document POSTed to the scoring endpoint: all fields,
    /// string-typed, keyed by wire name.
    pub fn payload(&self) -> Value {
        let mut doc = Map::new();
        for spec in FIELDS {
            doc.insert(
                spec.name.to_string(),
                Value::String(self.value(spec.name).to_string()),
            );
        }
        Value::Object(doc)
    }
}
