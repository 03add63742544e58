// Wire-shaped questionnaire answers for a single risk assessment.
// Values travel as strings (numeric fields are numeric strings), matching
// the form payload; parsing happens lazily at scoring time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One submitted questionnaire: seventeen self-reported answers.
///
/// Every field is optional on the wire. A missing answer deserializes to an
/// empty string, which never matches a scoring rule, the same outcome as an
/// unanswered question. `sex` and `race` are collected by the form but carry
/// no scoring weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assessment {
    pub bmi: String,
    pub smoker: String,
    pub alcohol_drinker: String,
    pub stroke: String,
    pub physical_health: String,
    pub mental_health: String,
    pub difficulty_walking: String,
    pub sex: String,
    pub age_category: String,
    pub race: String,
    pub diabetic: String,
    pub physical_activity: String,
    pub general_health: String,
    pub sleep_time: String,
    pub asthma: String,
    pub kidney_disease: String,
    pub skin_cancer: String,
}

/// Failure to read an assessment document off the wire.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("invalid assessment document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

impl Assessment {
    /// Parse an assessment from a JSON request body.
    pub fn from_json_str(body: &str) -> Result<Self, AssessmentError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Parse an assessment from raw request bytes.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, AssessmentError> {
        Ok(serde_json::from_slice(body)?)
    }

    pub(crate) fn bmi_value(&self) -> Option<f64> {
        parse_decimal(&self.bmi)
    }

    pub(crate) fn sleep_hours(&self) -> Option<f64> {
        parse_decimal(&self.sleep_time)
    }

    pub(crate) fn physical_health_days(&self) -> Option<i64> {
        parse_days(&self.physical_health)
    }

    pub(crate) fn mental_health_days(&self) -> Option<i64> {
        parse_days(&self.mental_health)
    }
}

// A numeric string that fails to parse behaves like the original NaN:
// every comparison against it is false and the rule is skipped.
fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

fn parse_days(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
