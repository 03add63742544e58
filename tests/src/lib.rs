// Shared fixtures for the cross-crate questionnaire tests.

use cardio_form::{FormState, FIELDS};

/// A form with every field answered: healthy defaults, overridable per
/// field via `(wire name, value)` pairs.
pub fn filled_form(overrides: &[(&str, &str)]) -> FormState {
    let base = FIELDS.iter().fold(FormState::new(), |form, spec| {
        form.with_field(spec.name, default_answer(spec.name))
    });
    overrides
        .iter()
        .fold(base, |form, (name, value)| form.with_field(name, value))
}

fn default_answer(name: &str) -> &'static str {
    match name {
        "bmi" => "20",
        "physicalHealth" | "mentalHealth" => "0",
        "sleepTime" => "7",
        "sex" => "female",
        "ageCategory" => "25-34",
        "race" => "other",
        "physicalActivity" => "yes",
        "generalHealth" => "good",
        _ => "no",
    }
}
