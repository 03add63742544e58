// Presentation-side state for the cardio questionnaire: the field registry
// the page is rendered from, the immutable form value object and the
// submission phase machine.

pub mod fields;
pub mod state;
pub mod submit;

pub use fields::{field, FieldKind, FieldSpec, AGE_BRACKETS, FIELDS, GENERAL_HEALTH, YES_NO};
pub use state::FormState;
pub use submit::{client_fallback, Submission};
