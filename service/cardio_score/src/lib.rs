// Scoring core for the cardio questionnaire.
//
// Everything here is pure: a wire-shaped answer record in, an integer score
// and a binary classification out. No I/O, no shared state.

pub mod assessment;
pub mod result;
pub mod rules;

pub use assessment::{Assessment, AssessmentError};
pub use result::{assess, classify, AssessmentResult, Risk, RiskResponse};
pub use rules::{breakdown, score, Contribution, Rule, RISK_THRESHOLD, RULES};
