// Submission lifecycle for the questionnaire page: at most one request
// outstanding, and every outcome resolves to a definitive response.

use cardio_score::{Risk, RiskResponse};

use crate::state::FormState;

/// Phase of the scoring request attached to a form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Submission {
    /// Nothing sent yet.
    #[default]
    Idle,
    /// A request is outstanding; the submit action is disabled.
    InFlight,
    /// A definitive response, from the server or the local fallback.
    Resolved(RiskResponse),
}

impl Submission {
    /// Whether the submit action is enabled: the form must be complete and
    /// no request may be outstanding. A UX safeguard only; the endpoint is
    /// idempotent.
    pub fn can_submit(&self, form: &FormState) -> bool {
        form.is_complete() && !self.is_in_flight()
    }

    /// The request has been sent.
    pub fn begin(self) -> Self {
        Submission::InFlight
    }

    /// The endpoint answered.
    pub fn resolve(self, response: RiskResponse) -> Self {
        Submission::Resolved(response)
    }

    /// The network call failed: resolve locally with the fallback instead
    /// of leaving the respondent without an answer.
    pub fn fail(self) -> Self {
        Submission::Resolved(client_fallback())
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Submission::InFlight)
    }

    /// The response to render, once resolved.
    pub fn response(&self) -> Option<&RiskResponse> {
        match self {
            Submission::Resolved(response) => Some(response),
            _ => None,
        }
    }
}

/// Result shown when the scoring endpoint cannot be reached at all.
pub fn client_fallback() -> RiskResponse {
    RiskResponse {
        result: "An error occurred. Please try again.".to_string(),
        risk: Risk::High,
    }
}
