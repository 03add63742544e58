// Classification and the advisory messages shown to the respondent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::rules::{score, RISK_THRESHOLD};

/// Binary risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    High,
}

impl Risk {
    pub fn is_high(self) -> bool {
        matches!(self, Risk::High)
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Risk::Low => write!(f, "low"),
            Risk::High => write!(f, "high"),
        }
    }
}

/// Classify a risk score against the fixed threshold. Monotonic: 14 is low,
/// 15 is high, no hysteresis.
pub fn classify(score: u32) -> Risk {
    if score >= RISK_THRESHOLD {
        Risk::High
    } else {
        Risk::Low
    }
}

/// A scored assessment: the numeric score, its classification and the
/// advisory message for the respondent.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentResult {
    pub score: u32,
    pub risk: Risk,
    pub message: String,
}

/// Wire response for the scoring endpoint:
/// `{ "result": <message>, "risk": "low" | "high" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResponse {
    pub result: String,
    pub risk: Risk,
}

impl From<AssessmentResult> for RiskResponse {
    fn from(result: AssessmentResult) -> Self {
        RiskResponse {
            result: result.message,
            risk: result.risk,
        }
    }
}

impl RiskResponse {
    /// Fixed payload returned when a request cannot be processed. Errs on
    /// the side of the high-risk advisory.
    pub fn processing_error() -> Self {
        RiskResponse {
            result: "An error occurred while processing your request.".to_string(),
            risk: Risk::High,
        }
    }
}

/// Score, classify and narrate one assessment.
pub fn assess(assessment: &Assessment) -> AssessmentResult {
    let score = score(assessment);
    let risk = classify(score);
    AssessmentResult {
        score,
        risk,
        message: advisory(score, risk),
    }
}

fn advisory(score: u32, risk: Risk) -> String {
    match risk {
        Risk::Low => format!(
            "Your risk score is {score}. Based on the assessment, you have a low risk \
             of heart disease. Continue maintaining your healthy lifestyle and regular \
             check-ups with your healthcare provider."
        ),
        Risk::High => format!(
            "Your risk score is {score}. Based on the assessment, you have a high risk \
             of heart disease. We strongly recommend consulting with a cardiologist for \
             a comprehensive evaluation and personalized prevention plan."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn threshold_boundary() {
        assert_eq!(classify(14), Risk::Low);
        assert_eq!(classify(15), Risk::High);
        assert_eq!(classify(0), Risk::Low);
        assert_eq!(classify(37), Risk::High);
    }

    #[test]
    fn risk_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Risk::Low).unwrap(), "\"low\"");
        assert_eq!(serde_json::to_string(&Risk::High).unwrap(), "\"high\"");
    }

    #[test]
    fn low_risk_message_interpolates_score() {
        let result = assess(&Assessment::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.risk, Risk::Low);
        assert!(result.message.starts_with("Your risk score is 0."));
        assert!(result.message.contains("low risk of heart disease"));
    }

    #[test]
    fn high_risk_message_recommends_cardiologist() {
        let assessment = Assessment {
            smoker: "yes".into(),
            stroke: "yes".into(),
            difficulty_walking: "yes".into(),
            diabetic: "yes".into(),
            ..Assessment::default()
        };
        let result = assess(&assessment);
        assert_eq!(result.score, 15);
        assert_eq!(result.risk, Risk::High);
        assert!(result.message.contains("consulting with a cardiologist"));
    }

    #[test]
    fn response_wire_shape() {
        let response: RiskResponse = assess(&Assessment::default()).into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["risk"], "low");
        assert!(json["result"].as_str().unwrap().contains("risk score is 0"));
    }

    #[test]
    fn processing_error_payload_is_fixed() {
        let fallback = RiskResponse::processing_error();
        assert_eq!(
            fallback.result,
            "An error occurred while processing your request."
        );
        assert_eq!(fallback.risk, Risk::High);
    }
}
