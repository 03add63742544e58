// End-to-end flow through the public APIs: a filled form produces the exact
// payload the scoring core consumes, and the scored result matches the
// fixed rule table.

use cardio_score::{assess, Assessment, Risk};
use pretty_assertions::assert_eq;
use tests::filled_form;

fn assess_form(overrides: &[(&str, &str)]) -> cardio_score::AssessmentResult {
    let body = filled_form(overrides).payload().to_string();
    let assessment = Assessment::from_json_str(&body).expect("payload should parse");
    assess(&assessment)
}

#[test]
fn healthy_submission_scores_zero_low() {
    let result = assess_form(&[]);
    assert_eq!(result.score, 0);
    assert_eq!(result.risk, Risk::Low);
    assert!(result.message.contains("low risk of heart disease"));
}

#[test]
fn worked_scenario_scores_thirty_four_high() {
    let result = assess_form(&[
        ("bmi", "32"),
        ("smoker", "yes"),
        ("stroke", "yes"),
        ("difficultyWalking", "yes"),
        ("ageCategory", "65+"),
        ("diabetic", "yes"),
        ("kidneyDisease", "yes"),
        ("physicalHealth", "8"),
        ("mentalHealth", "8"),
        ("physicalActivity", "no"),
        ("generalHealth", "poor"),
        ("sleepTime", "5"),
    ]);
    assert_eq!(result.score, 34);
    assert_eq!(result.risk, Risk::High);
    assert!(result.message.contains("consulting with a cardiologist"));
}

#[test]
fn threshold_boundary_through_the_form() {
    // stroke 5 + smoker 4 + diabetic 3 + no activity 2 = 14
    let fourteen = &[
        ("stroke", "yes"),
        ("smoker", "yes"),
        ("diabetic", "yes"),
        ("physicalActivity", "no"),
    ][..];
    let result = assess_form(fourteen);
    assert_eq!(result.score, 14);
    assert_eq!(result.risk, Risk::Low);

    // asthma tips the same answers over the threshold
    let mut fifteen = fourteen.to_vec();
    fifteen.push(("asthma", "yes"));
    let result = assess_form(&fifteen);
    assert_eq!(result.score, 15);
    assert_eq!(result.risk, Risk::High);
}

#[test]
fn identical_submissions_yield_identical_results() {
    let overrides = &[("bmi", "27"), ("smoker", "yes")][..];
    assert_eq!(assess_form(overrides), assess_form(overrides));
}

#[test]
fn every_failure_path_resolves_high() {
    // Server-side and client-side fallbacks differ in wording but agree on
    // the safe classification.
    let server = cardio_score::RiskResponse::processing_error();
    let client = cardio_form::client_fallback();
    assert_eq!(server.risk, Risk::High);
    assert_eq!(client.risk, Risk::High);
    assert_ne!(server.result, client.result);
}

#[test]
fn form_payload_round_trips_unscored_fields() {
    let body = filled_form(&[("sex", "male"), ("race", "hispanic")])
        .payload()
        .to_string();
    let assessment = Assessment::from_json_str(&body).unwrap();
    assert_eq!(assessment.sex, "male");
    assert_eq!(assessment.race, "hispanic");
    // They ride along but never move the score.
    assert_eq!(assess(&assessment).score, 0);
}
