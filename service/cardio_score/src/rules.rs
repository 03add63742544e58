// The fixed scoring heuristic: a declarative table of weighted predicates.
// Weights and the classification threshold are design constants, not model
// output. Tiered factors (BMI, age bracket, general health) use mutually
// exclusive predicates so at most one row per tier can match.

use crate::assessment::Assessment;

/// Score at or above which an assessment is classified high risk.
pub const RISK_THRESHOLD: u32 = 15;

/// One row of the scoring table: a named factor worth `points` when its
/// predicate holds for the submitted answers.
pub struct Rule {
    pub factor: &'static str,
    pub points: u32,
    pub applies: fn(&Assessment) -> bool,
}

/// The complete rule set, in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        factor: "BMI 30 or higher",
        points: 3,
        applies: |a| a.bmi_value().is_some_and(|bmi| bmi >= 30.0),
    },
    Rule {
        factor: "BMI between 25 and 30",
        points: 1,
        applies: |a| a.bmi_value().is_some_and(|bmi| (25.0..30.0).contains(&bmi)),
    },
    Rule {
        factor: "smoker",
        points: 4,
        applies: |a| a.smoker == "yes",
    },
    Rule {
        factor: "alcohol drinker",
        points: 1,
        applies: |a| a.alcohol_drinker == "yes",
    },
    Rule {
        factor: "history of stroke",
        points: 5,
        applies: |a| a.stroke == "yes",
    },
    Rule {
        factor: "7 or more poor physical health days",
        points: 2,
        applies: |a| a.physical_health_days().is_some_and(|days| days >= 7),
    },
    Rule {
        factor: "7 or more poor mental health days",
        points: 1,
        applies: |a| a.mental_health_days().is_some_and(|days| days >= 7),
    },
    Rule {
        factor: "difficulty walking",
        points: 3,
        applies: |a| a.difficulty_walking == "yes",
    },
    Rule {
        factor: "age 65 or older",
        points: 4,
        applies: |a| a.age_category == "65+",
    },
    Rule {
        factor: "age 55 to 64",
        points: 3,
        applies: |a| a.age_category == "55-64",
    },
    Rule {
        factor: "age 45 to 54",
        points: 2,
        applies: |a| a.age_category == "45-54",
    },
    Rule {
        factor: "diabetic",
        points: 3,
        applies: |a| a.diabetic == "yes",
    },
    Rule {
        factor: "no physical activity",
        points: 2,
        applies: |a| a.physical_activity == "no",
    },
    Rule {
        factor: "poor general health",
        points: 3,
        applies: |a| a.general_health == "poor",
    },
    Rule {
        factor: "fair general health",
        points: 2,
        applies: |a| a.general_health == "fair",
    },
    Rule {
        factor: "sleep outside 6 to 8 hours",
        points: 1,
        applies: |a| a.sleep_hours().is_some_and(|hours| !(6.0..=8.0).contains(&hours)),
    },
    Rule {
        factor: "asthma",
        points: 1,
        applies: |a| a.asthma == "yes",
    },
    Rule {
        factor: "kidney disease",
        points: 3,
        applies: |a| a.kidney_disease == "yes",
    },
    Rule {
        factor: "skin cancer",
        points: 1,
        applies: |a| a.skin_cancer == "yes",
    },
];

/// A rule that matched a submitted assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub factor: &'static str,
    pub points: u32,
}

/// Sum the points of every matching rule.
pub fn score(assessment: &Assessment) -> u32 {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(assessment))
        .map(|rule| rule.points)
        .sum()
}

/// The matching rules with their point values. The sum of the returned
/// contributions equals [`score`].
pub fn breakdown(assessment: &Assessment) -> Vec<Contribution> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(assessment))
        .map(|rule| Contribution {
            factor: rule.factor,
            points: rule.points,
        })
        .collect()
}
