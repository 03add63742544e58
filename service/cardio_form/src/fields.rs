// Single source of truth for the questionnaire: every field the page
// renders, the completeness gate checks and the payload serializes.

/// How a field is captured in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free numeric input, rendered as `<input type="number">`.
    Number {
        step: &'static str,
        placeholder: &'static str,
    },
    /// One-of selection, rendered as `<select>`.
    Choice(&'static [&'static str]),
}

/// A single questionnaire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key used in the JSON payload.
    pub name: &'static str,
    /// Label shown next to the input.
    pub label: &'static str,
    pub kind: FieldKind,
}

pub const YES_NO: &[&str] = &["yes", "no"];

pub const AGE_BRACKETS: &[&str] = &["18-24", "25-34", "35-44", "45-54", "55-64", "65+"];

pub const GENERAL_HEALTH: &[&str] = &["excellent", "very good", "good", "fair", "poor"];

const SEXES: &[&str] = &["male", "female"];

const RACES: &[&str] = &[
    "white",
    "black",
    "asian",
    "american indian/alaskan native",
    "hispanic",
    "other",
];

/// Every form field, in display order.
pub static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "bmi",
        label: "BMI",
        kind: FieldKind::Number {
            step: "0.1",
            placeholder: "e.g., 25.5",
        },
    },
    FieldSpec {
        name: "smoker",
        label: "Smoker",
        kind: FieldKind::Choice(YES_NO),
    },
    FieldSpec {
        name: "alcoholDrinker",
        label: "Alcohol Drinker",
        kind: FieldKind::Choice(YES_NO),
    },
    FieldSpec {
        name: "stroke",
        label: "History of Stroke",
        kind: FieldKind::Choice(YES_NO),
    },
    FieldSpec {
        name: "physicalHealth",
        label: "Poor Physical Health Days (last 30)",
        kind: FieldKind::Number {
            step: "1",
            placeholder: "0-30",
        },
    },
    FieldSpec {
        name: "mentalHealth",
        label: "Poor Mental Health Days (last 30)",
        kind: FieldKind::Number {
            step: "1",
            placeholder: "0-30",
        },
    },
    FieldSpec {
        name: "difficultyWalking",
        label: "Difficulty Walking",
        kind: FieldKind::Choice(YES_NO),
    },
    FieldSpec {
        name: "sex",
        label: "Sex",
        kind: FieldKind::Choice(SEXES),
    },
    FieldSpec {
        name: "ageCategory",
        label: "Age Category",
        kind: FieldKind::Choice(AGE_BRACKETS),
    },
    FieldSpec {
        name: "race",
        label: "Race",
        kind: FieldKind::Choice(RACES),
    },
    FieldSpec {
        name: "diabetic",
        label: "Diabetic",
        kind: FieldKind::Choice(YES_NO),
    },
    FieldSpec {
        name: "physicalActivity",
        label: "Physical Activity",
        kind: FieldKind::Choice(YES_NO),
    },
    FieldSpec {
        name: "generalHealth",
        label: "General Health",
        kind: FieldKind::Choice(GENERAL_HEALTH),
    },
    FieldSpec {
        name: "sleepTime",
        label: "Sleep Time (hours)",
        kind: FieldKind::Number {
            step: "0.5",
            placeholder: "e.g., 7",
        },
    },
    FieldSpec {
        name: "asthma",
        label: "Asthma",
        kind: FieldKind::Choice(YES_NO),
    },
    FieldSpec {
        name: "kidneyDisease",
        label: "Kidney Disease",
        kind: FieldKind::Choice(YES_NO),
    },
    FieldSpec {
        name: "skinCancer",
        label: "Skin Cancer",
        kind: FieldKind::Choice(YES_NO),
    },
];

/// Look up a field by wire name.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}
