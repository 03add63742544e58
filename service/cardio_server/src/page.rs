// Server-rendered questionnaire page. Markup only: scoring lives behind
// POST /api/heart, and the inline script mirrors the submission lifecycle
// (gate until complete, one request in flight, local fallback on network
// failure).

use cardio_form::{FieldKind, FieldSpec, FIELDS};

/// Render the questionnaire page from the field registry.
pub fn render() -> String {
    let mut rows = String::new();
    for spec in FIELDS {
        rows.push_str(&render_row(spec));
    }
    [PREFIX, rows.as_str(), SUFFIX].concat()
}

fn render_row(spec: &FieldSpec) -> String {
    let control = match spec.kind {
        FieldKind::Number { step, placeholder } => format!(
            r#"<input type="number" id="{name}" name="{name}" step="{step}" placeholder="{placeholder}" required>"#,
            name = spec.name,
        ),
        FieldKind::Choice(choices) => format!(
            r#"<select id="{name}" name="{name}" required>{options}</select>"#,
            name = spec.name,
            options = options(choices),
        ),
    };
    format!(
        r#"<div class="row"><label for="{name}">{label}</label>{control}</div>
"#,
        name = spec.name,
        label = spec.label,
    )
}

fn options(choices: &[&str]) -> String {
    let mut out = String::from(r#"<option value="">Select...</option>"#);
    for choice in choices {
        out.push_str(&format!(
            r#"<option value="{choice}">{}</option>"#,
            title_case(choice)
        ));
    }
    out
}

fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

const PREFIX: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Heart Disease Risk Assessment</title>
<style>
body { font-family: system-ui, sans-serif; margin: 0; background: #f4f8fb; color: #1a202c; }
main { max-width: 44rem; margin: 0 auto; padding: 2rem 1rem; }
header { text-align: center; margin-bottom: 2rem; }
header p { color: #4a5568; }
.card { background: #fff; border-radius: 0.5rem; box-shadow: 0 1px 4px rgba(0,0,0,0.12); padding: 1.5rem; }
.row { display: flex; flex-direction: column; margin-bottom: 1rem; }
.row label { font-weight: 600; margin-bottom: 0.25rem; }
.row input, .row select { padding: 0.5rem; border: 1px solid #cbd5e0; border-radius: 0.375rem; }
button { width: 100%; padding: 0.75rem; border: 0; border-radius: 0.375rem; background: #2b6cb0; color: #fff; font-weight: 600; cursor: pointer; }
button:disabled { background: #a0aec0; cursor: not-allowed; }
.panel { display: flex; gap: 0.75rem; margin-top: 2rem; padding: 1.25rem; border-radius: 0.5rem; }
.panel-low { background: #f0fff4; color: #22543d; }
.panel-high { background: #fff5f5; color: #742a2a; }
.panel .icon { font-size: 1.5rem; }
footer { margin-top: 3rem; text-align: center; color: #4a5568; font-size: 0.875rem; }
</style>
</head>
<body>
<main>
<header>
<h1>Heart Disease Risk Assessment</h1>
<p>Get your personalized heart disease risk evaluation</p>
</header>
<section class="card">
<h2>Patient Information Form</h2>
<p>Please provide your complete health information below for an accurate risk assessment.</p>
<form id="assessment">
"#;

const SUFFIX: &str = r#"<button type="submit" id="submit" disabled>Get Risk Assessment</button>
</form>
</section>
<section id="result" class="panel" hidden>
<span class="icon" id="result-icon"></span>
<div>
<h3 id="result-title"></h3>
<p id="result-message"></p>
</div>
</section>
<footer>
<p>This assessment is for informational purposes only and should not replace professional medical advice.</p>
</footer>
</main>
<script>
const form = document.getElementById('assessment');
const submit = document.getElementById('submit');
const panel = document.getElementById('result');
let inFlight = false;

function complete() {
  return Array.from(form.elements)
    .filter((el) => el.name)
    .every((el) => el.value !== '');
}

function refreshGate() {
  submit.disabled = inFlight || !complete();
}

function show(outcome) {
  const low = outcome.risk === 'low';
  panel.hidden = false;
  panel.className = 'panel ' + (low ? 'panel-low' : 'panel-high');
  document.getElementById('result-icon').textContent = low ? '✓' : '⚠';
  document.getElementById('result-title').textContent = low ? 'Low Risk' : 'High Risk';
  document.getElementById('result-message').textContent = outcome.result;
}

form.addEventListener('input', refreshGate);
form.addEventListener('change', refreshGate);

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  inFlight = true;
  submit.textContent = 'Analyzing...';
  refreshGate();
  panel.hidden = true;
  const answers = Object.fromEntries(new FormData(form));
  try {
    const response = await fetch('/api/heart', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(answers),
    });
    show(await response.json());
  } catch (err) {
    show({ result: 'An error occurred. Please try again.', risk: 'high' });
  } finally {
    inFlight = false;
    submit.textContent = 'Get Risk Assessment';
    refreshGate();
  }
});

refreshGate();
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_renders_every_registered_field() {
        let html = render();
        for spec in FIELDS {
            assert!(
                html.contains(&format!("name=\"{}\"", spec.name)),
                "missing control for {}",
                spec.name
            );
            assert!(html.contains(spec.label), "missing label for {}", spec.name);
        }
    }

    #[test]
    fn selects_offer_a_blank_default() {
        let html = render();
        assert!(html.contains(r#"<option value="">Select...</option>"#));
        assert!(html.contains(r#"<option value="yes">Yes</option>"#));
        assert!(html.contains(r#"<option value="65+">65+</option>"#));
    }

    #[test]
    fn script_posts_to_the_scoring_endpoint() {
        let html = render();
        assert!(html.contains("fetch('/api/heart'"));
        assert!(html.contains("An error occurred. Please try again."));
    }

    #[test]
    fn title_case_handles_multiword_options() {
        assert_eq!(title_case("very good"), "Very Good");
        assert_eq!(title_case("65+"), "65+");
    }
}
