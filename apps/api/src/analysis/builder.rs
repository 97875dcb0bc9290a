//! Prompt Builder — maps an analysis tag plus typed inputs to a rendered prompt.
//!
//! Rendering is pure: the same inputs always produce the same prompt.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::prompts::{
    ABOUT_TEMPLATE, CUSTOM_QUERY_TEMPLATE, IMPROVE_JOB_CONTEXT, IMPROVE_TEMPLATE,
    KEYWORDS_TEMPLATE, PERCENTAGE_TEMPLATE,
};

/// Which analysis template to apply.
///
/// Anything other than a known selector string (missing, null, numbers,
/// unknown names) deserializes to `About`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<Value>")]
pub enum AnalysisType {
    #[default]
    About,
    Improve,
    Keywords,
    Percentage,
}

impl AnalysisType {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisType::About => "about",
            AnalysisType::Improve => "improve",
            AnalysisType::Keywords => "keywords",
            AnalysisType::Percentage => "percentage",
        }
    }

    /// Keywords and percentage compare against a job description and are
    /// meaningless without one.
    pub fn requires_job_description(self) -> bool {
        matches!(self, AnalysisType::Keywords | AnalysisType::Percentage)
    }
}

impl From<&str> for AnalysisType {
    fn from(value: &str) -> Self {
        match value {
            "improve" => AnalysisType::Improve,
            "keywords" => AnalysisType::Keywords,
            "percentage" => AnalysisType::Percentage,
            _ => AnalysisType::About,
        }
    }
}

impl From<Option<Value>> for AnalysisType {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(Value::String(selector)) => AnalysisType::from(selector.as_str()),
            _ => AnalysisType::About,
        }
    }
}

/// Renders the analysis prompt for `kind`.
///
/// `job_description` is interpolated verbatim; blank values are dropped from
/// the improve prompt. Callers validate the job-description requirement first.
pub fn build_analysis_prompt(
    kind: AnalysisType,
    resume_text: &str,
    job_description: Option<&str>,
) -> String {
    let job_description = job_description.unwrap_or_default();

    match kind {
        AnalysisType::About => render(ABOUT_TEMPLATE, &[("resume_text", resume_text)]),
        AnalysisType::Improve => {
            let job_context = if job_description.trim().is_empty() {
                String::new()
            } else {
                render(IMPROVE_JOB_CONTEXT, &[("job_description", job_description)])
            };
            render(
                IMPROVE_TEMPLATE,
                &[("resume_text", resume_text), ("job_context", &job_context)],
            )
        }
        AnalysisType::Keywords => render(
            KEYWORDS_TEMPLATE,
            &[
                ("resume_text", resume_text),
                ("job_description", job_description),
            ],
        ),
        AnalysisType::Percentage => render(
            PERCENTAGE_TEMPLATE,
            &[
                ("resume_text", resume_text),
                ("job_description", job_description),
            ],
        ),
    }
}

/// Renders the fixed question-and-answer prompt.
pub fn build_query_prompt(query: &str, resume_text: &str) -> String {
    render(
        CUSTOM_QUERY_TEMPLATE,
        &[("query", query), ("resume_text", resume_text)],
    )
}

/// Single-pass `{name}` substitution. Substituted values are never rescanned,
/// so braces inside resume text come through untouched. Unknown placeholders
/// are left as-is.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe, Software Engineer. Rust, Kubernetes, 6 years.";
    const JD: &str = "Senior Rust Engineer. Required: Rust, gRPC, Kafka.";

    #[test]
    fn test_analysis_type_parses_known_selectors() {
        assert_eq!(AnalysisType::from("about"), AnalysisType::About);
        assert_eq!(AnalysisType::from("improve"), AnalysisType::Improve);
        assert_eq!(AnalysisType::from("keywords"), AnalysisType::Keywords);
        assert_eq!(AnalysisType::from("percentage"), AnalysisType::Percentage);
    }

    #[test]
    fn test_unknown_selector_falls_back_to_about() {
        assert_eq!(AnalysisType::from("summary"), AnalysisType::About);
        assert_eq!(AnalysisType::from(""), AnalysisType::About);
        assert_eq!(AnalysisType::from("KEYWORDS"), AnalysisType::About);
    }

    #[test]
    fn test_analysis_type_serde() {
        let kind: AnalysisType = serde_json::from_str(r#""percentage""#).unwrap();
        assert_eq!(kind, AnalysisType::Percentage);
        let kind: AnalysisType = serde_json::from_str(r#""bogus""#).unwrap();
        assert_eq!(kind, AnalysisType::About);
        let kind: AnalysisType = serde_json::from_str("null").unwrap();
        assert_eq!(kind, AnalysisType::About);
        let kind: AnalysisType = serde_json::from_str("5").unwrap();
        assert_eq!(kind, AnalysisType::About);
        let kind: AnalysisType = serde_json::from_str(r#"{"type": "keywords"}"#).unwrap();
        assert_eq!(kind, AnalysisType::About);
        assert_eq!(
            serde_json::to_string(&AnalysisType::Keywords).unwrap(),
            r#""keywords""#
        );
    }

    #[test]
    fn test_job_description_requirement() {
        assert!(!AnalysisType::About.requires_job_description());
        assert!(!AnalysisType::Improve.requires_job_description());
        assert!(AnalysisType::Keywords.requires_job_description());
        assert!(AnalysisType::Percentage.requires_job_description());
    }

    #[test]
    fn test_about_prompt_contains_resume() {
        let prompt = build_analysis_prompt(AnalysisType::About, RESUME, None);
        assert!(prompt.contains("5-7 bullet points"));
        assert!(prompt.ends_with(&format!("Resume: {RESUME}")));
    }

    #[test]
    fn test_unknown_selector_renders_about_prompt() {
        let fallback = build_analysis_prompt(AnalysisType::from("summary"), RESUME, Some(JD));
        let about = build_analysis_prompt(AnalysisType::About, RESUME, Some(JD));
        assert_eq!(fallback, about);
    }

    #[test]
    fn test_improve_prompt_includes_job_context_when_present() {
        let prompt = build_analysis_prompt(AnalysisType::Improve, RESUME, Some(JD));
        assert!(prompt.contains(&format!("Job Context: {JD}")));
    }

    #[test]
    fn test_improve_prompt_omits_blank_job_context() {
        let prompt = build_analysis_prompt(AnalysisType::Improve, RESUME, Some("   "));
        assert!(!prompt.contains("Job Context"));
        let prompt = build_analysis_prompt(AnalysisType::Improve, RESUME, None);
        assert!(!prompt.contains("Job Context"));
        assert!(!prompt.contains("{job_context}"));
    }

    #[test]
    fn test_keywords_prompt_has_resume_and_jd() {
        let prompt = build_analysis_prompt(AnalysisType::Keywords, RESUME, Some(JD));
        assert!(prompt.contains("Missing technical keywords"));
        assert!(prompt.contains(&format!("Resume: {RESUME}")));
        assert!(prompt.contains(&format!("Job Description: {JD}")));
    }

    #[test]
    fn test_percentage_prompt_is_fixed_format() {
        let prompt = build_analysis_prompt(AnalysisType::Percentage, RESUME, Some(JD));
        assert!(prompt.contains("MATCH SCORE: X%"));
        assert!(prompt.contains("Skills Match"));
        assert!(prompt.contains("Experience Match"));
        assert!(prompt.contains("Education Match"));
        assert!(prompt.contains("maximum 10-12 words"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let a = build_analysis_prompt(AnalysisType::Keywords, RESUME, Some(JD));
        let b = build_analysis_prompt(AnalysisType::Keywords, RESUME, Some(JD));
        assert_eq!(a, b);
    }

    #[test]
    fn test_query_prompt() {
        let prompt = build_query_prompt("What is the candidate's experience?", RESUME);
        assert!(prompt.contains("Question: What is the candidate's experience?"));
        assert!(prompt.contains(&format!("Resume: {RESUME}")));
        assert!(prompt.contains("3-5 sentences"));
    }

    #[test]
    fn test_placeholders_in_resume_text_are_not_expanded() {
        let resume = "Built {job_description} templating engine";
        let prompt = build_analysis_prompt(AnalysisType::Keywords, resume, Some(JD));
        assert!(prompt.contains("Resume: Built {job_description} templating engine"));
        assert_eq!(prompt.matches(JD).count(), 1);
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{a} and {b}", &[("a", "x")]), "x and {b}");
        assert_eq!(render("open { only", &[("a", "x")]), "open { only");
    }
}
