use serde::Serialize;

use catalog_validate::{Category, UsageReport, Violation};

use crate::summary::Summary;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: Vec<JsonUsage<'a>>,
}

#[derive(Serialize)]
struct JsonUsage<'a> {
    location: Option<&'a str>,
    component: &'a str,
    status: &'static str,
    violations: Vec<JsonViolation<'a>>,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    code: &'static str,
    category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    prop: Option<&'a str>,
    message: String,
    detail: &'a Violation,
}

/// Render a batch as pretty-printed JSON: a summary plus one entry per usage.
pub fn render_json(reports: &[UsageReport]) -> serde_json::Result<String> {
    let results = reports
        .iter()
        .map(|report| JsonUsage {
            location: report.location.as_deref(),
            component: &report.component,
            status: if report.is_valid() { "valid" } else { "invalid" },
            violations: report
                .result
                .violations()
                .iter()
                .map(|violation| JsonViolation {
                    code: violation.code(),
                    category: violation.category(),
                    prop: violation.prop(),
                    message: violation.message(),
                    detail: violation,
                })
                .collect(),
        })
        .collect();

    serde_json::to_string_pretty(&JsonOutput {
        summary: Summary::from_reports(reports),
        results,
    })
}
