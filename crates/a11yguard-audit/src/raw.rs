//! Raw DTOs for audit engine output and normalization into findings.
//!
//! Engines emit either an object (`{documentTitle, pageUrl, issues}`) or a
//! bare issue array depending on version and flags; both forms are accepted.

use a11yguard_types::{ids, Finding, Severity};
use serde::Deserialize;

/// Page-level output of one engine run.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAuditOutput {
    #[serde(default)]
    pub page_url: Option<String>,
    #[serde(default)]
    pub document_title: Option<String>,
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

/// One raw issue record as the engine emits it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIssue {
    /// Severity string (`error`, `warning`, `notice`). Kept as a string
    /// here; unknown values degrade to notice during normalization.
    #[serde(rename = "type", default)]
    pub kind: String,
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub runner: Option<String>,
    /// Extras bag; sub-engines disagree on where impact/help live.
    #[serde(default)]
    pub runner_extras: Option<RawExtras>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExtras {
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub help_url: Option<String>,
    #[serde(default)]
    pub help: Option<String>,
}

/// Parse engine stdout, accepting both the object and bare-array forms.
pub fn parse_raw_output(text: &str) -> Result<RawAuditOutput, serde_json::Error> {
    match serde_json::from_str::<RawAuditOutput>(text) {
        Ok(output) => Ok(output),
        Err(object_err) => match serde_json::from_str::<Vec<RawIssue>>(text) {
            Ok(issues) => Ok(RawAuditOutput {
                page_url: None,
                document_title: None,
                issues,
            }),
            // The object-form error names the expected shape; prefer it.
            Err(_) => Err(object_err),
        },
    }
}

/// Map raw issues onto normalized findings.
///
/// `impact` defaults to `"unknown"`, `helpUrl` falls back to the extras bag's
/// `help` and then to the empty string.
pub fn normalize_issues(issues: Vec<RawIssue>) -> Vec<Finding> {
    issues.into_iter().map(normalize_issue).collect()
}

fn normalize_issue(issue: RawIssue) -> Finding {
    let severity = match issue.kind.as_str() {
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        _ => Severity::Notice,
    };

    let extras = issue.runner_extras.unwrap_or_default();
    let impact = extras
        .impact
        .unwrap_or_else(|| ids::IMPACT_UNKNOWN.to_string());
    let help_url = extras.help_url.or(extras.help).unwrap_or_default();

    Finding {
        code: issue.code,
        severity,
        message: issue.message,
        selector: issue.selector,
        context: issue.context,
        runner: issue.runner,
        impact,
        help_url,
    }
}
