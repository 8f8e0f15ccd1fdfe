use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for the scan report envelope.
pub const SCHEMA_SCAN_REPORT_V1: &str = "a11yguard.scan.v1";

/// Severity is intentionally small: it mirrors the three issue types the
/// audit engine emits. Serialized as `type` on finding records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Notice,
}

/// The four WCAG principles plus a catch-all bucket.
///
/// Every finding code maps to exactly one category; the mapping is a
/// keyword heuristic, not a guaranteed-correct taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    Perceivable,
    Operable,
    Understandable,
    Robust,
    Other,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 5] = [
        Category::Perceivable,
        Category::Operable,
        Category::Understandable,
        Category::Robust,
        Category::Other,
    ];
}

/// One normalized accessibility issue record.
///
/// `code` and `severity` are always present; `impact` and `help_url` degrade
/// to documented defaults rather than being omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub code: String,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,

    /// DOM location (URL scans only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Surrounding markup snippet (URL scans only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Which audit sub-engine produced the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner: Option<String>,

    #[serde(default = "default_impact")]
    pub impact: String,
    #[serde(default)]
    pub help_url: String,
}

fn default_impact() -> String {
    ids::IMPACT_UNKNOWN.to_string()
}

impl Finding {
    /// A finding with the required fields set and optional fields at their
    /// documented defaults.
    pub fn new(code: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Finding {
            code: code.into(),
            severity,
            message: message.into(),
            selector: None,
            context: None,
            runner: None,
            impact: default_impact(),
            help_url: String::new(),
        }
    }
}

/// Where one finding occurred. One entry per finding sharing a code, in scan
/// order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner: Option<String>,
}

/// Per-rule-code aggregation of all findings sharing that code.
///
/// Representative `type`/`message`/`impact`/`helpUrl` come from the first
/// finding seen with the code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueGroup {
    pub code: String,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
    pub impact: String,
    pub help_url: String,
    pub count: u32,
    pub occurrences: Vec<Occurrence>,
}

/// Top-level scan totals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub url: String,
    pub title: String,
    pub total: u32,
    pub errors: u32,
    pub warnings: u32,
    pub notices: u32,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Findings-per-category tally. All five keys are always present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryCounts {
    #[serde(rename = "Perceivable")]
    pub perceivable: u32,
    #[serde(rename = "Operable")]
    pub operable: u32,
    #[serde(rename = "Understandable")]
    pub understandable: u32,
    #[serde(rename = "Robust")]
    pub robust: u32,
    #[serde(rename = "Other")]
    pub other: u32,
}

impl CategoryCounts {
    pub fn bump(&mut self, category: Category) {
        match category {
            Category::Perceivable => self.perceivable += 1,
            Category::Operable => self.operable += 1,
            Category::Understandable => self.understandable += 1,
            Category::Robust => self.robust += 1,
            Category::Other => self.other += 1,
        }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Perceivable => self.perceivable,
            Category::Operable => self.operable,
            Category::Understandable => self.understandable,
            Category::Robust => self.robust,
            Category::Other => self.other,
        }
    }

    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// The derived report for one scan request. Recomputed fully per request; no
/// persisted state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub summary: ScanSummary,
    pub categories: CategoryCounts,
    /// Sorted by `count` descending; ties retain first-seen order.
    pub detailed_issues: Vec<IssueGroup>,
    pub total_unique_issues: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Outer envelope written to disk / returned to callers.
///
/// The `ScanReport` fields are flattened so the UI-facing shape keeps
/// `summary`, `categories`, `detailedIssues`, and `totalUniqueIssues` at the
/// top level next to `schema` and `tool`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    pub schema: String,
    pub tool: ToolMeta,
    #[serde(flatten)]
    pub report: ScanReport,
}
