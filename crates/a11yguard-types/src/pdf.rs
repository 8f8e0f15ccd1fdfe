use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Heuristic inspection result for one uploaded PDF.
///
/// `issues` and `warnings` are advisory: the inspector is a byte-pattern
/// presence check, not a PDF parser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PdfResult {
    pub filename: String,
    pub size: u64,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl PdfResult {
    /// Result for a file that could not be read. Batch inspection reports
    /// the failure on the file instead of aborting the remaining files.
    pub fn read_failure(filename: impl Into<String>, error: &str) -> Self {
        PdfResult {
            filename: filename.into(),
            size: 0,
            issues: vec![format!("Failed to read file: {error}")],
            warnings: Vec::new(),
        }
    }
}

/// Issue/warning totals across one PDF batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PdfBatchSummary {
    pub total_issues: u32,
    pub total_warnings: u32,
}

/// Batch output for a multi-file PDF scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PdfScanOutput {
    pub results: Vec<PdfResult>,
    pub total_files: u32,
    pub summary: PdfBatchSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_failure_is_an_issue_entry() {
        let result = PdfResult::read_failure("report.pdf", "permission denied");
        assert_eq!(result.size, 0);
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].contains("permission denied"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn batch_output_wire_names() {
        let output = PdfScanOutput {
            results: Vec::new(),
            total_files: 0,
            summary: PdfBatchSummary::default(),
        };
        let value = serde_json::to_value(&output).expect("serialize");
        assert!(value.get("totalFiles").is_some());
        assert!(value["summary"].get("totalIssues").is_some());
        assert!(value["summary"].get("totalWarnings").is_some());
    }
}
