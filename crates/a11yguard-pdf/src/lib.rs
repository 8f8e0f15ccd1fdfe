//! Heuristic PDF accessibility inspection.
//!
//! This is a presence check over raw bytes, not a PDF parser: the structural
//! markers (`/StructTreeRoot`, `/Lang`, `/Title`) are ASCII tokens that
//! appear literally in the file even when surrounded by binary streams. It
//! can false-positive (token inside an unrelated stream) and false-negative
//! (token present but not functionally wired), so results are advisory.

#![forbid(unsafe_code)]

use a11yguard_types::{ids, Finding, PdfResult, Severity};

/// Files smaller than this are unlikely to be a real PDF.
const MIN_PLAUSIBLE_SIZE: u64 = 1000;

const TOKEN_STRUCT_TREE_ROOT: &[u8] = b"/StructTreeRoot";
const TOKEN_LANG: &[u8] = b"/Lang";
const TOKEN_TITLE: &[u8] = b"/Title";

pub const ISSUE_EMPTY_OR_CORRUPTED: &str = "PDF file appears to be empty or corrupted";
pub const ISSUE_MISSING_STRUCT_TREE: &str =
    "PDF does not appear to be tagged (missing structure tree)";
pub const WARNING_MISSING_LANGUAGE: &str = "PDF language not specified";
pub const WARNING_MISSING_TITLE: &str = "PDF title metadata not set";

/// Inspect one PDF's raw bytes for structural accessibility markers.
///
/// All four checks are independent; a file can accumulate any subset of
/// issues and warnings.
pub fn inspect_pdf(bytes: &[u8], filename: &str, size: u64) -> PdfResult {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    if size < MIN_PLAUSIBLE_SIZE {
        issues.push(ISSUE_EMPTY_OR_CORRUPTED.to_string());
    }
    if !contains_token(bytes, TOKEN_STRUCT_TREE_ROOT) {
        issues.push(ISSUE_MISSING_STRUCT_TREE.to_string());
    }
    if !contains_token(bytes, TOKEN_LANG) {
        warnings.push(WARNING_MISSING_LANGUAGE.to_string());
    }
    if !contains_token(bytes, TOKEN_TITLE) {
        warnings.push(WARNING_MISSING_TITLE.to_string());
    }

    log::debug!(
        "inspected {filename}: {} issue(s), {} warning(s)",
        issues.len(),
        warnings.len()
    );

    PdfResult {
        filename: filename.to_string(),
        size,
        issues,
        warnings,
    }
}

fn contains_token(bytes: &[u8], token: &[u8]) -> bool {
    bytes.windows(token.len()).any(|window| window == token)
}

/// Convert a heuristic result into findings with synthetic codes so PDF
/// scans can feed the same classification and aggregation pipeline as URL
/// scans.
pub fn findings_from(result: &PdfResult) -> Vec<Finding> {
    let mut findings = Vec::new();

    for issue in &result.issues {
        let code = match issue.as_str() {
            ISSUE_EMPTY_OR_CORRUPTED => ids::CODE_PDF_EMPTY_OR_CORRUPTED,
            ISSUE_MISSING_STRUCT_TREE => ids::CODE_PDF_MISSING_STRUCT_TREE,
            _ => ids::CODE_PDF_READ_FAILURE,
        };
        let mut finding = Finding::new(code, Severity::Error, issue.clone());
        finding.selector = Some(result.filename.clone());
        findings.push(finding);
    }

    for warning in &result.warnings {
        let code = match warning.as_str() {
            WARNING_MISSING_LANGUAGE => ids::CODE_PDF_MISSING_LANGUAGE,
            _ => ids::CODE_PDF_MISSING_TITLE,
        };
        let mut finding = Finding::new(code, Severity::Warning, warning.clone());
        finding.selector = Some(result.filename.clone());
        findings.push(finding);
    }

    findings
}
