//! Stable identifiers for synthetic finding codes.
//!
//! URL scans carry whatever rule codes the external audit engine emits; PDF
//! heuristics synthesize their own codes so both paths feed the same
//! classification and aggregation pipeline.

// Codes: PDF heuristic inspector
pub const CODE_PDF_EMPTY_OR_CORRUPTED: &str = "pdf-empty-or-corrupted";
pub const CODE_PDF_MISSING_STRUCT_TREE: &str = "pdf-missing-struct-tree";
pub const CODE_PDF_MISSING_LANGUAGE: &str = "pdf-missing-language";
pub const CODE_PDF_MISSING_TITLE: &str = "pdf-missing-title";
pub const CODE_PDF_READ_FAILURE: &str = "pdf-read-failure";

/// Default impact label when the audit engine supplies none.
pub const IMPACT_UNKNOWN: &str = "unknown";
