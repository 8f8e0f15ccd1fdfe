//! Stable DTOs and IDs used across the a11yguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted scan report
//! - stable string codes for synthetic findings
//! - PDF inspection result shapes
//!
//! Report types serialize camelCase because the report is consumed directly
//! by a UI.

#![forbid(unsafe_code)]

pub mod ids;
pub mod pdf;
pub mod report;

pub use pdf::{PdfBatchSummary, PdfResult, PdfScanOutput};
pub use report::{
    Category, CategoryCounts, Finding, IssueGroup, Occurrence, ReportEnvelope, ScanReport,
    ScanSummary, Severity, ToolMeta, SCHEMA_SCAN_REPORT_V1,
};
