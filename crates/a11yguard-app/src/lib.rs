//! Use case orchestration for a11yguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! audit port, the PDF inspector, the domain, and the render layers. It is
//! intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod render;
mod scan;

pub use render::{parse_report_json, render_markdown, serialize_report, to_renderable};
pub use scan::{
    scan_pdf_sources, scan_pdfs, scan_pdfs_report, scan_url, PdfSource, PdfUpload, ScanError,
};
