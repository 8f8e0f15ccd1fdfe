//! The scan use cases: run an audit (URL) or inspect uploads (PDF) and
//! produce a report.

use a11yguard_audit::{AuditEngine, AuditError, AuditOutcome};
use a11yguard_types::{
    PdfBatchSummary, PdfResult, PdfScanOutput, ReportEnvelope, ScanReport, ToolMeta,
    SCHEMA_SCAN_REPORT_V1,
};
use thiserror::Error;
use time::OffsetDateTime;

/// Scan failure kinds, mapped by callers onto their transport's error
/// surface (the CLI uses exit codes; an HTTP boundary would use 4xx/5xx).
#[derive(Debug, Error)]
pub enum ScanError {
    /// Missing or empty required input. Not retried.
    #[error("invalid input: {0}")]
    Input(String),
    /// The external audit engine invocation failed. Single attempt, no
    /// automatic retry.
    #[error("accessibility audit failed: {0}")]
    Audit(#[from] AuditError),
}

/// One uploaded PDF, already read by the boundary. The upload's storage can
/// be discarded after inspection; nothing here holds onto it.
#[derive(Clone, Debug)]
pub struct PdfUpload {
    pub filename: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

/// Audit a live page and build the classified, ranked report.
pub fn scan_url(engine: &dyn AuditEngine, url: &str) -> Result<ReportEnvelope, ScanError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ScanError::Input("url is required".to_string()));
    }

    let outcome = AuditOutcome::from_raw(engine.audit(url)?);
    let page_url = outcome.page_url.as_deref().unwrap_or(url);
    let title = outcome.document_title.as_deref().unwrap_or("");

    let report = a11yguard_domain::build_report(
        page_url,
        title,
        &outcome.findings,
        OffsetDateTime::now_utc(),
    );
    Ok(envelope(report))
}

/// One file in a PDF batch as the boundary hands it over. A file whose
/// bytes could not be read still participates in the batch; its failure is
/// reported on the file instead of aborting the remaining files.
#[derive(Clone, Debug)]
pub enum PdfSource {
    Loaded(PdfUpload),
    Unreadable { filename: String, error: String },
}

/// Inspect each uploaded PDF independently and total up the batch.
pub fn scan_pdfs(uploads: &[PdfUpload]) -> Result<PdfScanOutput, ScanError> {
    let sources: Vec<PdfSource> = uploads.iter().cloned().map(PdfSource::Loaded).collect();
    scan_pdf_sources(&sources)
}

/// Batch variant that tolerates per-file read failures.
pub fn scan_pdf_sources(sources: &[PdfSource]) -> Result<PdfScanOutput, ScanError> {
    if sources.is_empty() {
        return Err(ScanError::Input("no files uploaded".to_string()));
    }

    let results: Vec<PdfResult> = sources
        .iter()
        .map(|source| match source {
            PdfSource::Loaded(upload) => {
                a11yguard_pdf::inspect_pdf(&upload.bytes, &upload.filename, upload.size)
            }
            PdfSource::Unreadable { filename, error } => {
                PdfResult::read_failure(filename.clone(), error)
            }
        })
        .collect();

    let summary = PdfBatchSummary {
        total_issues: results.iter().map(|r| r.issues.len() as u32).sum(),
        total_warnings: results.iter().map(|r| r.warnings.len() as u32).sum(),
    };

    Ok(PdfScanOutput {
        total_files: results.len() as u32,
        summary,
        results,
    })
}

/// Feed the PDF batch's synthetic findings through the same classification
/// and aggregation pipeline as URL scans.
pub fn scan_pdfs_report(sources: &[PdfSource]) -> Result<ReportEnvelope, ScanError> {
    let output = scan_pdf_sources(sources)?;

    let findings: Vec<_> = output
        .results
        .iter()
        .flat_map(|result| a11yguard_pdf::findings_from(result))
        .collect();

    let title = format!("{} uploaded PDF document(s)", output.total_files);
    let report =
        a11yguard_domain::build_report("", &title, &findings, OffsetDateTime::now_utc());
    Ok(envelope(report))
}

fn envelope(report: ScanReport) -> ReportEnvelope {
    ReportEnvelope {
        schema: SCHEMA_SCAN_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "a11yguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        report,
    }
}
