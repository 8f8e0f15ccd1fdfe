//! The audit-engine port for URL scans.
//!
//! The core never inspects a live page itself: an external browser-automation
//! engine does, and this crate defines the narrow interface to it plus the
//! normalization of its raw output into [`Finding`]s. The only concrete
//! adapter shipped here spawns the engine as a subprocess and parses its JSON
//! output; everything else (what the engine does to the page) is opaque.

#![forbid(unsafe_code)]

mod engine;
mod raw;

pub use engine::{AuditEngine, AuditError, CommandAuditEngine};
pub use raw::{normalize_issues, parse_raw_output, RawAuditOutput, RawExtras, RawIssue};

use a11yguard_types::Finding;

/// Normalized result of one engine invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct AuditOutcome {
    pub page_url: Option<String>,
    pub document_title: Option<String>,
    pub findings: Vec<Finding>,
}

impl AuditOutcome {
    pub fn from_raw(raw: RawAuditOutput) -> Self {
        AuditOutcome {
            page_url: raw.page_url,
            document_title: raw.document_title,
            findings: normalize_issues(raw.issues),
        }
    }
}
