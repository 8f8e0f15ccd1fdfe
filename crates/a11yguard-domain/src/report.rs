use crate::{aggregate, classify};
use a11yguard_types::{CategoryCounts, Finding, ScanReport, ScanSummary, Severity};
use time::OffsetDateTime;

#[derive(Clone, Debug, Default)]
struct SeverityCounts {
    errors: u32,
    warnings: u32,
    notices: u32,
}

impl SeverityCounts {
    fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Error => counts.errors += 1,
                Severity::Warning => counts.warnings += 1,
                Severity::Notice => counts.notices += 1,
            }
        }
        counts
    }
}

/// Assemble the full scan report from normalized findings.
///
/// The caller supplies `generated_at` so the output is fully deterministic
/// for a given input; the clock lives at the application boundary.
pub fn build_report(
    page_url: &str,
    title: &str,
    findings: &[Finding],
    generated_at: OffsetDateTime,
) -> ScanReport {
    let severity_counts = SeverityCounts::from_findings(findings);

    let mut categories = CategoryCounts::default();
    for finding in findings {
        categories.bump(classify(&finding.code));
    }

    let detailed_issues = aggregate(findings);
    let total_unique_issues = detailed_issues.len() as u32;

    ScanReport {
        summary: ScanSummary {
            url: page_url.to_string(),
            title: title.to_string(),
            total: findings.len() as u32,
            errors: severity_counts.errors,
            warnings: severity_counts.warnings,
            notices: severity_counts.notices,
            timestamp: generated_at,
        },
        categories,
        detailed_issues,
        total_unique_issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const FROZEN: OffsetDateTime = datetime!(2025-06-01 12:00:00 UTC);

    #[test]
    fn empty_findings_yield_zeroed_report() {
        let report = build_report("https://example.com", "Example", &[], FROZEN);

        assert_eq!(report.summary.total, 0);
        assert_eq!(report.summary.errors, 0);
        assert_eq!(report.summary.warnings, 0);
        assert_eq!(report.summary.notices, 0);
        assert_eq!(report.categories.total(), 0);
        assert!(report.detailed_issues.is_empty());
        assert_eq!(report.total_unique_issues, 0);
    }

    #[test]
    fn severity_tallies_match_input() {
        let findings = vec![
            Finding::new("image-alt", Severity::Error, "missing alt"),
            Finding::new("color-contrast", Severity::Error, "low contrast"),
            Finding::new("heading-order", Severity::Warning, "skipped level"),
            Finding::new("region", Severity::Notice, "landmark"),
        ];

        let report = build_report("https://example.com", "Example", &findings, FROZEN);
        assert_eq!(report.summary.total, 4);
        assert_eq!(report.summary.errors, 2);
        assert_eq!(report.summary.warnings, 1);
        assert_eq!(report.summary.notices, 1);
    }

    #[test]
    fn categories_tallied_over_every_finding() {
        let findings = vec![
            Finding::new("image-alt", Severity::Error, "perceivable"),
            Finding::new("image-alt", Severity::Error, "perceivable again"),
            Finding::new("button-name", Severity::Error, "operable"),
            Finding::new("unmapped-rule", Severity::Notice, "other"),
        ];

        let report = build_report("https://example.com", "Example", &findings, FROZEN);
        assert_eq!(report.categories.perceivable, 2);
        assert_eq!(report.categories.operable, 1);
        assert_eq!(report.categories.other, 1);
        assert_eq!(report.categories.total(), 4);
        // Duplicate codes collapse in detailedIssues but not in categories.
        assert_eq!(report.total_unique_issues, 3);
    }

    #[test]
    fn frozen_clock_gives_identical_reports() {
        let findings = vec![
            Finding::new("link-name", Severity::Error, "empty link"),
            Finding::new("link-name", Severity::Error, "empty link"),
            Finding::new("html-has-lang", Severity::Warning, "no lang"),
        ];

        let a = build_report("https://example.com", "Example", &findings, FROZEN);
        let b = build_report("https://example.com", "Example", &findings, FROZEN);
        assert_eq!(a, b);
    }
}
