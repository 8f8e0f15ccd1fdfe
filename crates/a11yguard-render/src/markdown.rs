use crate::{RenderableReport, RenderableSeverity};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Accessibility report\n\n");
    out.push_str(&format!(
        "- URL: {}\n- Title: {}\n- Generated: {}\n- Findings: **{}** ({} errors, {} warnings, {} notices)\n\n",
        report.summary.url,
        report.summary.title,
        report.summary.timestamp,
        report.summary.total,
        report.summary.errors,
        report.summary.warnings,
        report.summary.notices,
    ));

    out.push_str("## Categories\n\n");
    for category in &report.categories {
        out.push_str(&format!("- {}: {}\n", category.name, category.count));
    }
    out.push('\n');

    if report.issues.is_empty() {
        out.push_str("No issues found.\n");
        return out;
    }

    out.push_str(&format!(
        "## Issues ({} unique)\n\n",
        report.total_unique_issues
    ));

    for issue in &report.issues {
        let sev = match issue.severity {
            RenderableSeverity::Error => "ERROR",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Notice => "NOTICE",
        };
        out.push_str(&format!(
            "- [{}] `{}` — {} ({}x)\n",
            sev, issue.code, issue.message, issue.count
        ));
        if issue.impact != "unknown" {
            out.push_str(&format!("  - impact: {}\n", issue.impact));
        }
        if !issue.help_url.is_empty() {
            out.push_str(&format!("  - help: {}\n", issue.help_url));
        }
    }

    out
}
