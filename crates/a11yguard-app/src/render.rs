//! Report serialization and renderable conversion.

use a11yguard_render::{
    RenderableCategory, RenderableIssue, RenderableReport, RenderableSeverity, RenderableSummary,
};
use a11yguard_types::{Category, ReportEnvelope, Severity};
use anyhow::Context;
use time::format_description::well_known::Rfc3339;

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize scan report")
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    serde_json::from_str(text).context("parse scan report json")
}

pub fn render_markdown(report: &RenderableReport) -> String {
    a11yguard_render::render_markdown(report)
}

pub fn to_renderable(envelope: &ReportEnvelope) -> RenderableReport {
    let report = &envelope.report;

    let categories = Category::ALL
        .iter()
        .map(|category| RenderableCategory {
            name: format!("{category:?}"),
            count: report.categories.get(*category),
        })
        .collect();

    let issues = report
        .detailed_issues
        .iter()
        .map(|group| RenderableIssue {
            severity: match group.severity {
                Severity::Error => RenderableSeverity::Error,
                Severity::Warning => RenderableSeverity::Warning,
                Severity::Notice => RenderableSeverity::Notice,
            },
            code: group.code.clone(),
            message: group.message.clone(),
            count: group.count,
            impact: group.impact.clone(),
            help_url: group.help_url.clone(),
        })
        .collect();

    RenderableReport {
        summary: RenderableSummary {
            url: report.summary.url.clone(),
            title: report.summary.title.clone(),
            total: report.summary.total,
            errors: report.summary.errors,
            warnings: report.summary.warnings,
            notices: report.summary.notices,
            timestamp: report
                .summary
                .timestamp
                .format(&Rfc3339)
                .unwrap_or_default(),
        },
        categories,
        issues,
        total_unique_issues: report.total_unique_issues,
    }
}
