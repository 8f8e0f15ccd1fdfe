use a11yguard_types::{Finding, IssueGroup, Occurrence};
use indexmap::IndexMap;

/// Group findings by code and rank the groups by occurrence count.
///
/// The map is insertion-ordered, so after the stable descending sort groups
/// with equal counts retain first-seen order. A group's representative
/// `type`/`message`/`impact`/`helpUrl` come from the first finding with that
/// code; every finding (including the first) contributes an occurrence.
pub fn aggregate(findings: &[Finding]) -> Vec<IssueGroup> {
    let mut groups: IndexMap<&str, IssueGroup> = IndexMap::new();

    for finding in findings {
        let group = groups
            .entry(finding.code.as_str())
            .or_insert_with(|| IssueGroup {
                code: finding.code.clone(),
                severity: finding.severity,
                message: finding.message.clone(),
                impact: finding.impact.clone(),
                help_url: finding.help_url.clone(),
                count: 0,
                occurrences: Vec::new(),
            });
        group.count += 1;
        group.occurrences.push(Occurrence {
            selector: finding.selector.clone(),
            context: finding.context.clone(),
            runner: finding.runner.clone(),
        });
    }

    let mut ranked: Vec<IssueGroup> = groups.into_values().collect();
    // Vec::sort_by_key is stable; Reverse gives descending count.
    ranked.sort_by_key(|g| std::cmp::Reverse(g.count));
    ranked
}
