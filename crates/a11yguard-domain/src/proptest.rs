//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Classifier totality and determinism
//! - Aggregation count conservation and ranking order
//! - Report builder determinism under a frozen clock

use crate::{aggregate, build_report, classify};
use a11yguard_types::{Category, Finding, Severity};
use proptest::prelude::*;
use std::collections::HashMap;
use time::macros::datetime;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for rule codes in the shapes real audit engines emit: axe-style
/// kebab-case, HTML_CodeSniffer-style dotted paths, and arbitrary junk.
fn arb_code() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z][a-z0-9-]{0,30}").unwrap(),
        prop::string::string_regex("WCAG2AA(\\.[A-Za-z0-9_]{1,12}){1,4}").unwrap(),
        prop::string::string_regex("[ -~]{0,40}").unwrap(),
    ]
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Error),
        Just(Severity::Warning),
        Just(Severity::Notice),
    ]
}

fn arb_finding() -> impl Strategy<Value = Finding> {
    (
        arb_code(),
        arb_severity(),
        "[a-z ]{1,40}",
        prop::option::of("#[a-z]{1,10}"),
        prop::option::of("<div>[a-z]{0,10}</div>"),
        prop::option::of(prop_oneof![Just("axe".to_string()), Just("htmlcs".to_string())]),
    )
        .prop_map(|(code, severity, message, selector, context, runner)| {
            let mut f = Finding::new(code, severity, message);
            f.selector = selector;
            f.context = context;
            f.runner = runner;
            f
        })
}

// ============================================================================
// Property tests: Classifier
// ============================================================================

proptest! {
    /// classify is total: every string lands in exactly one of the five
    /// fixed categories.
    #[test]
    fn classify_is_total(code in arb_code()) {
        let category = classify(&code);
        prop_assert!(Category::ALL.contains(&category));
    }

    /// classify is deterministic: re-running with the same code always
    /// returns the same category.
    #[test]
    fn classify_is_deterministic(code in arb_code()) {
        prop_assert_eq!(classify(&code), classify(&code));
    }

    /// Case variants of the same code classify identically.
    #[test]
    fn classify_ignores_case(code in prop::string::string_regex("[a-zA-Z-]{1,30}").unwrap()) {
        prop_assert_eq!(classify(&code), classify(&code.to_uppercase()));
        prop_assert_eq!(classify(&code), classify(&code.to_lowercase()));
    }
}

// ============================================================================
// Property tests: Aggregator
// ============================================================================

proptest! {
    /// Count conservation: the group counts always sum to the number of
    /// input findings.
    #[test]
    fn group_counts_sum_to_input_length(findings in prop::collection::vec(arb_finding(), 0..40)) {
        let groups = aggregate(&findings);
        let total: u32 = groups.iter().map(|g| g.count).sum();
        prop_assert_eq!(total as usize, findings.len());
    }

    /// Occurrence conservation: every finding contributes exactly one
    /// occurrence to its group.
    #[test]
    fn occurrences_match_counts(findings in prop::collection::vec(arb_finding(), 0..40)) {
        for group in aggregate(&findings) {
            prop_assert_eq!(group.occurrences.len() as u32, group.count);
        }
    }

    /// Groups are sorted non-increasing by count; ties retain the order in
    /// which each code was first seen in the input.
    #[test]
    fn ranking_is_descending_and_tie_stable(findings in prop::collection::vec(arb_finding(), 0..40)) {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        for (i, f) in findings.iter().enumerate() {
            first_seen.entry(f.code.as_str()).or_insert(i);
        }

        let groups = aggregate(&findings);
        for pair in groups.windows(2) {
            prop_assert!(
                pair[0].count >= pair[1].count,
                "counts not descending: {} before {}",
                pair[0].count,
                pair[1].count
            );
            if pair[0].count == pair[1].count {
                prop_assert!(
                    first_seen[pair[0].code.as_str()] < first_seen[pair[1].code.as_str()],
                    "tie broken against first-seen order: '{}' vs '{}'",
                    pair[0].code,
                    pair[1].code
                );
            }
        }
    }

    /// One group per distinct code.
    #[test]
    fn one_group_per_code(findings in prop::collection::vec(arb_finding(), 0..40)) {
        let distinct: std::collections::HashSet<&str> =
            findings.iter().map(|f| f.code.as_str()).collect();
        prop_assert_eq!(aggregate(&findings).len(), distinct.len());
    }
}

// ============================================================================
// Property tests: Report builder
// ============================================================================

proptest! {
    /// With a frozen clock the report is a pure function of its input.
    #[test]
    fn build_report_is_deterministic(findings in prop::collection::vec(arb_finding(), 0..30)) {
        let frozen = datetime!(2025-06-01 12:00:00 UTC);
        let a = build_report("https://example.com", "Example", &findings, frozen);
        let b = build_report("https://example.com", "Example", &findings, frozen);
        prop_assert_eq!(a, b);
    }

    /// Severity tallies and category tallies both conserve the input count.
    #[test]
    fn report_tallies_conserve_total(findings in prop::collection::vec(arb_finding(), 0..30)) {
        let frozen = datetime!(2025-06-01 12:00:00 UTC);
        let report = build_report("https://example.com", "Example", &findings, frozen);

        prop_assert_eq!(report.summary.total as usize, findings.len());
        prop_assert_eq!(
            report.summary.errors + report.summary.warnings + report.summary.notices,
            report.summary.total
        );
        prop_assert_eq!(report.categories.total(), report.summary.total);
        prop_assert_eq!(
            report.total_unique_issues as usize,
            report.detailed_issues.len()
        );
    }
}
