use a11yguard_types::Category;

/// Ordered keyword families. First matching rule wins, so a code matching
/// several families (e.g. `aria-hidden-focus`) gets a deterministic answer.
const RULES: &[(&[&str], Category)] = &[
    (
        &["IMAGE", "CONTRAST", "COLOR", "TEXT"],
        Category::Perceivable,
    ),
    (&["LINK", "BUTTON", "FOCUS", "KEYBOARD"], Category::Operable),
    (&["LABEL", "LANG", "HEADING"], Category::Understandable),
    (&["ARIA", "ROLE", "MARKUP"], Category::Robust),
];

/// Map a finding code to a WCAG principle.
///
/// Total over all strings: unmatched codes map to `Other`. Matching is a
/// case-insensitive substring check against the uppercased code, which
/// approximates the four WCAG principles from common rule-naming
/// conventions.
pub fn classify(code: &str) -> Category {
    let upper = code.to_uppercase();
    for (keywords, category) in RULES {
        if keywords.iter().any(|k| upper.contains(k)) {
            return *category;
        }
    }
    Category::Other
}
