#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Error,
    Warning,
    Notice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSummary {
    pub url: String,
    pub title: String,
    pub total: u32,
    pub errors: u32,
    pub warnings: u32,
    pub notices: u32,
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableCategory {
    pub name: String,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableIssue {
    pub severity: RenderableSeverity,
    pub code: String,
    pub message: String,
    pub count: u32,
    pub impact: String,
    pub help_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub summary: RenderableSummary,
    pub categories: Vec<RenderableCategory>,
    pub issues: Vec<RenderableIssue>,
    pub total_unique_issues: u32,
}
