//! Rendering of scan reports for human-readable surfaces (Markdown).

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{
    RenderableCategory, RenderableIssue, RenderableReport, RenderableSeverity, RenderableSummary,
};
