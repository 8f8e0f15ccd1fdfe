//! Pure finding classification and aggregation (no IO).
//!
//! Input: a flat list of normalized findings constructed elsewhere.
//! Output: category tallies + grouped, ranked issues + summary counts.

#![forbid(unsafe_code)]

pub mod aggregate;
pub mod classify;
pub mod report;

#[cfg(test)]
mod proptest;

pub use aggregate::aggregate;
pub use classify::classify;
pub use report::build_report;
