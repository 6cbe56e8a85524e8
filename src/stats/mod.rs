//! Descriptive statistics and exploratory aggregates.
//!
//! These produce the data behind the exploratory charts (top cities, EV
//! type shares, range distribution); rendering is out of scope.

mod frequency;
mod summary;

pub use frequency::{histogram, shares, top_n, value_counts, HistogramBin};
pub use summary::{missing_counts, summarize, NumericSummary};
