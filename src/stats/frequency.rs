//! Frequency tables and chart-ready aggregates.

use std::collections::HashMap;

use crate::error::{Result, TrendError};

/// One bin of an equal-width histogram over `[lo, hi)`; the last bin is
/// closed on the right so the maximum lands in it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Count occurrences of each value, sorted by descending count with ties
/// broken by key so the result is deterministic.
pub fn value_counts<'a, I>(items: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Leading `n` entries of a frequency table (top cities, top makes).
pub fn top_n(counts: &[(String, usize)], n: usize) -> Result<Vec<(String, usize)>> {
    if n == 0 {
        return Err(TrendError::InvalidParameter(
            "top_n requires n >= 1".to_string(),
        ));
    }
    Ok(counts.iter().take(n).cloned().collect())
}

/// Frequency table with each entry's percentage of the total.
pub fn shares(counts: &[(String, usize)]) -> Vec<(String, usize, f64)> {
    let total: usize = counts.iter().map(|(_, c)| c).sum();
    counts
        .iter()
        .map(|(k, c)| {
            let pct = if total == 0 {
                0.0
            } else {
                100.0 * *c as f64 / total as f64
            };
            (k.clone(), *c, pct)
        })
        .collect()
}

/// Equal-width histogram over the observed range of `values`.
pub fn histogram(values: &[f64], bins: usize) -> Result<Vec<HistogramBin>> {
    if bins == 0 {
        return Err(TrendError::InvalidParameter(
            "histogram requires at least one bin".to_string(),
        ));
    }
    if values.is_empty() {
        return Err(TrendError::EmptyData);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if span == 0.0 {
        // Degenerate column: one bin holding everything.
        return Ok(vec![HistogramBin {
            lo: min,
            hi: max,
            count: values.len(),
        }]);
    }

    let width = span / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lo: min + i as f64 * width,
            hi: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    Ok(out)
}
