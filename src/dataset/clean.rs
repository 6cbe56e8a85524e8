//! Immutable cleaning pipeline.
//!
//! Each step consumes its input and returns a new collection, so there is
//! no shared table being mutated in place between steps. The full `clean`
//! pass mirrors the reference preparation: drop incomplete rows, drop
//! exact duplicates, then standardize the categorical text columns.

use std::collections::HashSet;

use crate::dataset::record::VehicleRecord;

/// Outcome of a full cleaning pass.
#[derive(Debug, Clone)]
pub struct CleanReport {
    /// Records that survived cleaning.
    pub records: Vec<VehicleRecord>,
    /// Rows seen in the input.
    pub rows_in: usize,
    /// Rows removed because a column was missing.
    pub dropped_incomplete: usize,
    /// Rows removed as exact duplicates of an earlier row.
    pub dropped_duplicates: usize,
}

/// Remove rows with any missing column. Returns the kept rows and the
/// number dropped.
pub fn drop_missing(records: Vec<VehicleRecord>) -> (Vec<VehicleRecord>, usize) {
    let before = records.len();
    let kept: Vec<VehicleRecord> = records.into_iter().filter(|r| r.is_complete()).collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

/// Remove exact duplicate rows, keeping the first occurrence. Returns the
/// kept rows and the number dropped.
pub fn drop_duplicates(records: Vec<VehicleRecord>) -> (Vec<VehicleRecord>, usize) {
    let before = records.len();
    let mut seen = HashSet::with_capacity(before);
    let kept: Vec<VehicleRecord> = records
        .into_iter()
        .filter(|r| seen.insert(r.row_key()))
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

/// Standardize categorical text: makes in title case, models upper-cased.
pub fn standardize(records: Vec<VehicleRecord>) -> Vec<VehicleRecord> {
    records
        .into_iter()
        .map(|mut r| {
            r.make = r.make.map(|m| title_case(&m));
            r.model = r.model.map(|m| m.to_uppercase());
            r
        })
        .collect()
}

/// Run the full cleaning pass: drop incomplete rows, drop duplicates,
/// standardize text.
pub fn clean(records: Vec<VehicleRecord>) -> CleanReport {
    let rows_in = records.len();
    let (records, dropped_incomplete) = drop_missing(records);
    let (records, dropped_duplicates) = drop_duplicates(records);
    let records = standardize(records);
    CleanReport {
        records,
        rows_in,
        dropped_incomplete,
        dropped_duplicates,
    }
}

/// First letter of each alphabetic run upper-cased, the rest lower-cased.
/// A run restarts after any non-letter, so hyphenated makes come out as
/// `Mercedes-Benz`, not `Mercedes-benz`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}
