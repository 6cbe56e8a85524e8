//! Yearly aggregation of registration records.

use std::collections::BTreeMap;

use crate::dataset::VehicleRecord;

/// Number of registrations observed for one model year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyCount {
    pub year: i32,
    pub count: u64,
}

/// Extract the model-year column from cleaned records. Rows still missing
/// a year after cleaning are skipped.
pub fn model_years(records: &[VehicleRecord]) -> Vec<i32> {
    records.iter().filter_map(|r| r.model_year).collect()
}

/// Group years and count occurrences, sorted ascending by year.
///
/// Grouping is order-independent, each distinct year appears exactly once,
/// and a year with no records is absent rather than reported as zero. An
/// empty input yields an empty aggregate; the fit step then fails
/// explicitly instead of silently producing a model from nothing.
pub fn adoption_by_year(years: &[i32]) -> Vec<YearlyCount> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for &year in years {
        *counts.entry(year).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(year, count)| YearlyCount { year, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_groups_and_sorts() {
        let years = [2020, 2018, 2020, 2019, 2020, 2018];
        let agg = adoption_by_year(&years);
        assert_eq!(
            agg,
            vec![
                YearlyCount { year: 2018, count: 2 },
                YearlyCount { year: 2019, count: 1 },
                YearlyCount { year: 2020, count: 3 },
            ]
        );
    }

    #[test]
    fn aggregate_is_order_independent() {
        let a = adoption_by_year(&[2019, 2018, 2019]);
        let b = adoption_by_year(&[2019, 2019, 2018]);
        assert_eq!(a, b);
    }

    #[test]
    fn aggregate_preserves_total_count() {
        let years = [2015, 2016, 2016, 2017, 2017, 2017, 2015];
        let agg = adoption_by_year(&years);
        let total: u64 = agg.iter().map(|c| c.count).sum();
        assert_eq!(total, years.len() as u64);
    }

    #[test]
    fn aggregate_of_empty_input_is_empty() {
        assert!(adoption_by_year(&[]).is_empty());
    }

    #[test]
    fn missing_years_are_absent_not_zero() {
        let agg = adoption_by_year(&[2015, 2018]);
        let years: Vec<i32> = agg.iter().map(|c| c.year).collect();
        assert_eq!(years, vec![2015, 2018]);
    }
}
