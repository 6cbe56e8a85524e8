//! Descriptive statistics over numeric columns.

use crate::dataset::VehicleRecord;
use crate::error::{Result, TrendError};

/// Five-number style summary of a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); NaN for fewer than
    /// two observations.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

/// Summarize a numeric column. NaN inputs are rejected upstream; an empty
/// column is an error rather than a summary full of NaN.
pub fn summarize(values: &[f64]) -> Result<NumericSummary> {
    if values.is_empty() {
        return Err(TrendError::EmptyData);
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let std_dev = if count < 2 {
        f64::NAN
    } else {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (count - 1) as f64).sqrt()
    };

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Ok(NumericSummary {
        count,
        mean,
        std_dev,
        min,
        max,
        median,
    })
}

/// Count of missing values per column, in the dataset's column order.
pub fn missing_counts(records: &[VehicleRecord]) -> Vec<(&'static str, usize)> {
    let mut counts = vec![
        ("VIN (1-10)", 0),
        ("County", 0),
        ("City", 0),
        ("State", 0),
        ("Postal Code", 0),
        ("Model Year", 0),
        ("Make", 0),
        ("Model", 0),
        ("Electric Vehicle Type", 0),
        ("CAFV Eligibility", 0),
        ("Electric Range", 0),
        ("Base MSRP", 0),
        ("Legislative District", 0),
        ("DOL Vehicle ID", 0),
        ("Vehicle Location", 0),
        ("Electric Utility", 0),
        ("2020 Census Tract", 0),
    ];
    for r in records {
        let missing = [
            r.vin_prefix.is_none(),
            r.county.is_none(),
            r.city.is_none(),
            r.state.is_none(),
            r.postal_code.is_none(),
            r.model_year.is_none(),
            r.make.is_none(),
            r.model.is_none(),
            r.ev_type.is_none(),
            r.cafv_eligibility.is_none(),
            r.electric_range.is_none(),
            r.base_msrp.is_none(),
            r.legislative_district.is_none(),
            r.dol_vehicle_id.is_none(),
            r.vehicle_location.is_none(),
            r.electric_utility.is_none(),
            r.census_tract.is_none(),
        ];
        for (slot, is_missing) in counts.iter_mut().zip(missing) {
            if is_missing {
                slot.1 += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn summarize_simple_column() {
        let summary = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.count, 8);
        assert_relative_eq!(summary.mean, 5.0, epsilon = 1e-12);
        // Sample std dev of this classic example is sqrt(32/7).
        assert_relative_eq!(summary.std_dev, (32.0f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(summary.min, 2.0, epsilon = 1e-12);
        assert_relative_eq!(summary.max, 9.0, epsilon = 1e-12);
        assert_relative_eq!(summary.median, 4.5, epsilon = 1e-12);
    }

    #[test]
    fn summarize_odd_length_median() {
        let summary = summarize(&[3.0, 1.0, 2.0]).unwrap();
        assert_relative_eq!(summary.median, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn summarize_single_value_has_nan_std() {
        let summary = summarize(&[42.0]).unwrap();
        assert_eq!(summary.count, 1);
        assert!(summary.std_dev.is_nan());
        assert_relative_eq!(summary.median, 42.0, epsilon = 1e-12);
    }

    #[test]
    fn summarize_empty_is_an_error() {
        assert!(matches!(summarize(&[]), Err(TrendError::EmptyData)));
    }
}
