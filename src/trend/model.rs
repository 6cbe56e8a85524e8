//! Fitted regression models and the trend-forecasting facade.

use crate::error::{Result, TrendError};
use crate::trend::aggregate::YearlyCount;
use crate::trend::polyfit::{polyfit, Centering};

/// An immutable polynomial regression model, coefficients in ascending
/// powers of the year.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialModel {
    coefficients: Vec<f64>,
}

impl PolynomialModel {
    pub(crate) fn new(coefficients: Vec<f64>) -> Self {
        debug_assert!(!coefficients.is_empty());
        Self { coefficients }
    }

    /// Degree of the fitted polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Fitted coefficients, constant term first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Evaluate the polynomial at a year via Horner's scheme.
    ///
    /// Pure and deterministic; no bounds are applied, since extrapolating
    /// beyond the training range is the primary use.
    pub fn evaluate(&self, year: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * year + c)
    }

    /// Predict a count for each year in order, preserving input ordering
    /// and length.
    pub fn forecast(&self, years: &[f64]) -> Vec<(f64, f64)> {
        years.iter().map(|&y| (y, self.evaluate(y))).collect()
    }
}

/// Linear and cubic growth models fitted to one yearly aggregate.
///
/// Both models are fitted once from the same data and held read-only;
/// forecasts are computed on demand and never cached.
#[derive(Debug, Clone)]
pub struct TrendForecaster {
    linear: PolynomialModel,
    cubic: PolynomialModel,
    last_year: i32,
}

impl TrendForecaster {
    /// Fit both models to a yearly aggregate.
    ///
    /// The cubic fit needs at least four distinct years; fewer surface
    /// `InsufficientData`.
    pub fn fit(yearly: &[YearlyCount], centering: Centering) -> Result<Self> {
        if yearly.is_empty() {
            return Err(TrendError::EmptyData);
        }

        let years: Vec<f64> = yearly.iter().map(|c| c.year as f64).collect();
        let counts: Vec<f64> = yearly.iter().map(|c| c.count as f64).collect();

        let linear = polyfit(&years, &counts, 1, centering)?;
        let cubic = polyfit(&years, &counts, 3, centering)?;
        let last_year = yearly[yearly.len() - 1].year;

        Ok(Self {
            linear,
            cubic,
            last_year,
        })
    }

    /// The fitted degree-1 model.
    pub fn linear(&self) -> &PolynomialModel {
        &self.linear
    }

    /// The fitted degree-3 model.
    pub fn cubic(&self) -> &PolynomialModel {
        &self.cubic
    }

    /// Last year with training data.
    pub fn last_year(&self) -> i32 {
        self.last_year
    }

    /// The `len` consecutive years starting one year after the last
    /// training year.
    pub fn horizon(&self, len: usize) -> Vec<f64> {
        (1..=len as i64)
            .map(|offset| (self.last_year as i64 + offset) as f64)
            .collect()
    }

    /// Forecast the given years with the linear model.
    pub fn forecast_linear(&self, years: &[f64]) -> Vec<(f64, f64)> {
        self.linear.forecast(years)
    }

    /// Forecast the given years with the cubic model.
    pub fn forecast_cubic(&self, years: &[f64]) -> Vec<(f64, f64)> {
        self.cubic.forecast(years)
    }
}
