//! # ev-trends
//!
//! Exploratory analysis and growth forecasting for a registered
//! electric-vehicle population dataset.
//!
//! The crate loads the EV population CSV, cleans it through an immutable
//! pipeline, computes descriptive statistics and chart-ready aggregates,
//! and fits linear and cubic regression models to forecast registration
//! counts for future model years.

pub mod dataset;
pub mod error;
pub mod stats;
pub mod trend;

pub use error::{Result, TrendError};

pub mod prelude {
    pub use crate::dataset::{clean, load_csv, VehicleRecord};
    pub use crate::error::{Result, TrendError};
    pub use crate::trend::{adoption_by_year, Centering, PolynomialModel, TrendForecaster};
}
