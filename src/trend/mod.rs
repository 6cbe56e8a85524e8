//! Growth-trend forecasting: yearly aggregation, polynomial least
//! squares, and forecast generation.

mod aggregate;
mod model;
mod polyfit;

pub use aggregate::{adoption_by_year, model_years, YearlyCount};
pub use model::{PolynomialModel, TrendForecaster};
pub use polyfit::{polyfit, Centering};

/// Reference forecast horizon: the five years following the last year
/// with training data.
pub const DEFAULT_HORIZON: usize = 5;
