//! Polynomial least-squares fitting.
//!
//! Solves the ordinary least-squares problem over the Vandermonde matrix
//! with a Householder QR factorization. QR avoids squaring the condition
//! number the way explicit normal equations would, which matters when the
//! independent variable is a calendar year raised to the third power.

use crate::error::{Result, TrendError};
use crate::trend::model::PolynomialModel;

/// Treatment of the independent variable before building the Vandermonde
/// matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Centering {
    /// Fit on the raw year values. This is the reference behavior and the
    /// default; it is kept so coefficients remain comparable with the
    /// reference output.
    #[default]
    None,
    /// Center years about their mean before fitting, then expand the
    /// solution back to raw-basis coefficients. The fitted function is the
    /// same polynomial, solved on a far better conditioned system.
    Mean,
}

/// Relative threshold below which a diagonal of R marks the system as
/// rank-deficient.
const RANK_TOLERANCE: f64 = 1e-10;

/// Fit a polynomial of the given degree to `(x, y)` pairs by ordinary
/// least squares.
///
/// Requires at least `degree + 1` distinct x values; fewer leave the fit
/// under-determined and are rejected with `InsufficientData`. A singular
/// or near-singular system surfaces `NumericalFit` instead of silently
/// wrong coefficients.
pub fn polyfit(
    x: &[f64],
    y: &[f64],
    degree: usize,
    centering: Centering,
) -> Result<PolynomialModel> {
    if x.len() != y.len() {
        return Err(TrendError::DimensionMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    if x.is_empty() {
        return Err(TrendError::EmptyData);
    }

    let needed = degree + 1;
    let distinct = distinct_count(x);
    if distinct < needed {
        return Err(TrendError::InsufficientData {
            needed,
            got: distinct,
        });
    }

    let offset = match centering {
        Centering::None => 0.0,
        Centering::Mean => x.iter().sum::<f64>() / x.len() as f64,
    };

    let n = x.len();
    let m = needed;
    let mut a = vec![vec![0.0; m]; n];
    for (i, &xi) in x.iter().enumerate() {
        let t = xi - offset;
        let mut power = 1.0;
        for col in a[i].iter_mut() {
            *col = power;
            power *= t;
        }
    }
    let mut b = y.to_vec();

    let solution = householder_lstsq(&mut a, &mut b)?;

    let coefficients = if offset == 0.0 {
        solution
    } else {
        expand_about(&solution, offset)
    };

    Ok(PolynomialModel::new(coefficients))
}

fn distinct_count(x: &[f64]) -> usize {
    let mut sorted: Vec<u64> = x.iter().map(|v| v.to_bits()).collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.len()
}

/// Solve `min ||a @ c - b||` for a tall matrix `a` (n >= m) in place via
/// Householder reflections, returning the coefficient vector of length m.
fn householder_lstsq(a: &mut [Vec<f64>], b: &mut [f64]) -> Result<Vec<f64>> {
    let n = a.len();
    let m = a[0].len();
    debug_assert!(n >= m);

    for k in 0..m {
        let norm = (k..n).map(|i| a[i][k] * a[i][k]).sum::<f64>().sqrt();
        let alpha = if a[k][k] >= 0.0 { -norm } else { norm };

        let mut v: Vec<f64> = (k..n).map(|i| a[i][k]).collect();
        v[0] -= alpha;
        let v_norm_sq: f64 = v.iter().map(|t| t * t).sum();

        if v_norm_sq > 0.0 {
            for j in (k + 1)..m {
                let dot: f64 = (k..n).map(|i| v[i - k] * a[i][j]).sum();
                let scale = 2.0 * dot / v_norm_sq;
                for i in k..n {
                    a[i][j] -= scale * v[i - k];
                }
            }
            let dot: f64 = (k..n).map(|i| v[i - k] * b[i]).sum();
            let scale = 2.0 * dot / v_norm_sq;
            for i in k..n {
                b[i] -= scale * v[i - k];
            }
        }

        a[k][k] = alpha;
        for i in (k + 1)..n {
            a[i][k] = 0.0;
        }
    }

    let max_diag = (0..m).map(|k| a[k][k].abs()).fold(0.0, f64::max);
    if max_diag == 0.0 {
        return Err(TrendError::NumericalFit(
            "design matrix is zero".to_string(),
        ));
    }
    for k in 0..m {
        if a[k][k].abs() <= RANK_TOLERANCE * max_diag {
            return Err(TrendError::NumericalFit(format!(
                "design matrix is rank-deficient at column {k}"
            )));
        }
    }

    // Back substitution on R @ c = Q' @ b.
    let mut c = vec![0.0; m];
    for k in (0..m).rev() {
        let mut sum = b[k];
        for j in (k + 1)..m {
            sum -= a[k][j] * c[j];
        }
        c[k] = sum / a[k][k];
    }
    Ok(c)
}

/// Expand coefficients of `p(t)` with `t = x - offset` into the raw-x
/// basis, so `evaluate` takes plain years regardless of how the fit was
/// conditioned.
fn expand_about(centered: &[f64], offset: f64) -> Vec<f64> {
    let d = centered.len();
    let mut raw = vec![0.0; d];
    for (j, &cj) in centered.iter().enumerate() {
        // c_j * (x - offset)^j contributes c_j * C(j, i) * (-offset)^(j-i)
        // to the coefficient of x^i.
        let mut term = cj;
        for i in (0..=j).rev() {
            raw[i] += term * binomial(j, i);
            term *= -offset;
        }
    }
    raw
}

fn binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}
