//! Mixed finite differences for sweep data with non-uniform spacing.
//!
//! Output sample `k` belongs to the window whose left endpoint is `x[k]`,
//! so differentiating an N-sample sweep yields N-1 slopes:
//! - `k == 0`: one-sided forward difference.
//! - interior `k`: mean of the backward slope over `(k-1, k)` and the
//!   forward slope over `(k, k+1)`. With comparable neighbouring steps this
//!   equals the central difference; at the turning point of a bidirectional
//!   sweep it averages the two one-sided derivatives instead of
//!   differencing across the direction reversal.
//!
//! Denominators are floored at [`DX_EPSILON`], so duplicate x samples give
//! a large but finite slope instead of NaN/Inf.

use ndarray::Array1;

use crate::error::TransferError;

/// Smallest step accepted in a denominator; any Δx closer to zero is
/// replaced by this value.
pub const DX_EPSILON: f64 = 1e-12;

/// Derivative df/dx of `f` with respect to `x`, one sample shorter than
/// the inputs.
///
/// For finite inputs the output is always finite, duplicate x values
/// included. Fails with [`TransferError::Shape`] on mismatched lengths and
/// [`TransferError::InsufficientData`] on fewer than two samples.
pub fn differentiate(f: &Array1<f64>, x: &Array1<f64>) -> Result<Array1<f64>, TransferError> {
    if f.len() != x.len() {
        return Err(TransferError::Shape {
            x_len: x.len(),
            y_len: f.len(),
        });
    }
    let n = f.len();
    if n < 2 {
        return Err(TransferError::InsufficientData { got: n, min: 2 });
    }
    let mut df = Array1::zeros(n - 1);
    for k in 0..n - 1 {
        df[k] = if k == 0 {
            one_sided(f[1] - f[0], x[1] - x[0])
        } else {
            let backward = one_sided(f[k] - f[k - 1], x[k] - x[k - 1]);
            let forward = one_sided(f[k + 1] - f[k], x[k + 1] - x[k]);
            0.5 * (backward + forward)
        };
    }
    Ok(df)
}

/// [`differentiate`] for a sweep leg, where the degenerate single-sample
/// leg of a monotonic sweep is legal: an isolated boundary sample has no
/// usable slope, so it is reported flat (`[0.0]`) to keep leg-local
/// extrema defined.
pub(crate) fn segment_derivative(
    f: &Array1<f64>,
    x: &Array1<f64>,
) -> Result<Array1<f64>, TransferError> {
    if f.len() < 2 && f.len() == x.len() {
        return Ok(Array1::zeros(1));
    }
    differentiate(f, x)
}

fn one_sided(df: f64, dx: f64) -> f64 {
    let dx = if dx.abs() > DX_EPSILON { dx } else { DX_EPSILON };
    df / dx
}
