use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::diff::{differentiate, segment_derivative};
use crate::error::TransferError;
use crate::point::{self, Point};
use crate::sequence::Sequence;
use crate::sweep::split_index;
use crate::threshold::{self, DeviceType};

/// A fully analysed transfer sweep.
///
/// Construction validates the input, splits the sweep at the gate-voltage
/// peak and computes every derived quantity up front; afterwards the
/// fields are plain read-only data. Two constructions from identical input
/// yield identical values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub device_type: DeviceType,
    /// Gate voltage sweep.
    pub vg: Sequence,
    /// Drain current sweep.
    pub i: Sequence,
    /// Transconductance dI/dVg, one sample shorter than the sweep. Its
    /// legs are differentiated from each leg's own data, not sliced out of
    /// `gm.raw`, so turning-point artifacts stay confined to the averaged
    /// turning sample.
    pub gm: Sequence,
    /// Peak transconductance, selected by magnitude (polarity-agnostic)
    /// but reported signed.
    pub gm_max: Point,
    /// Signed maximum drain current.
    pub i_max: Point,
    /// Signed minimum drain current.
    pub i_min: Point,
    /// Turn-on voltage from the extreme log-current slope.
    pub von: Point,
}

impl Transfer {
    /// Analyses one gate-voltage / drain-current sweep.
    ///
    /// `x` and `y` must be the same length, hold at least two samples and
    /// contain no NaN or infinities; validation happens before any
    /// computation and a failed construction returns nothing partial.
    pub fn new(x: &[f64], y: &[f64], device_type: DeviceType) -> Result<Self, TransferError> {
        if x.len() != y.len() || x.len() < 2 {
            return Err(TransferError::Shape {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        for (array, values) in [("x", x), ("y", y)] {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(TransferError::InvalidValue { array, index });
            }
        }

        let x = Array1::from_vec(x.to_vec());
        let y = Array1::from_vec(y.to_vec());
        let split_idx = split_index(x.view());
        debug!(
            "analysing {:?} sweep: {} samples, turning point at index {split_idx}",
            device_type,
            x.len()
        );

        let vg = Sequence::split(x, split_idx)?;
        let i = Sequence::split(y, split_idx)?;
        let gm = Sequence::from_parts(
            differentiate(&i.raw, &vg.raw)?,
            segment_derivative(&i.forward, &vg.forward)?,
            segment_derivative(&i.reverse, &vg.reverse)?,
        );

        let gm_max = point::resolve(&gm, split_idx, point::argmax_magnitude)?;
        let i_max = point::resolve(&i, split_idx, point::argmax)?;
        let i_min = point::resolve(&i, split_idx, point::argmin)?;
        let von = threshold::locate(&vg, &i, split_idx, device_type)?;

        Ok(Self {
            device_type,
            vg,
            i,
            gm,
            gm_max,
            i_max,
            i_min,
            von,
        })
    }

    /// Parses the polarity flag, then analyses. Convenience for callers
    /// carrying the device type as text.
    pub fn with_device_str(x: &[f64], y: &[f64], device_type: &str) -> Result<Self, TransferError> {
        Transfer::new(x, y, device_type.parse()?)
    }
}
