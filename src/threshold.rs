//! Turn-on voltage from the extreme slope of log10 drain current.

use std::str::FromStr;

use log::trace;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::diff::differentiate;
use crate::error::TransferError;
use crate::point::{Point, SweepLeg};
use crate::sequence::Sequence;

/// Device polarity. Decides which extreme of the log-current slope marks
/// turn-on: N-type devices turn on where the slope peaks, P-type where it
/// bottoms out. This is the only behavioral difference between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    N,
    P,
}

impl FromStr for DeviceType {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(DeviceType::N),
            "P" => Ok(DeviceType::P),
            _ => Err(TransferError::InvalidDeviceType(s.to_string())),
        }
    }
}

/// Currents below this magnitude are floored before taking log10, so a
/// zero current sample cannot inject -inf into the slope.
pub const LOG_CURRENT_FLOOR: f64 = 1e-12;

/// Locates Von on the raw sweep and on each leg independently.
pub(crate) fn locate(
    vg: &Sequence,
    i: &Sequence,
    split_idx: usize,
    device: DeviceType,
) -> Result<Point, TransferError> {
    let raw_idx = von_index(&vg.raw, &i.raw, device)?;
    trace!("Von at sample {raw_idx} of {}", vg.raw.len());
    Ok(Point {
        raw: vg.raw[raw_idx],
        forward: leg_von(&vg.forward, &i.forward, device, "forward")?,
        reverse: leg_von(&vg.reverse, &i.reverse, device, "reverse")?,
        leg: SweepLeg::classify(raw_idx, split_idx),
    })
}

/// Gate-voltage index of the extreme log-current slope.
///
/// Slope sample `k` spans the window `(k, k+1)`; the turn-on voltage is
/// read at the right endpoint, with ties resolving to the last extreme
/// sample. A ramp with constant log slope therefore reports Von at the top
/// of the ramp.
fn von_index(vg: &Array1<f64>, i: &Array1<f64>, device: DeviceType) -> Result<usize, TransferError> {
    let log_i = i.mapv(|v| v.abs().max(LOG_CURRENT_FLOOR).log10());
    let slope = differentiate(&log_i, vg)?;
    let mut best = 0usize;
    for (k, &s) in slope.iter().enumerate().skip(1) {
        let better = match device {
            DeviceType::N => s >= slope[best],
            DeviceType::P => s <= slope[best],
        };
        if better {
            best = k;
        }
    }
    Ok(best + 1)
}

fn leg_von(
    vg: &Array1<f64>,
    i: &Array1<f64>,
    device: DeviceType,
    leg: &'static str,
) -> Result<f64, TransferError> {
    if vg.is_empty() {
        return Err(TransferError::EmptySegment { segment: leg });
    }
    if vg.len() < 2 {
        // A one-sample leg has no slope; its only voltage is the reading.
        return Ok(vg[0]);
    }
    Ok(vg[von_index(vg, i, device)?])
}
