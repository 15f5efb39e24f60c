use std::cmp::Ordering;

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::error::TransferError;
use crate::sequence::Sequence;

/// Which leg of the sweep an extremum falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepLeg {
    Forward,
    TurningPoint,
    Reverse,
}

impl SweepLeg {
    pub(crate) fn classify(idx: usize, split_idx: usize) -> Self {
        match idx.cmp(&split_idx) {
            Ordering::Less => SweepLeg::Forward,
            Ordering::Equal => SweepLeg::TurningPoint,
            Ordering::Greater => SweepLeg::Reverse,
        }
    }
}

/// A scalar figure of merit with its leg-local counterparts.
///
/// `forward` and `reverse` rerun the same selection rule on each leg alone
/// rather than slicing the raw answer, so they are segment-local optima;
/// comparing them against each other measures hysteresis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub raw: f64,
    pub forward: f64,
    pub reverse: f64,
    /// Leg of the sweep holding the raw extremum.
    pub leg: SweepLeg,
}

/// Runs an index-selection `rule` over a sequence's raw data and each leg
/// independently, classifying the raw hit against the turning point.
pub(crate) fn resolve<F>(
    seq: &Sequence,
    split_idx: usize,
    rule: F,
) -> Result<Point, TransferError>
where
    F: Fn(ArrayView1<'_, f64>) -> Option<usize>,
{
    let raw_idx = rule(seq.raw.view()).ok_or(TransferError::EmptySegment { segment: "raw" })?;
    let fwd_idx = rule(seq.forward.view()).ok_or(TransferError::EmptySegment {
        segment: "forward",
    })?;
    let rev_idx = rule(seq.reverse.view()).ok_or(TransferError::EmptySegment {
        segment: "reverse",
    })?;
    Ok(Point {
        raw: seq.raw[raw_idx],
        forward: seq.forward[fwd_idx],
        reverse: seq.reverse[rev_idx],
        leg: SweepLeg::classify(raw_idx, split_idx),
    })
}

/// First occurrence of the maximum.
pub(crate) fn argmax(values: ArrayView1<'_, f64>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, &v) in values.iter().enumerate() {
        match best {
            Some(b) if v <= values[b] => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// First occurrence of the minimum.
pub(crate) fn argmin(values: ArrayView1<'_, f64>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, &v) in values.iter().enumerate() {
        match best {
            Some(b) if v >= values[b] => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// First occurrence of the largest magnitude, polarity-agnostic.
pub(crate) fn argmax_magnitude(values: ArrayView1<'_, f64>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, &v) in values.iter().enumerate() {
        match best {
            Some(b) if v.abs() <= values[b].abs() => {}
            _ => best = Some(idx),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn classification_is_three_way() {
        assert_eq!(SweepLeg::classify(1, 3), SweepLeg::Forward);
        assert_eq!(SweepLeg::classify(3, 3), SweepLeg::TurningPoint);
        assert_eq!(SweepLeg::classify(4, 3), SweepLeg::Reverse);
    }

    #[test]
    fn argmax_ties_pick_the_first_occurrence() {
        let v = array![1.0, 5.0, 5.0, 0.0];
        assert_eq!(argmax(v.view()), Some(1));
        let v = array![2.0, -1.0, -1.0];
        assert_eq!(argmin(v.view()), Some(1));
    }

    #[test]
    fn magnitude_rule_ignores_sign() {
        let v = array![1.0, -4.0, 3.0];
        assert_eq!(argmax_magnitude(v.view()), Some(1));
    }

    #[test]
    fn empty_input_selects_nothing() {
        let v = array![];
        assert_eq!(argmax(v.view()), None);
        assert_eq!(argmin(v.view()), None);
        assert_eq!(argmax_magnitude(v.view()), None);
    }

    #[test]
    fn legs_are_resolved_independently() {
        // Raw maximum sits on the reverse leg; the forward leg has its own
        // smaller optimum.
        let seq = Sequence::from_parts(
            array![1.0, 3.0, 2.0, 0.5, 4.0],
            array![1.0, 3.0, 2.0],
            array![2.0, 0.5, 4.0],
        );
        let point = resolve(&seq, 2, argmax).unwrap();
        assert_eq!(point.raw, 4.0);
        assert_eq!(point.leg, SweepLeg::Reverse);
        assert_eq!(point.forward, 3.0);
        assert_eq!(point.reverse, 4.0);
    }

    #[test]
    fn empty_leg_is_reported() {
        let seq = Sequence::from_parts(array![1.0, 2.0], array![], array![2.0]);
        let err = resolve(&seq, 1, argmax).unwrap_err();
        assert!(matches!(
            err,
            TransferError::EmptySegment {
                segment: "forward"
            }
        ));
    }
}
