use ndarray::{s, Array1};
use serde::{Deserialize, Serialize};

use crate::error::TransferError;

/// One measured or derived quantity seen three ways: the full sweep plus
/// its forward and reverse legs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub raw: Array1<f64>,
    pub forward: Array1<f64>,
    pub reverse: Array1<f64>,
}

impl Sequence {
    /// Slices a raw sweep at the turning point. Both legs keep the turning
    /// sample so leg-local calculations next to it stay valid, which means
    /// `forward.len() + reverse.len() == raw.len() + 1`.
    pub fn split(raw: Array1<f64>, split_idx: usize) -> Result<Self, TransferError> {
        if raw.len() < 2 {
            return Err(TransferError::InsufficientData {
                got: raw.len(),
                min: 2,
            });
        }
        debug_assert!(split_idx < raw.len());
        let forward = raw.slice(s![..=split_idx]).to_owned();
        let reverse = raw.slice(s![split_idx..]).to_owned();
        Ok(Self {
            raw,
            forward,
            reverse,
        })
    }

    /// Assembles a derived quantity (such as gm) whose legs are recomputed
    /// from each segment's own data instead of sliced out of `raw`.
    pub(crate) fn from_parts(
        raw: Array1<f64>,
        forward: Array1<f64>,
        reverse: Array1<f64>,
    ) -> Self {
        Self {
            raw,
            forward,
            reverse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn legs_share_the_turning_sample() {
        let seq = Sequence::split(array![0.0, 1.0, 2.0, 1.0, 0.0], 2).unwrap();
        assert_eq!(seq.forward, array![0.0, 1.0, 2.0]);
        assert_eq!(seq.reverse, array![2.0, 1.0, 0.0]);
        assert_eq!(seq.forward.len() + seq.reverse.len(), seq.raw.len() + 1);
    }

    #[test]
    fn split_at_the_last_sample_leaves_a_one_sample_reverse_leg() {
        let seq = Sequence::split(array![0.0, 1.0, 2.0], 2).unwrap();
        assert_eq!(seq.forward.len(), 3);
        assert_eq!(seq.reverse, array![2.0]);
    }

    #[test]
    fn short_input_is_rejected() {
        let err = Sequence::split(array![1.0], 0).unwrap_err();
        assert!(matches!(
            err,
            TransferError::InsufficientData { got: 1, min: 2 }
        ));
    }
}
