use ndarray::ArrayView1;

/// Index of the sweep turning point: the first occurrence of the maximum
/// gate voltage (strict `>` scan, so ties resolve to the earliest sample).
///
/// A monotonically rising sweep turns at its last sample; the reverse leg
/// then degenerates to that single sample.
pub fn split_index(x: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    for (idx, &v) in x.iter().enumerate().skip(1) {
        if v > x[best] {
            best = idx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn bidirectional_sweep_splits_at_the_peak() {
        let x = array![0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 0.0];
        assert_eq!(split_index(x.view()), 3);
    }

    #[test]
    fn ties_pick_the_first_occurrence() {
        let x = array![0.0, 3.0, 1.0, 3.0, 0.0];
        assert_eq!(split_index(x.view()), 1);
    }

    #[test]
    fn monotonic_sweep_turns_at_the_last_sample() {
        let x = array![0.0, 0.5, 1.0, 1.5];
        assert_eq!(split_index(x.view()), 3);
    }
}
