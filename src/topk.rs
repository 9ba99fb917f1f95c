//! Score post-processing: min-max rescaling and ranking.

use crate::{Error, Result};

/// Min-max rescale scores into `[0, 1]`: `y[i] = (x[i] - min) / (max - min)`.
///
/// Empty input yields empty output. Fails with `ZeroSpanNormalization` when every entry is
/// equal (the span is zero) and with `InvalidParameter` on NaN/infinite entries.
pub fn normalize(scores: &[f64]) -> Result<Vec<f64>> {
    if scores.is_empty() {
        return Ok(Vec::new());
    }
    if scores.iter().any(|x| !x.is_finite()) {
        return Err(Error::InvalidParameter(
            "scores must be finite".to_string(),
        ));
    }

    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if span == 0.0 {
        return Err(Error::ZeroSpanNormalization { len: scores.len() });
    }
    Ok(scores.iter().map(|&x| (x - min) / span).collect())
}

/// Indices of the `k` highest scores, best first. Ties go to the lower index; NaNs rank last.
pub fn top_k(scores: &[f64], k: usize) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..scores.len()).collect();
    idx.sort_by(|&a, &b| {
        let (x, y) = (scores[a], scores[b]);
        match (x.is_nan(), y.is_nan()) {
            (true, true) => a.cmp(&b),
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            (false, false) => y.total_cmp(&x).then(a.cmp(&b)),
        }
    });
    idx.truncate(k);
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_rescales_to_unit_interval() {
        assert_eq!(normalize(&[1.0, 3.0, 2.0]).unwrap(), vec![0.0, 1.0, 0.5]);
    }

    #[test]
    fn normalize_rejects_constant_vector() {
        let err = normalize(&[5.0, 5.0, 5.0]).unwrap_err();
        assert!(matches!(err, Error::ZeroSpanNormalization { len: 3 }));
        assert!(normalize(&[0.0]).is_err());
    }

    #[test]
    fn normalize_handles_empty_and_non_finite() {
        assert!(normalize(&[]).unwrap().is_empty());
        assert!(matches!(
            normalize(&[1.0, f64::NAN]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn top_k_orders_best_first_with_index_ties() {
        let s = [0.5, 2.0, f64::NAN, 2.0, 1.0];
        assert_eq!(top_k(&s, 3), vec![1, 3, 4]);
        assert_eq!(top_k(&s, 10), vec![1, 3, 4, 0, 2]);
        assert!(top_k(&s, 0).is_empty());
    }

    proptest! {
        #[test]
        fn prop_normalize_bounds(xs in proptest::collection::vec(-1e6f64..1e6, 2..30)) {
            let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
            let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assume!(max > min);
            let ys = normalize(&xs).unwrap();
            prop_assert_eq!(ys.len(), xs.len());
            prop_assert!(ys.iter().all(|y| (0.0..=1.0).contains(y)));
            let imin = xs.iter().position(|&x| x == min).unwrap();
            let imax = xs.iter().position(|&x| x == max).unwrap();
            prop_assert_eq!(ys[imin], 0.0);
            prop_assert_eq!(ys[imax], 1.0);
        }
    }
}
