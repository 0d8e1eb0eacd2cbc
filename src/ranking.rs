//! Fractional (mid-rank) rank assignment.
//!
//! Ranks are 1-based and assigned in ascending order of value. Exact ties
//! receive the arithmetic mean of the ranks the group spans, so the total
//! rank sum is always `n(n+1)/2` regardless of how many ties occur. This is
//! the standard mid-rank convention used by rank-based tests.

/// Assigns fractional ranks to `values`, returned in input order.
///
/// Two values tied for ranks 4 and 5 each receive rank 4.5. Tie detection
/// uses exact equality; values that differ by any amount, however small,
/// occupy distinct ranks.
///
/// # Returns
///
/// `None` if `values` is empty or contains NaN.
///
/// # Examples
///
/// ```
/// use modeleval::ranking::fractional_ranks;
///
/// let ranks = fractional_ranks(&[3.0, 1.0, 4.0, 1.0]).unwrap();
/// assert_eq!(ranks, vec![3.0, 1.5, 4.0, 1.5]);
/// ```
pub fn fractional_ranks(values: &[f64]) -> Option<Vec<f64>> {
    let n = values.len();
    if n == 0 || values.iter().any(|v| v.is_nan()) {
        return None;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .expect("NaN filtered above")
    });

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && values[order[j]] == values[order[i]] {
            j += 1;
        }
        // Positions i..j (0-based) are tied; mid-rank = (i+1 + j) / 2.
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = avg_rank;
        }
        i = j;
    }
    Some(ranks)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_values_permutation() {
        let ranks = fractional_ranks(&[10.0, 30.0, 20.0]).unwrap();
        assert_eq!(ranks, vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_two_way_tie_gets_mid_rank() {
        // 5.0 and 5.0 span ranks 2 and 3 → both 2.5.
        let ranks = fractional_ranks(&[1.0, 5.0, 5.0, 9.0]).unwrap();
        assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
    }

    #[test]
    fn test_three_way_tie() {
        let ranks = fractional_ranks(&[7.0, 7.0, 7.0, 2.0]).unwrap();
        assert_eq!(ranks, vec![3.0, 3.0, 3.0, 1.0]);
    }

    #[test]
    fn test_all_tied() {
        let ranks = fractional_ranks(&[4.0; 5]).unwrap();
        assert_eq!(ranks, vec![3.0; 5]);
    }

    #[test]
    fn test_rank_sum_invariant_under_ties() {
        let data = [2.0, 2.0, 3.0, 3.0, 3.0, 1.0, 8.0];
        let ranks = fractional_ranks(&data).unwrap();
        let total: f64 = ranks.iter().sum();
        let n = data.len() as f64;
        assert!((total - n * (n + 1.0) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(fractional_ranks(&[]), None);
        assert_eq!(fractional_ranks(&[1.0, f64::NAN]), None);
    }
}
