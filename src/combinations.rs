use crate::catalog::Catalog;

/// Enumerates every multiset of `candidates` (with repetition) summing to `target`.
///
/// Each combination is returned in ascending order and no combination is
/// returned twice. Zero and repeated candidates are ignored. A target of
/// zero yields the single empty combination.
///
/// The search is exhaustive: its depth is bounded by `target / min(candidates)`
/// and it has no cancellation, so callers bound `target`.
#[must_use]
pub fn combinations_sum(target: u64, candidates: &[u64]) -> Vec<Vec<u64>> {
    let mut sorted: Vec<u64> = candidates.iter().copied().filter(|&v| v > 0).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut result = Vec::new();
    let mut path = Vec::new();
    backtrack(&sorted, 0, target, &mut path, &mut result);
    result
}

fn backtrack(
    candidates: &[u64],
    start: usize,
    remaining: u64,
    path: &mut Vec<u64>,
    result: &mut Vec<Vec<u64>>,
) {
    if remaining == 0 {
        result.push(path.clone());
        return;
    }
    for (index, &candidate) in candidates.iter().enumerate().skip(start) {
        // Sorted ascending: nothing further along fits either.
        if candidate > remaining {
            break;
        }
        path.push(candidate);
        backtrack(candidates, index, remaining - candidate, path, result);
        path.pop();
    }
}

/// All combinations of catalog values summing to `target`, optionally
/// restricted to the labels in `selected_keys`. Unknown keys are skipped.
#[must_use]
pub fn get_combinations(
    target: u64,
    catalog: &Catalog,
    selected_keys: Option<&[&str]>,
) -> Vec<Vec<u64>> {
    let candidates: Vec<u64> = match selected_keys {
        Some(keys) => catalog.select(keys).values().collect(),
        None => catalog.values().collect(),
    };
    combinations_sum(target, &candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_combination_sum() {
        let combos = combinations_sum(7, &[2, 3, 6, 7]);
        assert_eq!(combos, vec![vec![2, 2, 3], vec![7]]);
    }

    #[test]
    fn order_follows_depth_first_search() {
        let combos = combinations_sum(8, &[3, 2, 5]);
        assert_eq!(combos, vec![vec![2, 2, 2, 2], vec![2, 3, 3], vec![3, 5]]);
    }

    #[test]
    fn zero_target_yields_empty_combination() {
        assert_eq!(combinations_sum(0, &[1, 2]), vec![Vec::<u64>::new()]);
    }

    #[test]
    fn unreachable_target_yields_nothing() {
        assert!(combinations_sum(3, &[2, 4]).is_empty());
        assert!(combinations_sum(5, &[]).is_empty());
    }

    #[test]
    fn zero_and_duplicate_candidates_are_ignored() {
        assert_eq!(combinations_sum(2, &[0, 1, 1]), vec![vec![1, 1]]);
    }

    #[test]
    fn water_mass_from_selected_keys() {
        let catalog = crate::catalogs::organic_atoms();
        let combos = get_combinations(18, &catalog, Some(&["H", "O"]));
        assert_eq!(combos.len(), 2);
        assert_eq!(combos[0], vec![1; 18]);
        assert_eq!(combos[1], vec![1, 1, 16]);
    }
}
