//! Level-wise Apriori frequent itemset mining

use crate::encoder::ItemMatrix;
use crate::error::MiningError;
use ndarray::Array2;
use rayon::prelude::*;
use std::collections::HashSet;

/// An immutable itemset: a sorted, deduplicated set of item column indices.
///
/// Sorting makes the representation canonical, so itemsets compare and hash
/// by content and can key maps and sets directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset(Vec<usize>);

impl Itemset {
    /// Build an itemset from item indices; input order and duplicates are irrelevant.
    pub fn new(mut items: Vec<usize>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    /// Single-item itemset.
    pub fn single(item: usize) -> Self {
        Self(vec![item])
    }

    /// Item indices in ascending order.
    pub fn items(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: usize) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    /// All (k-1)-subsets of this k-itemset, each obtained by dropping one item.
    fn one_smaller_subsets(&self) -> impl Iterator<Item = Itemset> + '_ {
        (0..self.0.len()).map(move |skip| {
            let items = self
                .0
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &item)| item)
                .collect();
            // Already sorted and unique
            Itemset(items)
        })
    }
}

/// A frequent itemset together with its observed support.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemset {
    pub items: Itemset,
    /// Fraction of transactions containing every item in the set, in [0, 1]
    pub support: f64,
}

/// Mine all itemsets with support >= `min_support` from the encoded matrix.
///
/// Classic level-wise Apriori: frequent 1-itemsets seed the search, each next
/// level joins pairs of frequent (k-1)-itemsets sharing a (k-2)-prefix, prunes
/// candidates with any infrequent (k-1)-subset, then counts support for the
/// survivors by scanning the matrix. Candidate counting is parallelized across
/// candidates; results within a level keep candidate order, so the output is
/// deterministic for a given input.
///
/// A zero-row matrix yields an empty result. `min_support` outside (0, 1] is
/// rejected before any scan; zero in particular would admit every itemset.
pub fn mine_frequent_itemsets(
    encoded: &ItemMatrix,
    min_support: f64,
) -> Result<Vec<FrequentItemset>, MiningError> {
    if !(min_support > 0.0 && min_support <= 1.0) {
        return Err(MiningError::InvalidParameter {
            name: "min_support",
            value: min_support,
        });
    }

    let n_transactions = encoded.n_transactions();
    if n_transactions == 0 {
        return Ok(Vec::new());
    }

    let mut frequent = Vec::new();

    // Level 1: column counts
    let mut current = frequent_singletons(encoded, min_support);

    // Levels k >= 2: join, prune, count
    while !current.is_empty() {
        frequent.extend(current.iter().cloned());

        let candidates = generate_candidates(&current);
        if candidates.is_empty() {
            break;
        }

        current = candidates
            .into_par_iter()
            .filter_map(|candidate| {
                let count = support_count(&candidate, &encoded.matrix);
                let support = count as f64 / n_transactions as f64;
                (support >= min_support).then_some(FrequentItemset {
                    items: candidate,
                    support,
                })
            })
            .collect();
    }

    Ok(frequent)
}

/// Frequent 1-itemsets, in column order.
fn frequent_singletons(encoded: &ItemMatrix, min_support: f64) -> Vec<FrequentItemset> {
    let n_transactions = encoded.n_transactions() as f64;
    (0..encoded.n_items())
        .filter_map(|col| {
            let count = encoded.matrix.column(col).iter().filter(|&&x| x).count();
            let support = count as f64 / n_transactions;
            (support >= min_support).then_some(FrequentItemset {
                items: Itemset::single(col),
                support,
            })
        })
        .collect()
}

/// Generate size-k candidates from the frequent (k-1)-itemsets.
///
/// The previous level is kept in lexicographic order, so two itemsets join
/// exactly when they share their first k-2 items; once prefixes diverge the
/// inner loop can stop. Candidates containing any infrequent (k-1)-subset are
/// dropped here, against a hash set of the previous level, before any matrix
/// scan happens.
fn generate_candidates(prev_level: &[FrequentItemset]) -> Vec<Itemset> {
    let prev_members: HashSet<&Itemset> = prev_level.iter().map(|f| &f.items).collect();

    let mut prev_sorted: Vec<&Itemset> = prev_level.iter().map(|f| &f.items).collect();
    prev_sorted.sort_unstable();

    let mut candidates = Vec::new();
    for i in 0..prev_sorted.len() {
        let left = prev_sorted[i].items();
        let prefix = &left[..left.len() - 1];

        for right in &prev_sorted[i + 1..] {
            let right = right.items();
            if &right[..right.len() - 1] != prefix {
                // Sorted order: no later itemset shares this prefix either
                break;
            }

            // left and right differ only in their last item, left's being smaller
            let mut items = left.to_vec();
            items.push(right[right.len() - 1]);
            let candidate = Itemset(items);

            if candidate
                .one_smaller_subsets()
                .all(|subset| prev_members.contains(&subset))
            {
                candidates.push(candidate);
            }
        }
    }

    candidates
}

/// Number of transactions containing every item of the set.
fn support_count(itemset: &Itemset, matrix: &Array2<bool>) -> usize {
    matrix
        .rows()
        .into_iter()
        .filter(|row| itemset.items().iter().all(|&col| row[col]))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    fn tx(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn supports(frequent: &[FrequentItemset]) -> Vec<(Vec<usize>, f64)> {
        frequent
            .iter()
            .map(|f| (f.items.items().to_vec(), f.support))
            .collect()
    }

    #[test]
    fn test_itemset_canonical() {
        assert_eq!(Itemset::new(vec![3, 1, 2, 1]), Itemset::new(vec![1, 2, 3]));
        assert_eq!(Itemset::new(vec![2]).items(), &[2]);
    }

    #[test]
    fn test_itemset_contains() {
        let set = Itemset::new(vec![0, 2, 5]);
        assert!(set.contains(2));
        assert!(!set.contains(3));
    }

    #[test]
    fn test_one_smaller_subsets() {
        let set = Itemset::new(vec![0, 1, 2]);
        let subsets: Vec<Itemset> = set.one_smaller_subsets().collect();
        assert_eq!(
            subsets,
            vec![
                Itemset::new(vec![1, 2]),
                Itemset::new(vec![0, 2]),
                Itemset::new(vec![0, 1]),
            ]
        );
    }

    #[test]
    fn test_scenario_a() {
        // [{milk,bread}, {milk,bread,eggs}, {bread}, {milk}], min_support 0.5
        let encoded = encode(&[
            tx(&["milk", "bread"]),
            tx(&["milk", "bread", "eggs"]),
            tx(&["bread"]),
            tx(&["milk"]),
        ]);
        // Columns sorted: bread=0, eggs=1, milk=2
        let frequent = mine_frequent_itemsets(&encoded, 0.5).unwrap();
        let mut result = supports(&frequent);
        result.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(
            result,
            vec![
                (vec![0], 0.75),       // {bread}
                (vec![0, 2], 0.5),     // {bread, milk}
                (vec![2], 0.75),       // {milk}
            ]
        );
    }

    #[test]
    fn test_downward_closure() {
        let encoded = encode(&[
            tx(&["a", "b", "c"]),
            tx(&["a", "b"]),
            tx(&["a", "c"]),
            tx(&["b", "c"]),
            tx(&["a", "b", "c"]),
        ]);
        let frequent = mine_frequent_itemsets(&encoded, 0.4).unwrap();
        let members: HashSet<&Itemset> = frequent.iter().map(|f| &f.items).collect();

        for f in &frequent {
            if f.items.len() >= 2 {
                for subset in f.items.one_smaller_subsets() {
                    assert!(
                        members.contains(&subset),
                        "subset {subset:?} of {:?} missing",
                        f.items
                    );
                }
            }
        }
    }

    #[test]
    fn test_support_matches_brute_force() {
        let transactions = vec![
            tx(&["a", "b", "d"]),
            tx(&["b", "c"]),
            tx(&["a", "c", "d"]),
            tx(&["a", "b", "c"]),
            tx(&["d"]),
        ];
        let encoded = encode(&transactions);
        let frequent = mine_frequent_itemsets(&encoded, 0.2).unwrap();
        assert!(!frequent.is_empty());

        for f in &frequent {
            let labels: Vec<&str> = encoded.labels(f.items.items());
            let count = transactions
                .iter()
                .filter(|t| labels.iter().all(|l| t.iter().any(|cell| cell == l)))
                .count();
            let expected = count as f64 / transactions.len() as f64;
            assert!((f.support - expected).abs() < 1e-12);
            assert!(f.support >= 0.2 && f.support <= 1.0);
        }
    }

    #[test]
    fn test_all_items_everywhere() {
        let encoded = encode(&[tx(&["a", "b"]), tx(&["a", "b"]), tx(&["a", "b"])]);
        let frequent = mine_frequent_itemsets(&encoded, 1.0).unwrap();
        let mut sets = supports(&frequent);
        sets.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            sets,
            vec![(vec![0], 1.0), (vec![0, 1], 1.0), (vec![1], 1.0)]
        );
    }

    #[test]
    fn test_empty_matrix() {
        let encoded = encode(&[]);
        let frequent = mine_frequent_itemsets(&encoded, 0.5).unwrap();
        assert!(frequent.is_empty());
    }

    #[test]
    fn test_min_support_zero_rejected() {
        let encoded = encode(&[tx(&["a"])]);
        let err = mine_frequent_itemsets(&encoded, 0.0).unwrap_err();
        assert!(matches!(
            err,
            MiningError::InvalidParameter {
                name: "min_support",
                ..
            }
        ));
    }

    #[test]
    fn test_min_support_out_of_range_rejected() {
        let encoded = encode(&[tx(&["a"])]);
        assert!(mine_frequent_itemsets(&encoded, 1.5).is_err());
        assert!(mine_frequent_itemsets(&encoded, -0.1).is_err());
        assert!(mine_frequent_itemsets(&encoded, f64::NAN).is_err());
    }

    #[test]
    fn test_prune_skips_candidates_with_infrequent_subsets() {
        // {a,b} and {a,c} frequent, {b,c} not: {a,b,c} must be pruned before
        // any counting, which generate_candidates makes observable.
        let level: Vec<FrequentItemset> = [vec![0, 1], vec![0, 2]]
            .into_iter()
            .map(|items| FrequentItemset {
                items: Itemset::new(items),
                support: 0.5,
            })
            .collect();
        assert!(generate_candidates(&level).is_empty());
    }

    #[test]
    fn test_candidate_join_requires_shared_prefix() {
        let level: Vec<FrequentItemset> = [vec![0, 1], vec![0, 2], vec![1, 2]]
            .into_iter()
            .map(|items| FrequentItemset {
                items: Itemset::new(items),
                support: 0.5,
            })
            .collect();
        // Only {0,1} x {0,2} share a prefix; all 2-subsets of {0,1,2} are frequent
        assert_eq!(generate_candidates(&level), vec![Itemset::new(vec![0, 1, 2])]);
    }

    #[test]
    fn test_idempotent_runs() {
        let transactions = vec![
            tx(&["a", "b", "c"]),
            tx(&["a", "b"]),
            tx(&["b", "c"]),
            tx(&["a", "c"]),
        ];
        let encoded = encode(&transactions);
        let first = mine_frequent_itemsets(&encoded, 0.5).unwrap();
        let second = mine_frequent_itemsets(&encoded, 0.5).unwrap();

        let as_set = |v: &[FrequentItemset]| -> HashSet<(Vec<usize>, u64)> {
            v.iter()
                .map(|f| (f.items.items().to_vec(), f.support.to_bits()))
                .collect()
        };
        assert_eq!(as_set(&first), as_set(&second));
    }
}
