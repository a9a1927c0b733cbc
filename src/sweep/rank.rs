use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// One configuration's output: pair -> 1-based rank in heap-pop order.
pub type RankList = HashMap<(usize, usize), usize>;

/// A recommended pair with its fused rank. Ranks are integer medians and
/// may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecPair {
    pub l_rec: usize,
    pub r_rec: usize,
    pub rank: usize,
}

/// Fuse per-configuration rank lists into one recommendation list.
///
/// A pair absent from a configuration's list is treated as ranked `N + 1`
/// there, where `N` is the first list's size. Each pair's fused rank is
/// the integer median of its per-configuration ranks (even count: floor
/// average of the middle two). The output is sorted ascending by fused
/// rank; callers must not assume an order among equal ranks.
pub fn merge_rank_lists(lists: &[RankList]) -> Vec<RecPair> {
    let mut merged = Vec::new();
    if lists.is_empty() {
        return merged;
    }
    let nominal = lists[0].len();

    let mut all_pairs: BTreeSet<(usize, usize)> = BTreeSet::new();
    for list in lists {
        all_pairs.extend(list.keys().copied());
    }

    for &(l_rec, r_rec) in &all_pairs {
        let mut ranks: Vec<usize> = lists
            .iter()
            .map(|list| list.get(&(l_rec, r_rec)).copied().unwrap_or(nominal + 1))
            .collect();
        ranks.sort_unstable();

        let mid = ranks.len() / 2;
        let rank = if ranks.len() % 2 == 1 {
            ranks[mid]
        } else {
            (ranks[mid - 1] + ranks[mid]) / 2
        };

        merged.push(RecPair { l_rec, r_rec, rank });
    }

    merged.sort_by_key(|p| p.rank);
    merged
}
