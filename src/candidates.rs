use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Pairs the external blocker already produced, keyed by left-record index.
///
/// Every pair in here is excluded from the recommendation output -- the
/// whole point is to surface what the blocker did *not* find.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateSet {
    pairs: HashMap<usize, HashSet<usize>>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `(l_rec, r_rec)` as already blocked.
    pub fn insert(&mut self, l_rec: usize, r_rec: usize) {
        self.pairs.entry(l_rec).or_default().insert(r_rec);
    }

    /// Whether the blocker already paired `(l_rec, r_rec)`.
    pub fn contains(&self, l_rec: usize, r_rec: usize) -> bool {
        self.pairs.get(&l_rec).is_some_and(|rs| rs.contains(&r_rec))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(l_rec, r_rec)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs
            .iter()
            .flat_map(|(&l, rs)| rs.iter().map(move |&r| (l, r)))
    }
}

impl FromIterator<(usize, usize)> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut set = CandidateSet::new();
        for (l, r) in iter {
            set.insert(l, r);
        }
        set
    }
}
