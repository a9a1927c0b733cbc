use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::candidates::CandidateSet;
use crate::join::events::{prefix_events, Side};
use crate::join::overlap::overlap;
use crate::join::TERMINATION_EPSILON;

/// A scored record pair retained by the join.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopPair {
    pub sim: f64,
    pub l_rec: usize,
    pub r_rec: usize,
}

impl Eq for TopPair {}

impl Ord for TopPair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sim
            .total_cmp(&other.sim)
            .then_with(|| self.l_rec.cmp(&other.l_rec))
            .then_with(|| self.r_rec.cmp(&other.r_rec))
    }
}

impl PartialOrd for TopPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Token -> positions already announced on one side. Positions are unique
/// per event, so an append-only vector is enough.
type InvertedIndex = HashMap<u32, Vec<(usize, usize)>>;

/// Prefix-filtering top-k Jaccard join.
///
/// Returns a min-heap (via [`Reverse`]) holding at most `output_size` of
/// the most similar `(l_rec, r_rec)` pairs whose pair is not in
/// `candidates`. The worst retained pair sits at the top of the heap; the
/// caller pops ascending by similarity.
///
/// The join walks prefix events in decreasing threshold order, probing the
/// opposite side's inverted index at each event and indexing its own
/// position when the positional bound still beats the current heap floor.
/// Once the heap is full and its floor dominates the best remaining event
/// threshold (within [`TERMINATION_EPSILON`]), no future pair can displace
/// anything and the loop stops.
pub fn topk_join(
    left: &[Vec<u32>],
    right: &[Vec<u32>],
    candidates: &CandidateSet,
    output_size: usize,
) -> BinaryHeap<Reverse<TopPair>> {
    let mut heap: BinaryHeap<Reverse<TopPair>> = BinaryHeap::new();
    if output_size == 0 {
        return heap;
    }

    let mut events = prefix_events(left, right);
    let mut l_index = InvertedIndex::new();
    let mut r_index = InvertedIndex::new();
    let mut compared: HashSet<(usize, usize)> = HashSet::new();

    while let Some(event) = events.pop() {
        if heap.len() == output_size {
            if let Some(&Reverse(worst)) = heap.peek() {
                if worst.sim >= event.threshold - TERMINATION_EPSILON {
                    break;
                }
            }
        }

        let probe_table = match event.side {
            Side::Left => left,
            Side::Right => right,
        };
        let rec = event.rec_idx;
        let pos = event.tok_idx;
        let token = probe_table[rec][pos];
        let len = probe_table[rec].len();

        // Probe: score against every indexed position of this token on the
        // opposite side.
        let other_index = match event.side {
            Side::Left => &r_index,
            Side::Right => &l_index,
        };
        if let Some(entries) = other_index.get(&token) {
            for &(other_rec, _) in entries {
                let (l_rec, r_rec) = match event.side {
                    Side::Left => (rec, other_rec),
                    Side::Right => (other_rec, rec),
                };
                let l_len = left[l_rec].len();
                let r_len = right[r_rec].len();

                // Length filter: once the heap is full, a pair whose sizes
                // fall outside the Jaccard-feasible band cannot beat the
                // floor.
                if heap.len() == output_size {
                    if let Some(&Reverse(worst)) = heap.peek() {
                        let tau = worst.sim;
                        if (l_len as f64) < tau * r_len as f64
                            || (l_len as f64) > r_len as f64 / tau
                        {
                            continue;
                        }
                    }
                }

                if candidates.contains(l_rec, r_rec) {
                    continue;
                }
                if compared.contains(&(l_rec, r_rec)) {
                    continue;
                }

                let common = overlap(&left[l_rec], &right[r_rec]);
                let sim = common as f64 / (l_len + r_len - common) as f64;

                if heap.len() < output_size {
                    heap.push(Reverse(TopPair { sim, l_rec, r_rec }));
                } else if let Some(&Reverse(worst)) = heap.peek() {
                    if sim > worst.sim {
                        heap.pop();
                        heap.push(Reverse(TopPair { sim, l_rec, r_rec }));
                    }
                }
                compared.insert((l_rec, r_rec));
            }
        }

        // Index this position if a future probe of the same token could
        // still reach the heap floor. `(len - pos) / (len + pos)` bounds
        // the Jaccard any later partner can achieve through this position.
        let floor = if heap.len() == output_size {
            heap.peek().map_or(0.0, |&Reverse(worst)| worst.sim)
        } else {
            0.0
        };
        let denom = len + pos;
        let index_threshold = if denom > 0 {
            (len - pos) as f64 / denom as f64
        } else {
            1.0
        };
        if index_threshold >= floor {
            let own_index = match event.side {
                Side::Left => &mut l_index,
                Side::Right => &mut r_index,
            };
            own_index.entry(token).or_default().push((rec, pos));
        }
    }

    tracing::debug!(
        retained = heap.len(),
        scored = compared.len(),
        "top-k join finished"
    );

    heap
}
