use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Which input table a prefix event or index entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

/// One token position announced to the join.
///
/// `threshold` is the prefix-filter bound `1 - pos/len`: if this position
/// holds the first token a record shares with any partner, their Jaccard
/// similarity cannot exceed it. The join pops events highest-threshold
/// first and stops once the retained top-k dominates everything left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixEvent {
    pub threshold: f64,
    pub side: Side,
    pub rec_idx: usize,
    pub tok_idx: usize,
}

impl Eq for PrefixEvent {}

impl Ord for PrefixEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Threshold drives the heap; the rest is a deterministic tie-break.
        self.threshold
            .total_cmp(&other.threshold)
            .then_with(|| self.side.cmp(&other.side))
            .then_with(|| self.rec_idx.cmp(&other.rec_idx))
            .then_with(|| self.tok_idx.cmp(&other.tok_idx))
    }
}

impl PartialOrd for PrefixEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the merged event heap for both tables: one event per token
/// position, popped in decreasing threshold order. Empty records emit
/// nothing.
pub fn prefix_events(left: &[Vec<u32>], right: &[Vec<u32>]) -> BinaryHeap<PrefixEvent> {
    let mut events = BinaryHeap::new();
    push_side(left, Side::Left, &mut events);
    push_side(right, Side::Right, &mut events);
    events
}

fn push_side(table: &[Vec<u32>], side: Side, events: &mut BinaryHeap<PrefixEvent>) {
    for (rec_idx, rec) in table.iter().enumerate() {
        let len = rec.len();
        for tok_idx in 0..len {
            events.push(PrefixEvent {
                threshold: 1.0 - tok_idx as f64 / len as f64,
                side,
                rec_idx,
                tok_idx,
            });
        }
    }
}
