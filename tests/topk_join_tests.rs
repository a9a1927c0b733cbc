//! Integration tests for the prefix-filtering top-k Jaccard join.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use dredge::{topk_join, CandidateSet, TopPair};

/// Pop the join's min-heap into a vector, ascending by similarity.
fn pairs_ascending(mut heap: BinaryHeap<Reverse<TopPair>>) -> Vec<TopPair> {
    let mut out = Vec::new();
    while let Some(Reverse(p)) = heap.pop() {
        out.push(p);
    }
    out
}

/// O(|L|*|R|) reference: every non-candidate pair with at least one shared
/// token, best k by Jaccard.
fn brute_force(
    left: &[Vec<u32>],
    right: &[Vec<u32>],
    candidates: &CandidateSet,
    k: usize,
) -> Vec<TopPair> {
    let mut scored = Vec::new();
    for (l_rec, l_toks) in left.iter().enumerate() {
        let l_set: HashSet<u32> = l_toks.iter().copied().collect();
        for (r_rec, r_toks) in right.iter().enumerate() {
            if candidates.contains(l_rec, r_rec) {
                continue;
            }
            let common = r_toks.iter().filter(|t| l_set.contains(t)).count();
            if common == 0 {
                continue;
            }
            let sim = common as f64 / (l_toks.len() + r_toks.len() - common) as f64;
            scored.push(TopPair { sim, l_rec, r_rec });
        }
    }
    scored.sort_by(|a, b| b.sim.total_cmp(&a.sim));
    scored.truncate(k);
    scored.reverse();
    scored
}

fn assert_same_sims(actual: &[TopPair], expected: &[TopPair]) {
    assert_eq!(actual.len(), expected.len(), "result sizes differ");
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a.sim - e.sim).abs() < 1e-9,
            "similarity mismatch: got {} expected {}",
            a.sim,
            e.sim
        );
    }
}

// ---------------------------------------------------------------------------
// Known-answer scenarios
// ---------------------------------------------------------------------------

#[test]
fn identical_records_score_one() {
    let heap = topk_join(&[vec![1, 2, 3]], &[vec![1, 2, 3]], &CandidateSet::new(), 1);
    let pairs = pairs_ascending(heap);
    assert_eq!(pairs.len(), 1);
    assert_eq!((pairs[0].l_rec, pairs[0].r_rec), (0, 0));
    assert!((pairs[0].sim - 1.0).abs() < f64::EPSILON);
}

#[test]
fn long_against_short_record() {
    // Jaccard = 1 / 10: one shared token, union of ten.
    let left = vec![vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]];
    let right = vec![vec![1]];
    let pairs = pairs_ascending(topk_join(&left, &right, &CandidateSet::new(), 1));
    assert_eq!(pairs.len(), 1);
    assert_eq!((pairs[0].l_rec, pairs[0].r_rec), (0, 0));
    assert!((pairs[0].sim - 0.1).abs() < 1e-9);
}

#[test]
fn candidate_pair_is_suppressed() {
    let left = vec![vec![1, 2], vec![1, 2]];
    let right = vec![vec![1, 2]];
    let candidates: CandidateSet = [(0, 0)].into_iter().collect();
    let pairs = pairs_ascending(topk_join(&left, &right, &candidates, 1));
    assert_eq!(pairs.len(), 1);
    assert_eq!((pairs[0].l_rec, pairs[0].r_rec), (1, 0));
    assert!((pairs[0].sim - 1.0).abs() < f64::EPSILON);
}

#[test]
fn empty_left_record_produces_nothing() {
    let pairs = pairs_ascending(topk_join(&[vec![]], &[vec![1]], &CandidateSet::new(), 1));
    assert!(pairs.is_empty());
}

// ---------------------------------------------------------------------------
// Agreement with the brute-force reference
// ---------------------------------------------------------------------------

#[test]
fn matches_brute_force_on_mixed_lengths() {
    let left = vec![
        vec![1, 2, 3],
        vec![2, 3, 4, 5],
        vec![9],
        vec![1, 5, 6, 7, 8],
        vec![],
    ];
    let right = vec![vec![1, 2, 3, 4], vec![5, 6], vec![9, 10, 11], vec![2]];
    let candidates = CandidateSet::new();

    for k in [1, 2, 3, 5, 20] {
        let actual = pairs_ascending(topk_join(&left, &right, &candidates, k));
        let expected = brute_force(&left, &right, &candidates, k);
        assert_same_sims(&actual, &expected);
    }
}

#[test]
fn matches_brute_force_with_candidates() {
    let left = vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 2, 5]];
    let right = vec![vec![1, 2, 3], vec![1, 2, 4]];
    let candidates: CandidateSet = [(0, 0), (1, 1), (2, 0)].into_iter().collect();

    for k in [1, 2, 4] {
        let actual = pairs_ascending(topk_join(&left, &right, &candidates, k));
        let expected = brute_force(&left, &right, &candidates, k);
        assert_same_sims(&actual, &expected);
        for p in &actual {
            assert!(!candidates.contains(p.l_rec, p.r_rec));
        }
    }
}

#[test]
fn fewer_matching_pairs_than_k() {
    // Only two pairs share any token; asking for five returns two.
    let left = vec![vec![1], vec![2]];
    let right = vec![vec![1], vec![2], vec![3]];
    let pairs = pairs_ascending(topk_join(&left, &right, &CandidateSet::new(), 5));
    assert_eq!(pairs.len(), 2);
    assert!(pairs.iter().all(|p| (p.sim - 1.0).abs() < f64::EPSILON));
}

#[test]
fn all_pairs_blocked_returns_empty() {
    let left = vec![vec![1, 2]];
    let right = vec![vec![1, 2]];
    let candidates: CandidateSet = [(0, 0)].into_iter().collect();
    let pairs = pairs_ascending(topk_join(&left, &right, &candidates, 3));
    assert!(pairs.is_empty());
}

// ---------------------------------------------------------------------------
// Join mechanics
// ---------------------------------------------------------------------------

#[test]
fn duplicate_prefix_tokens_score_a_pair_once() {
    // The pair shares two prefix tokens, so it is probed twice; the
    // compared set keeps the second probe from re-scoring it.
    let left = vec![vec![1, 2, 3]];
    let right = vec![vec![1, 2, 9]];
    let pairs = pairs_ascending(topk_join(&left, &right, &CandidateSet::new(), 5));
    assert_eq!(pairs.len(), 1);
    // overlap 2, union 4
    assert!((pairs[0].sim - 0.5).abs() < 1e-9);
}

#[test]
fn returned_sims_are_exact_jaccard() {
    let left = vec![vec![1, 2, 3, 4], vec![3, 4, 5]];
    let right = vec![vec![2, 3, 4], vec![5, 6]];
    let pairs = pairs_ascending(topk_join(&left, &right, &CandidateSet::new(), 10));
    for p in &pairs {
        let l: HashSet<u32> = left[p.l_rec].iter().copied().collect();
        let common = right[p.r_rec].iter().filter(|t| l.contains(t)).count();
        let expected = common as f64 / (left[p.l_rec].len() + right[p.r_rec].len() - common) as f64;
        assert!((p.sim - expected).abs() < 1e-12);
    }
}

#[test]
fn join_is_deterministic() {
    let left = vec![vec![1, 2, 3], vec![2, 3, 4], vec![1, 4, 5]];
    let right = vec![vec![1, 2], vec![3, 4, 5], vec![2, 4]];
    let a = pairs_ascending(topk_join(&left, &right, &CandidateSet::new(), 4));
    let b = pairs_ascending(topk_join(&left, &right, &CandidateSet::new(), 4));
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!((x.l_rec, x.r_rec), (y.l_rec, y.r_rec));
        assert!((x.sim - y.sim).abs() < f64::EPSILON);
    }
}
