//! # dredge
//!
//! Recall debugging for entity-matching blockers. Given two pre-tokenized
//! record collections and the candidate pairs an external blocker already
//! produced, `dredge` recommends the ranked pairs the blocker likely
//! missed: it runs a prefix-filtering top-k Jaccard join over several
//! field subsets of the input and fuses the per-subset rankings by rank
//! median.
//!
//! The single library entry point is [`recommend`]; see the `dredge`
//! binary for the file-based surface.

pub mod candidates;
pub mod cli;
pub mod error;
pub mod join;
pub mod recommend;
pub mod sweep;
pub mod table;

// Re-export commonly used types at crate root
pub use candidates::CandidateSet;
pub use error::{DredgeError, Result};
pub use join::{topk_join, PrefixEvent, Side, TopPair, TERMINATION_EPSILON};
pub use recommend::{recommend, RecommendInput, RecommendParams};
pub use sweep::{generate_configs, merge_rank_lists, RankList, RecPair};
pub use table::TokenTable;
