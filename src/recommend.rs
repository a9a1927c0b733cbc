use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::candidates::CandidateSet;
use crate::error::{DredgeError, Result};
use crate::join::{topk_join, TopPair};
use crate::sweep::{generate_configs, merge_rank_lists, RankList, RecPair};
use crate::table::TokenTable;

/// Everything the recommender consumes: both pre-tokenized sides, their
/// per-field token mass, the field list to sweep over, and the pairs the
/// blocker already produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendInput {
    pub left: TokenTable,
    pub right: TokenTable,

    /// Total tokens contributed by each field id across the left table.
    pub left_token_sums: Vec<u64>,

    /// Same for the right table.
    pub right_token_sums: Vec<u64>,

    /// Field ids to start the sweep from, in scan order.
    pub field_list: Vec<u32>,

    /// Pairs already found by the blocker; excluded from the output.
    #[serde(default)]
    pub candidates: CandidateSet,
}

/// Tunables for a recommendation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RecommendParams {
    /// Top-k size of each per-configuration join. Default: 100.
    #[serde(default = "default_output_size")]
    pub output_size: usize,

    /// Field-remove ratio steering the configuration sweep. Default: 0.1.
    #[serde(default = "default_field_remove_ratio")]
    pub field_remove_ratio: f64,
}

fn default_output_size() -> usize {
    100
}
fn default_field_remove_ratio() -> f64 {
    0.1
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            output_size: 100,
            field_remove_ratio: 0.1,
        }
    }
}

impl RecommendParams {
    /// Load params from a YAML file. Returns defaults if the file doesn't
    /// exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| DredgeError::ParamsParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl RecommendInput {
    /// Check the input contract before any work happens. Everything past
    /// this point is allowed to index without bounds anxiety.
    pub fn validate(&self, params: &RecommendParams) -> Result<()> {
        if self.left.is_empty() {
            return Err(DredgeError::invalid("left table has no records"));
        }
        if self.right.is_empty() {
            return Err(DredgeError::invalid("right table has no records"));
        }
        self.left.validate_shape("left")?;
        self.right.validate_shape("right")?;

        if self.field_list.is_empty() {
            return Err(DredgeError::invalid("field list is empty"));
        }
        for &field in &self.field_list {
            if field as usize >= self.left_token_sums.len() {
                return Err(DredgeError::invalid(format!(
                    "field {field} has no left token sum (vector has {})",
                    self.left_token_sums.len()
                )));
            }
            if field as usize >= self.right_token_sums.len() {
                return Err(DredgeError::invalid(format!(
                    "field {field} has no right token sum (vector has {})",
                    self.right_token_sums.len()
                )));
            }
        }

        if !(params.field_remove_ratio > 0.0 && params.field_remove_ratio < 1.0) {
            return Err(DredgeError::invalid(format!(
                "field_remove_ratio must be in (0, 1), got {}",
                params.field_remove_ratio
            )));
        }
        if params.output_size == 0 {
            return Err(DredgeError::invalid("output_size must be at least 1"));
        }

        for (l_rec, r_rec) in self.candidates.iter() {
            if l_rec >= self.left.len() || r_rec >= self.right.len() {
                return Err(DredgeError::invalid(format!(
                    "candidate pair ({l_rec}, {r_rec}) is out of range"
                )));
            }
        }

        Ok(())
    }
}

/// Recommend record pairs the blocker likely missed.
///
/// Generates the configuration family, runs the top-k join once per field
/// subset, converts each join's heap into a rank list, and fuses the lists
/// by per-pair rank median. The output is sorted ascending by fused rank.
pub fn recommend(input: &RecommendInput, params: &RecommendParams) -> Result<Vec<RecPair>> {
    input.validate(params)?;

    let configs = generate_configs(
        &input.field_list,
        &input.left_token_sums,
        &input.right_token_sums,
        params.field_remove_ratio,
        input.left.len(),
        input.right.len(),
    );
    tracing::info!(
        configurations = configs.len(),
        output_size = params.output_size,
        "running recommendation sweep"
    );

    let run_config = |config: &Vec<u32>| -> RankList {
        let keep: HashSet<u32> = config.iter().copied().collect();
        let left = input.left.project(&keep);
        let right = input.right.project(&keep);
        let heap = topk_join(
            &left.records,
            &right.records,
            &input.candidates,
            params.output_size,
        );
        rank_list(heap)
    };

    #[cfg(feature = "parallel")]
    let lists: Vec<RankList> = configs.par_iter().map(run_config).collect();
    #[cfg(not(feature = "parallel"))]
    let lists: Vec<RankList> = configs.iter().map(run_config).collect();

    Ok(merge_rank_lists(&lists))
}

/// Assign 1-based ranks in heap-pop order: the least similar retained pair
/// gets rank 1. The fused ranking therefore favors pairs that sit near the
/// heap top in every configuration; downstream consumers depend on this
/// orientation, so it is kept as-is.
fn rank_list(mut heap: BinaryHeap<Reverse<TopPair>>) -> RankList {
    let mut ranks = RankList::new();
    let mut rank = 0;
    while let Some(Reverse(pair)) = heap.pop() {
        rank += 1;
        ranks.insert((pair.l_rec, pair.r_rec), rank);
    }
    ranks
}
