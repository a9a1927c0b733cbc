pub mod configs;
pub mod rank;

pub use configs::generate_configs;
pub use rank::{merge_rank_lists, RankList, RecPair};
