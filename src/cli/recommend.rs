use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::recommend::{recommend, RecommendParams};
use crate::sweep::RecPair;

/// JSON report emitted by `dredge recommend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendReport {
    /// When this report was produced.
    pub generated_at: DateTime<Utc>,

    /// The parameters the run used, after flag/params-file resolution.
    pub params: RecommendParams,

    /// Recommended pairs, ascending by fused rank.
    pub pairs: Vec<RecPair>,
}

/// Run the recommender over a JSON input file and emit a JSON report.
pub fn run(
    input_path: &Path,
    params_path: Option<&Path>,
    output_size: Option<usize>,
    field_remove_ratio: Option<f64>,
    output_path: Option<&PathBuf>,
) -> Result<()> {
    let input = super::load_input(input_path)?;

    let mut params = match params_path {
        Some(path) => RecommendParams::load_from(path)?,
        None => RecommendParams::default(),
    };
    if let Some(k) = output_size {
        params.output_size = k;
    }
    if let Some(ratio) = field_remove_ratio {
        params.field_remove_ratio = ratio;
    }

    let pairs = recommend(&input, &params)?;

    let report = RecommendReport {
        generated_at: Utc::now(),
        params,
        pairs,
    };
    let json = serde_json::to_string_pretty(&report)?;

    match output_path {
        Some(path) => {
            std::fs::write(path, json)?;
            eprintln!(
                "dredge: wrote {} recommended pair(s) to {}",
                report.pairs.len(),
                path.display()
            );
        }
        None => {
            println!("{json}");
            eprintln!("dredge: {} recommended pair(s)", report.pairs.len());
        }
    }

    Ok(())
}
