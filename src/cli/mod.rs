pub mod configs;
pub mod recommend;

use std::path::Path;

use crate::error::{DredgeError, Result};
use crate::recommend::RecommendInput;

/// Load a pre-tokenized input bundle from a JSON file.
pub fn load_input(path: &Path) -> Result<RecommendInput> {
    if !path.exists() {
        return Err(DredgeError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let input: RecommendInput = serde_json::from_str(&contents)?;
    Ok(input)
}
