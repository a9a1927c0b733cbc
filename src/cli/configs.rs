use std::path::Path;

use crate::error::Result;
use crate::recommend::RecommendParams;
use crate::sweep::generate_configs;

/// Print the field configurations the sweep would evaluate, one per line.
/// Useful when a recommendation list looks off and the question is which
/// field subsets it was fused from.
pub fn run(
    input_path: &Path,
    params_path: Option<&Path>,
    field_remove_ratio: Option<f64>,
) -> Result<()> {
    let input = super::load_input(input_path)?;

    let mut params = match params_path {
        Some(path) => RecommendParams::load_from(path)?,
        None => RecommendParams::default(),
    };
    if let Some(ratio) = field_remove_ratio {
        params.field_remove_ratio = ratio;
    }

    input.validate(&params)?;

    let configs = generate_configs(
        &input.field_list,
        &input.left_token_sums,
        &input.right_token_sums,
        params.field_remove_ratio,
        input.left.len(),
        input.right.len(),
    );

    for config in &configs {
        let fields: Vec<String> = config.iter().map(|f| f.to_string()).collect();
        println!("{}", fields.join(","));
    }
    eprintln!("dredge: {} configuration(s)", configs.len());

    Ok(())
}
