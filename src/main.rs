use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dredge::cli;

#[derive(Parser)]
#[command(name = "dredge", version, about = "Recommend the pairs your blocker missed")]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the recommender over a pre-tokenized input file
    Recommend {
        /// JSON file with both token tables, sums, fields and candidates
        #[arg(long)]
        input: PathBuf,

        /// Optional YAML params file
        #[arg(long)]
        params: Option<PathBuf>,

        /// Top-k size per configuration (overrides the params file)
        #[arg(long)]
        output_size: Option<usize>,

        /// Field-remove ratio in (0, 1) (overrides the params file)
        #[arg(long)]
        field_remove_ratio: Option<f64>,

        /// Write the JSON report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the field configurations the sweep would evaluate
    Configs {
        /// JSON file with both token tables, sums, fields and candidates
        #[arg(long)]
        input: PathBuf,

        /// Optional YAML params file
        #[arg(long)]
        params: Option<PathBuf>,

        /// Field-remove ratio in (0, 1) (overrides the params file)
        #[arg(long)]
        field_remove_ratio: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Recommend {
            input,
            params,
            output_size,
            field_remove_ratio,
            output,
        } => cli::recommend::run(
            &input,
            params.as_deref(),
            output_size,
            field_remove_ratio,
            output.as_ref(),
        )?,
        Commands::Configs {
            input,
            params,
            field_remove_ratio,
        } => cli::configs::run(&input, params.as_deref(), field_remove_ratio)?,
    }

    Ok(())
}
