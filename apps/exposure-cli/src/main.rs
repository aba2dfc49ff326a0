//! exposure-cli - Batch exposure-score pipeline
//!
//! Loads the relevance matrix, the O*NET ability ratings, and the firm
//! posting data, computes AIOE per occupation and AIFE per firm, and writes
//! the results as CSV.

use clap::Parser;
use exposure_core::{compute_aife, compute_aioe};
use exposure_io::{load_ability_ratings, load_firm_postings, load_relevance_matrix, write_scores};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "exposure-cli",
    about = "Compute AIOE and AIFE exposure scores from labor-market reference data"
)]
struct Args {
    /// Ability-by-AI-application relevance matrix (.csv or .xlsx)
    #[arg(long)]
    relevance_matrix: PathBuf,

    /// Scale-coded O*NET ability ratings file (IM/LV scales)
    #[arg(long)]
    ability_ratings: PathBuf,

    /// Firm-by-occupation job postings file
    #[arg(long)]
    firm_postings: PathBuf,

    /// Output path for firm AIFE scores
    #[arg(long, default_value = "aife_scores.csv")]
    output: PathBuf,

    /// Also write occupation AIOE scores to this path
    #[arg(long)]
    aioe_output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    info!("loading AI-ability relevance matrix");
    let relevance = load_relevance_matrix(&args.relevance_matrix)?;

    info!("loading O*NET ability ratings");
    let ratings = load_ability_ratings(&args.ability_ratings)?;

    let aioe = compute_aioe(&ratings, &relevance);
    info!(occupations = aioe.len(), "computed AIOE scores");

    if let Some(path) = &args.aioe_output {
        write_scores(path, &aioe, "occupation_code", "aioe_score")?;
    }

    info!("loading firm-level occupational data");
    let firms = load_firm_postings(&args.firm_postings)?;

    let aife = compute_aife(&firms, &aioe);
    info!(firms = aife.len(), "computed AIFE scores");

    write_scores(&args.output, &aife, "firm_id", "aife_score")?;
    info!("all done, AIFE results saved to {}", args.output.display());

    Ok(())
}
