use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use resumerank::config::{Config, StopWords};
use resumerank::output::{csv, terminal};
use resumerank::pipeline::{screen, Screening};
use resumerank::source::{self, SourceDocument};

/// resumerank: rank resumes against a job description.
///
/// Scores every resume by TF-IDF cosine similarity to the job description
/// and lists them best match first.
#[derive(Parser)]
#[command(name = "resumerank", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank resumes by similarity to a job description
    Rank {
        #[command(flatten)]
        inputs: Inputs,

        /// Also write the ranking to a CSV file
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Print the ranking as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Use 1 + ln(count) for term frequency
        #[arg(long)]
        sublinear_tf: bool,

        /// Show the first N characters of each resume
        #[arg(long, value_name = "CHARS")]
        preview: Option<usize>,
    },

    /// Show which resumes share terms with the job description
    Keywords {
        #[command(flatten)]
        inputs: Inputs,

        /// Max matched terms listed per resume (default: 8)
        #[arg(long, default_value = "8")]
        max_keywords: usize,
    },
}

#[derive(Args)]
struct Inputs {
    /// File containing the job description
    #[arg(long, required_unless_present = "job_text", conflicts_with = "job_text")]
    job: Option<PathBuf>,

    /// Job description given inline
    #[arg(long)]
    job_text: Option<String>,

    /// Resume files to rank (plain text, or PDF when built with `--features pdf`).
    /// With none given the ranking is empty.
    resumes: Vec<PathBuf>,

    /// Remove English stop words before weighting
    #[arg(long)]
    stop_words: bool,

    /// Drop tokens shorter than this many characters (default: 2)
    #[arg(long)]
    min_token_len: Option<usize>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("resumerank=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            inputs,
            csv: csv_path,
            json,
            sublinear_tf,
            preview,
        } => {
            let mut config = Config::load()?;
            if sublinear_tf {
                config.sublinear_tf = true;
            }
            let (job, resumes) = load_inputs(&inputs, &mut config)?;
            let screening = run_screen(&config, &job, &resumes)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&screening)?);
            } else {
                terminal::display_ranking(&screening);
                if let Some(max_chars) = preview {
                    terminal::display_previews(&screening, &resumes, max_chars);
                }
            }

            if let Some(path) = csv_path {
                csv::write_csv(&screening, &path)?;
                if !json {
                    println!("\n{} {}", "Ranking saved to".bold(), path.display());
                }
            }
        }

        Commands::Keywords {
            inputs,
            max_keywords,
        } => {
            let mut config = Config::load()?;
            let (job, resumes) = load_inputs(&inputs, &mut config)?;
            let screening = run_screen(&config, &job, &resumes)?;
            terminal::display_keyword_matches(&screening, &resumes, max_keywords);
        }
    }

    Ok(())
}

/// Apply CLI overrides to the config, then load the job description and resumes.
fn load_inputs(inputs: &Inputs, config: &mut Config) -> Result<(String, Vec<SourceDocument>)> {
    if inputs.stop_words {
        config.stop_words = StopWords::English;
    }
    if let Some(min_len) = inputs.min_token_len {
        if min_len == 0 {
            anyhow::bail!("--min-token-len must be at least 1");
        }
        config.min_token_len = min_len;
    }

    let job = match (&inputs.job_text, &inputs.job) {
        (Some(text), _) => text.trim().to_string(),
        (None, Some(path)) => source::load_document(path)?.text,
        (None, None) => anyhow::bail!("Provide a job description with --job or --job-text"),
    };
    if job.is_empty() {
        warn!("Job description is empty, every resume will score 0.00");
    }

    if inputs.resumes.is_empty() {
        warn!("No resumes given, nothing to rank");
    }
    info!(resumes = inputs.resumes.len(), "Loading resumes");
    let resumes = source::load_documents(&inputs.resumes)?;

    Ok((job, resumes))
}

fn run_screen(config: &Config, job: &str, resumes: &[SourceDocument]) -> Result<Screening> {
    let vectorizer = config.vectorizer();
    let screening = screen(&vectorizer, &config.limits(), job, resumes)?;
    Ok(screening)
}
