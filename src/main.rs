use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use fdadata::domain::load_config;
use fdadata::ports::ProgressListener;
use fdadata::services::TerminalProgress;
use fdadata::{AcquireOptions, AppError, BuilderParams, SOURCE_USFDA_RECALL};

#[derive(Parser)]
#[command(name = "fdadata")]
#[command(version)]
#[command(about = "Assemble normalized FDA regulatory datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered source identifiers
    Sources,
    /// Acquire a source and write its flat-file export
    Fetch {
        /// Source identifier (see `sources`)
        source: String,
        /// Output CSV path
        #[arg(short, long)]
        out: PathBuf,
        /// Cap on records to retrieve (API sources)
        #[arg(short, long)]
        limit: Option<u64>,
        /// Input spreadsheet path (file sources)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Configuration file path
        #[arg(short, long, default_value = "fdadata.toml")]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Sources => {
            let registry = fdadata::default_registry();
            for id in registry.source_ids() {
                println!("{}", id);
            }
            Ok(())
        }
        Commands::Fetch { source, out, limit, input, config } => {
            fetch(&source, &out, limit, input, &config)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn fetch(
    source: &str,
    out: &Path,
    limit: Option<u64>,
    input: Option<PathBuf>,
    config_path: &Path,
) -> Result<(), AppError> {
    let config = load_config(config_path)?;

    let progress: Option<Box<dyn ProgressListener>> = (source == SOURCE_USFDA_RECALL)
        .then(|| Box::new(TerminalProgress::new()) as Box<dyn ProgressListener>);
    let params = BuilderParams {
        path: input.or_else(|| Some(config.compliance.path.clone())),
        api: Some(config.recall.clone()),
        progress,
    };

    let mut registry = fdadata::default_registry();
    let options = AcquireOptions { record_limit: limit };
    let summary = fdadata::fetch_to_csv(&mut registry, source, params, &options, out)?;

    match summary.last_updated {
        Some(date) => println!(
            "✅ Wrote {} records from {} (remote dataset updated {}) to {}",
            summary.records,
            summary.source_id,
            date,
            out.display()
        ),
        None => println!(
            "✅ Wrote {} records from {} to {}",
            summary.records,
            summary.source_id,
            out.display()
        ),
    }
    Ok(())
}
