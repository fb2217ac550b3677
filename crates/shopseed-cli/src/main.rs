mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use shopseed_core::{ConfigError, DEFAULT_CONFIG_PATH, load_config};
use shopseed_eval::{
    ConsistencyReport, EvalError, IntegrityReport, ScoringPolicy, check_consistency, read_dataset,
    validate_dataset,
};
use shopseed_generate::{GenerateOptions, GenerationEngine, GenerationError};
use shopseed_load::{LoadError, PostgresStagingLoader, StagingLoader};
use thiserror::Error;
use tracing::{error, info, warn};

use logging::{LoggingError, init_logging};

const LOG_FILE: &str = "logs.ndjson";

#[derive(Debug, Error)]
enum CliError {
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("validation error: {0}")]
    Eval(#[from] EvalError),
    #[error("load error: {0}")]
    Load(#[from] LoadError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset at {0} failed validation")]
    ValidationFailed(String),
}

#[derive(Parser, Debug)]
#[command(name = "shopseed", version, about = "Synthetic e-commerce dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the four tables and the manifest.
    Generate(GenerateArgs),
    /// Re-validate a dataset directory written by `generate`.
    Validate(ValidateArgs),
    /// Land a dataset directory in the Postgres staging schema.
    Load(LoadArgs),
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ScoringArg {
    Binary,
    Proportional,
}

impl From<ScoringArg> for ScoringPolicy {
    fn from(value: ScoringArg) -> Self {
        match value {
            ScoringArg::Binary => ScoringPolicy::Binary,
            ScoringArg::Proportional => ScoringPolicy::Proportional,
        }
    }
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Output directory, overriding `out_dir` from the config.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Seed, overriding `seed` from the config.
    #[arg(long)]
    seed: Option<u64>,
    /// Quality score policy.
    #[arg(long, value_enum, default_value_t = ScoringArg::Binary)]
    scoring: ScoringArg,
    /// Skip the JSON log file in the output directory.
    #[arg(long, default_value_t = false)]
    no_log_file: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Directory holding the four CSV tables.
    #[arg(long, default_value = "data/raw")]
    dir: PathBuf,
    /// Quality score policy.
    #[arg(long, value_enum, default_value_t = ScoringArg::Binary)]
    scoring: ScoringArg,
    /// Exit with an error when any check fails.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Args, Debug)]
struct LoadArgs {
    /// Directory holding the four CSV tables.
    #[arg(long, default_value = "data/raw")]
    dir: PathBuf,
    /// Postgres connection string.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[derive(Debug, Serialize)]
struct ValidationSummary {
    dir: String,
    records: usize,
    integrity: IntegrityReport,
    consistency: ConsistencyReport,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Validate(args) => run_validate(args),
        Command::Load(args) => run_load(args).await,
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let options = match resolve_options(&args) {
        Ok(options) => options,
        Err(err) => {
            // No out_dir yet, so stderr only. A subscriber may already be installed.
            let _ = init_logging(None);
            error!(config = %args.config.display(), error = %err, "cannot load configuration");
            return Err(err);
        }
    };

    if args.no_log_file {
        init_logging(None)?;
    } else {
        std::fs::create_dir_all(&options.out_dir)?;
        let log_path = options.out_dir.join(LOG_FILE);
        init_logging(Some(log_path.as_path()))?;
    }

    let result = GenerationEngine::new(options).run()?;
    for table in &result.report.tables {
        info!(
            table = %table.table,
            rows = table.rows_generated,
            bytes = table.bytes_written,
            "table summary"
        );
    }
    info!(
        out_dir = %result.out_dir.display(),
        orphans = result.integrity.orphan_records.total(),
        "dataset ready"
    );
    Ok(())
}

/// Config file values with the command line overrides applied.
fn resolve_options(args: &GenerateArgs) -> Result<GenerateOptions, CliError> {
    let config = load_config(&args.config)?;
    let mut options = GenerateOptions::from_config(&config);
    if let Some(out) = &args.out {
        options.out_dir = out.clone();
    }
    if let Some(seed) = args.seed {
        options.seed = seed;
    }
    options.scoring = args.scoring.into();
    Ok(options)
}

fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    init_logging(None)?;

    let dataset = read_dataset(&args.dir)?;
    let integrity = validate_dataset(&dataset, args.scoring.into());
    let consistency = check_consistency(&dataset);
    let clean = integrity.is_clean() && consistency.is_clean();

    let summary = ValidationSummary {
        dir: args.dir.display().to_string(),
        records: dataset.total_records(),
        integrity,
        consistency,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if clean {
        info!(records = summary.records, "dataset is consistent");
        return Ok(());
    }

    warn!(
        orphans = summary.integrity.orphan_records.total(),
        "dataset has integrity or consistency violations"
    );
    if args.strict {
        return Err(CliError::ValidationFailed(summary.dir));
    }
    Ok(())
}

async fn run_load(args: LoadArgs) -> Result<(), CliError> {
    init_logging(None)?;

    let loader = PostgresStagingLoader::connect(&args.database_url).await?;
    info!(engine = loader.engine(), dir = %args.dir.display(), "load started");
    let report = loader.load(&args.dir).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    info!(rows = report.total_rows(), "load completed");
    Ok(())
}
