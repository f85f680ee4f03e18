//! CLI for the GitHub repository exporter.
//!
//! Searches GitHub repositories page by page, prints a summary of the first
//! results and saves everything in the chosen format. Without `--query` the
//! tool asks for its inputs interactively.

mod progress;
mod prompt;

use clap::Parser;
use github_repo_export::{
    load_settings_or_default, RunConfig, RunSummary, Runner, RunnerError, SearchFilters, Settings,
};
use progress::BarProgress;
use prompt::Prompter;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// GitHub Repository Fetcher - Search repositories and export the results.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search query. Prompts interactively for all inputs when omitted.
    #[arg(long, short)]
    query: Option<String>,

    /// Only return repositories in this language.
    #[arg(long)]
    language: Option<String>,

    /// Sort by "stars" or "forks". Other values are ignored.
    #[arg(long)]
    sort: Option<String>,

    /// Sort order, "asc" or "desc". Other values are ignored.
    #[arg(long)]
    order: Option<String>,

    /// Number of pages to fetch (30 repositories per page).
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    /// Export format: 1/csv, 2/json, 3/sqlite, 4/xlsx.
    #[arg(long)]
    format: Option<String>,

    /// Directory to write the export file to.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// File name of the export file, without extension.
    #[arg(long)]
    file_stem: Option<String>,

    /// Path to a settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// GitHub Personal Access Token. Read from GITHUB_TOKEN when omitted.
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        warn!("A TLS crypto provider was already installed");
    }

    // Pick up GITHUB_TOKEN from a local .env file
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            warn!(error = %e, "Failed to load .env file");
        }
    }

    let args = Args::parse();
    println!("GitHub Repository Fetcher");

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            println!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, so the summary
///   table on stdout stays readable
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let settings = resolve_settings(&args)?;
    let mut out = io::stdout();

    let Some(query) = args.query.clone() else {
        return run_interactive(args, settings, &mut out).await;
    };

    let mut config = RunConfig::new(query, args.pages)?.with_settings(settings);
    let filters = SearchFilters::from_input(
        args.language.as_deref(),
        args.sort.as_deref(),
        args.order.as_deref(),
    );
    if args.language.is_some() || args.sort.is_some() || args.order.is_some() {
        config = config.with_filters(filters);
    }
    if let Some(format) = args.format {
        config = config.with_export_choice(format);
    }
    if let Some(token) = args.token {
        config = config.with_token(token);
    }

    let runner = Runner::new(config)?;
    let mut progress = BarProgress::new(runner.config().max_pages());
    let choice = runner.config().export_choice().map(str::to_string);
    runner
        .run_with(&mut out, &mut progress, |_: &mut Stdout| Ok(choice))
        .await
}

/// Prompts for the search inputs, then asks for the export format once the
/// results are known (unless `--format` was given).
async fn run_interactive(
    args: Args,
    settings: Settings,
    out: &mut Stdout,
) -> Result<RunSummary, RunnerError> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let inputs = prompter.search_inputs()?;

    let mut config = RunConfig::new(inputs.query, inputs.max_pages)?.with_settings(settings);
    if let Some(filters) = inputs.filters {
        config = config.with_filters(filters);
    }
    if let Some(token) = args.token {
        config = config.with_token(token);
    }

    let runner = Runner::new(config)?;
    let mut progress = BarProgress::new(runner.config().max_pages());
    runner
        .run_with(out, &mut progress, |_: &mut Stdout| match args.format {
            Some(format) => Ok(Some(format)),
            None => prompter.export_choice().map(Some),
        })
        .await
}

/// Loads the settings file, if any, and applies command line overrides.
fn resolve_settings(args: &Args) -> Result<Settings, RunnerError> {
    let mut settings = load_settings_or_default(args.config.as_deref())?;

    if let Some(dir) = &args.output_dir {
        settings.output_dir = dir.clone();
    }
    if let Some(stem) = &args.file_stem {
        settings.file_stem = stem.clone();
    }

    let origin = args
        .config
        .as_deref()
        .unwrap_or_else(|| Path::new("command line"));
    settings.validate(origin)?;
    Ok(settings)
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Pages fetched: {}/{}",
        summary.pages_fetched, summary.pages_requested
    );
    println!("  Repositories collected: {}", summary.records_fetched);

    if let Some(error) = &summary.fetch_error {
        println!("  Fetch stopped early: {error}");
    }
    match (&summary.export_path, &summary.export_error) {
        (Some(path), _) => println!("  Saved to: {}", path.display()),
        (None, Some(error)) => println!("  Not saved: {error}"),
        (None, None) => println!("  Not saved"),
    }
}
