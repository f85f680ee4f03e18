//! Orchestrates a search, summary and export run.

mod config;
mod error;
mod progress;

pub use config::RunConfig;
pub use error::RunnerError;
pub use progress::{LineProgress, ProgressReporter};

use crate::credentials::resolve_token;
use crate::export::export_choice;
use crate::search::{build_client, fetch_all, PageProgress, ResultSet};
use crate::summary::{render_summary, RunSummary};
use octocrab::Octocrab;
use std::io::{self, Write};
use tracing::{error, info};

/// Drives fetch, summary and export for one [`RunConfig`].
///
/// All user-facing messages go to the writer passed to each step, so the
/// same runner works for a terminal, a file or a test buffer.
pub struct Runner {
    config: RunConfig,
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// The token is resolved here, so a missing credential fails before any
    /// request is made.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Credential`] if no token is available, or
    /// [`RunnerError::Octocrab`] if the client cannot be built.
    pub fn new(config: RunConfig) -> Result<Self, RunnerError> {
        let token = resolve_token(config.token(), &config.settings().token_env)?;
        let octocrab = build_client(&token, config.settings())?;
        Ok(Self { config, octocrab })
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Executes the full flow: fetch, summarize, then export if there is
    /// anything to export and a format was configured.
    ///
    /// Progress is written to `out` one line per page.
    ///
    /// # Errors
    ///
    /// Only fails if writing to `out` fails.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary, RunnerError> {
        let choice = self.config.export_choice().map(str::to_string);
        self.run_with(out, &mut LineProgress, |_: &mut W| Ok(choice)).await
    }

    /// Executes the full flow with a custom progress reporter and export
    /// chooser.
    ///
    /// `choose` is only called when the search returned at least one record.
    /// It returns the export choice, or `None` to skip exporting.
    ///
    /// # Errors
    ///
    /// Fails if writing to `out` fails or if `choose` fails.
    pub async fn run_with<W, P, C>(
        &self,
        out: &mut W,
        progress: &mut P,
        choose: C,
    ) -> Result<RunSummary, RunnerError>
    where
        W: Write,
        P: ProgressReporter<W>,
        C: FnOnce(&mut W) -> io::Result<Option<String>>,
    {
        let mut summary = RunSummary::new(self.config.max_pages());

        let results = self.fetch(out, progress, &mut summary).await?;
        self.summarize(&results, out)?;

        if results.is_empty() {
            writeln!(out, "No repositories found or an error occurred.")?;
            return Ok(summary);
        }

        match choose(out)? {
            Some(choice) => self.export(&results, &choice, out, &mut summary)?,
            None => info!("No export format chosen, skipping export"),
        }

        Ok(summary)
    }

    /// Fetches every configured page, reporting each one to `progress`.
    ///
    /// A failed page is reported to `out` and recorded in `summary`; the
    /// records fetched before it are still returned.
    ///
    /// # Errors
    ///
    /// Only fails if writing to `out` fails.
    pub async fn fetch<W, P>(
        &self,
        out: &mut W,
        progress: &mut P,
        summary: &mut RunSummary,
    ) -> Result<ResultSet, RunnerError>
    where
        W: Write,
        P: ProgressReporter<W>,
    {
        let query = self.config.search_query();
        let params = self.config.search_params();
        info!(query = %query, pages = self.config.max_pages(), "Fetching repositories");

        let mut write_error = None;
        let outcome = fetch_all(
            &self.octocrab,
            &query,
            self.config.max_pages(),
            &params,
            |page: &PageProgress| {
                if write_error.is_some() {
                    return;
                }
                if let Err(e) = progress.page(out, page) {
                    write_error = Some(e);
                }
            },
        )
        .await;

        if let Some(e) = write_error {
            return Err(e.into());
        }
        progress.finish(out)?;

        summary.pages_fetched = outcome.pages_fetched;
        summary.records_fetched = outcome.records.len();
        if let Some(failure) = &outcome.failure {
            error!(error = %failure, "Fetch failed");
            writeln!(out, "Failed to fetch data: {failure}")?;
            summary.fetch_error = Some(failure.to_string());
        }

        Ok(outcome.records)
    }

    /// Writes the summary table for `results` to `out`.
    ///
    /// # Errors
    ///
    /// Only fails if writing to `out` fails.
    pub fn summarize<W: Write>(&self, results: &ResultSet, out: &mut W) -> Result<(), RunnerError> {
        render_summary(results, out)?;
        Ok(())
    }

    /// Exports `results` in the format named by `choice`.
    ///
    /// Success and failure are both reported to `out` and recorded in
    /// `summary`; an export failure does not abort the run.
    ///
    /// # Errors
    ///
    /// Only fails if writing to `out` fails.
    pub fn export<W: Write>(
        &self,
        results: &ResultSet,
        choice: &str,
        out: &mut W,
        summary: &mut RunSummary,
    ) -> Result<(), RunnerError> {
        let settings = self.config.settings();
        match export_choice(results, choice, &settings.output_dir, &settings.file_stem) {
            Ok(path) => {
                writeln!(out, "Saved results to {}", path.display())?;
                summary.export_path = Some(path);
            }
            Err(e) => {
                error!(error = %e, "Export failed");
                if e.is_io_failure() {
                    writeln!(out, "Export failed: {e}")?;
                } else {
                    writeln!(out, "Invalid choice. No file saved. ({e})")?;
                }
                summary.export_error = Some(e.to_string());
            }
        }
        Ok(())
    }
}
