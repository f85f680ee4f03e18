//! Per-page progress reporting.

use crate::search::PageProgress;
use std::io::{self, Write};

/// Receives progress while a search is running.
///
/// The run's output writer is passed through so plain reporters can write to
/// it; reporters that draw elsewhere (a terminal progress bar) ignore it.
pub trait ProgressReporter<W: Write> {
    /// Called after each page that was fetched and parsed.
    fn page(&mut self, out: &mut W, progress: &PageProgress) -> io::Result<()>;

    /// Called once the search stops, whether it finished or failed.
    fn finish(&mut self, _out: &mut W) -> io::Result<()> {
        Ok(())
    }
}

/// Writes one `Fetching pages...` line per page to the run's output.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineProgress;

impl<W: Write> ProgressReporter<W> for LineProgress {
    fn page(&mut self, out: &mut W, progress: &PageProgress) -> io::Result<()> {
        writeln!(
            out,
            "Fetching pages... {}/{} ({} repositories)",
            progress.page, progress.max_pages, progress.total
        )
    }
}
