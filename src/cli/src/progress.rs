//! Terminal progress bar for the page fetch.

use github_repo_export::{PageProgress, ProgressReporter};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};

/// Draws fetch progress on stderr so stdout only carries the results.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    /// Creates a bar with one step per page.
    pub fn new(max_pages: u32) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(u64::from(max_pages)),
            ProgressDrawTarget::stderr(),
        );
        let style = ProgressStyle::with_template(
            "{spinner:.green} Fetching pages... [{bar:30.cyan/blue}] {pos}/{len} {msg}",
        )
        .map(|style| style.progress_chars("=> "))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.set_message("(0 repositories)");
        Self { bar }
    }
}

impl<W: Write> ProgressReporter<W> for BarProgress {
    fn page(&mut self, _out: &mut W, progress: &PageProgress) -> io::Result<()> {
        self.bar.set_position(u64::from(progress.page));
        self.bar.set_message(format!("({} repositories)", progress.total));
        Ok(())
    }

    fn finish(&mut self, _out: &mut W) -> io::Result<()> {
        // Leave the bar where the search stopped, which may be short of the
        // page limit.
        self.bar.abandon();
        Ok(())
    }
}
