//! Result presentation and run statistics.

mod run_summary;
mod table;

pub use run_summary::RunSummary;
pub use table::{render_summary, SUMMARY_ROWS};
