#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod credentials;
pub mod export;
pub mod runner;
pub mod search;
pub mod summary;

pub use config::{load_settings, load_settings_or_default, ConfigError, Settings};
pub use credentials::{load_token, resolve_token, CredentialError, DEFAULT_TOKEN_ENV};
pub use export::{export, export_choice, ExportError, ExportFormat};
pub use runner::{LineProgress, ProgressReporter, RunConfig, Runner, RunnerError};
pub use search::{
    build_client, fetch_all, FetchError, FetchOutcome, PageProgress, RepositoryRecord, ResultSet,
    SearchFilters, SortKey, SortOrder, PAGE_SIZE,
};
pub use summary::{render_summary, RunSummary, SUMMARY_ROWS};
