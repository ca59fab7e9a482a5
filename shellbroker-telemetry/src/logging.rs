//! Structured logging with tracing.
//!
//! The subscriber level is an explicit argument supplied by the
//! process bootstrap from the validated configuration's `log-level`,
//! never read from ambient state.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::format::FmtSpan;

/// Install the process-wide fmt subscriber at the supplied level.
///
/// # Panics
/// If a global subscriber has already been installed.
pub fn init(level: LevelFilter) {
    fmt()
        .with_max_level(level)
        .with_thread_names(true)
        .with_span_events(FmtSpan::ENTER)
        .init()
}
