//! Structured logging for parcours
//!
//! The engines only emit `tracing` events and spans. Installing a subscriber
//! is left to the application; [`init_tracing`] is a ready-made one.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log path search counters at debug level.
///
/// Usage:
/// ```rust,ignore
/// let result = find_all_paths_with(&graph, &start, &end, &opts)?;
/// log_search_stats!(&result.stats, "find_all_paths");
/// ```
#[macro_export]
macro_rules! log_search_stats {
    ($stats:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            expansions = $stats.expansions,
            paths_found = $stats.paths_found,
            pruned = $stats.pruned,
            "search_stats"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", settled = settled.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging to stderr
///
/// `RUST_LOG`, then `PARCOURS_LOG`, override the level chosen here.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "parcours=debug,parcours_core=debug",
        (false, None) => "parcours=warn,parcours_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("PARCOURS_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Expand a bare level ("debug") into directives for both crates
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("parcours={level},parcours_core={level}")
    }
}
