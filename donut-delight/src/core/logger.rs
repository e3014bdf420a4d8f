//! Logging Infrastructure
//!
//! Console logging on stderr so rendered pages on stdout stay clean.
//! `RUST_LOG` overrides the configured level.

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level or filter directive (e.g., "warn", "donut_delight=debug")
/// * `json_format` - Emit JSON lines instead of the human-readable format
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_timer(LocalTimer)
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr);
        registry.with(console_layer).try_init()?;
    } else {
        let console_layer = fmt::layer()
            .with_timer(LocalTimer)
            .with_target(true)
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr);
        registry.with(console_layer).try_init()?;
    }

    Ok(())
}
