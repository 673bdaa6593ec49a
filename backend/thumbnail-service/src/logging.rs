//! Log subscriber setup
//!
//! `RUST_LOG` wins when set; the crate default only applies when it is unset,
//! blank or unparsable.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` does not provide any
pub const DEFAULT_LOG_DIRECTIVES: &str = "thumbnail_service=info";

/// Build the log filter from `RUST_LOG`-style directives
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
}

/// Install the global fmt subscriber
///
/// CloudWatch stamps each line, so no timestamps or colours here.
pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}
