//! Logging initialization.
//!
//! Stdout is reserved for protocol frames, so every log line goes to stderr.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

use super::config::LoggingConfig;

/// Map a configured level name to a tracing level (unknown names mean INFO).
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` directives are honored on top of the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::from_default_env().add_directive(parse_level(&config.level).into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if config.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }
}
