//! Tracing subscriber setup
//!
//! Log lines go to stderr so they never mix with the report on stdout.
//! The filter comes from `GRAMMAR_VALIDATOR_LOG` (EnvFilter syntax, e.g.
//! `debug` or `grammar_validator::grammar=trace`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GRAMMAR_VALIDATOR_LOG";

/// Install the global subscriber; a second call is a no-op
pub fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr)
        .try_init();
}
