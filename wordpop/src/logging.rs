/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: OSL-3.0
 */

//! Sets up diagnostic output for the command line tools.


use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The environment variable consulted ahead of `RUST_LOG`.
pub const LOG_VAR: &str = "WORDPOP_LOG";

/// Builds the filter to log with. An explicit directive from the environment wins over
/// `verbose`, and an unparsable one falls back to `info`.
pub fn log_filter(directive: Option<&str>, verbose: bool) -> EnvFilter {
    match directive {
        Some(value) => EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("info"),
    }
}

/// Installs a global subscriber that writes to stderr, leaving stdout free for tool output.
pub fn init_logging(verbose: bool) {

    let directive = std::env::var(LOG_VAR)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(directive.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
