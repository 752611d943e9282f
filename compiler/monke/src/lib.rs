//! Monkey language driver.
//!
//! Wires the [`monke_lexer`] scanner to the outside world: an interactive
//! read loop that tokenizes one line at a time, a `lex` command for whole
//! files, and the process-level plumbing (greeting, configuration, errors,
//! tracing).

pub mod commands;
mod config;
mod error;
pub mod greeting;
pub mod render;
pub mod repl;

pub use commands::{lex_file, lex_path};
pub use config::ReplConfig;
pub use error::DriverError;
pub use repl::{run_repl, Repl};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=monke=debug` or `RUST_LOG=monke_lexer=trace`; set
/// `MONKE_LOG_TREE=1` as well for indented span trees instead of flat lines.
/// Output goes to stderr so it never interleaves with rendered tokens.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            if std::env::var_os("MONKE_LOG_TREE").is_some() {
                tracing_subscriber::registry()
                    .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                    .with(filter)
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(
                        fmt::layer()
                            .with_writer(std::io::stderr)
                            .with_target(true)
                            .with_level(true),
                    )
                    .with(filter)
                    .init();
            }
        }
    });
}
