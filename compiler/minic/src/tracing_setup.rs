//! Log subscriber installation for the driver.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Environment variables consulted for the log filter, in priority order.
const FILTER_VARS: [&str; 2] = ["MINIC_LOG", "RUST_LOG"];

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Nothing is
/// installed unless `MINIC_LOG` or `RUST_LOG` is set, e.g.
/// `MINIC_LOG=minic_lexer=trace minic lex file.mc`. Logs go to stderr so
/// they never interleave with the token listing on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = filter_from_env() else {
            return;
        };

        if tree_requested() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

fn filter_from_env() -> Option<EnvFilter> {
    FILTER_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
}

fn tree_requested() -> bool {
    std::env::var("MINIC_LOG_TREE").is_ok_and(|v| v == "1")
}
