//! Tracing subscriber for the driver.
//!
//! Enable with `TSCRIPT_LOG=tscript_eval=debug` (or `RUST_LOG`). Output is
//! an indented span tree on stderr.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
///
/// Does nothing unless `TSCRIPT_LOG` or `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let Some(directives) = std::env::var("TSCRIPT_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };

        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
            eprintln!("warning: ignoring invalid log filter '{directives}': {e}");
            EnvFilter::new("warn")
        });
        let tree = HierarchicalLayer::new(2)
            .with_targets(true)
            .with_writer(std::io::stderr);

        // A host may already have installed a subscriber.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tree)
            .try_init();
    });
}
