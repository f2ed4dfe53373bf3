//! Tracing setup
//!
//! Library code logs through `tracing` macros; the binary installs a
//! subscriber once at startup. Output goes to stderr so report output on
//! stdout stays clean.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Directive applied when `RUST_LOG` is not set
pub const DEFAULT_DIRECTIVE: &str = "spendlens=warn";

/// Initializes the global tracing subscriber
///
/// `verbose` raises the crate's level to `debug`. Safe to call repeatedly.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let directive = if verbose {
            "spendlens=debug"
        } else {
            DEFAULT_DIRECTIVE
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(directive));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic_when_called_twice() {
        super::init_tracing(false);
        super::init_tracing(true);
    }
}
