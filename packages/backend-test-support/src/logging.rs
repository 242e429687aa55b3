//! Test logging.
//!
//! Every test binary calls [`init`] from a `ctor`; the first call installs a
//! subscriber writing through the test harness, later calls do nothing.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const QUIET: &str = "warn";

/// `TEST_LOG` beats `RUST_LOG`; with neither set only warnings show.
fn directives(test_log: Option<String>, rust_log: Option<String>) -> String {
    test_log
        .or(rust_log)
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| QUIET.to_string())
}

/// Install the test subscriber. `TEST_LOG_FORMAT=json` mirrors the server's
/// JSON lines.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::new(directives(
            std::env::var("TEST_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        ));
        let json = std::env::var("TEST_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time();
        // Another subscriber may already be installed; keep it.
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
