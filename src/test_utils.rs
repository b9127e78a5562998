//! Test helpers: logging setup and phase/assertion macros.
//!
//! Available in unit tests and, through the `test-internals` feature, in
//! integration tests:
//!
//! ```ignore
//! use shapejoin::test_utils::init_test_logging;
//!
//! #[test]
//! fn joins_vec() {
//!     init_test_logging();
//!     shapejoin::test_phase!("joins_vec");
//!     // ...
//!     shapejoin::test_complete!("joins_vec");
//! }
//! ```
//!
//! The log filter comes from `RUST_LOG`, defaulting to `shapejoin=debug`.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a test-friendly tracing subscriber once per process.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("shapejoin=debug"));
        // Another harness may already own the global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

#[doc(hidden)]
pub fn log_phase(name: &str) {
    tracing::info!(test = name, "test phase start");
}

#[doc(hidden)]
pub fn log_complete(name: &str) {
    tracing::info!(test = name, "test complete");
}

#[doc(hidden)]
pub fn log_assertion(what: &str, expected: &dyn std::fmt::Debug, actual: &dyn std::fmt::Debug) {
    tracing::error!(
        what,
        expected = ?expected,
        actual = ?actual,
        "assertion failed"
    );
}

/// Logs the start of a named test phase.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        $crate::test_utils::log_phase($name)
    };
}

/// Logs the successful end of a named test.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        $crate::test_utils::log_complete($name)
    };
}

/// Asserts a condition, logging the expected and actual values on failure.
#[macro_export]
macro_rules! assert_with_log {
    ($cond:expr, $what:expr, $expected:expr, $actual:expr) => {{
        let ok: bool = $cond;
        if !ok {
            $crate::test_utils::log_assertion($what, &$expected, &$actual);
        }
        assert!(ok, "{}: expected {:?}, got {:?}", $what, $expected, $actual);
    }};
}
