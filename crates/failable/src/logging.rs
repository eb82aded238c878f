//! Log output for rule evaluation.
//!
//! Rule checks emit `tracing` events from `failable_core`:
//!
//! - **DEBUG**: Rejected assignments, failed rules, short-circuited combinations
//! - **TRACE**: Each rule visited and each sub-rule skipped by type

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "failable_core=info";

/// Installs a global subscriber printing rule events to stderr.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// replaces the default `failable_core=info` filter when set. A subscriber installed
/// elsewhere is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init();
    });
}
