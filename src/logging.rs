//! Tracing setup for binaries and tests embedding the console

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "MARKET_ADMIN_LOG";

/// Install a global fmt subscriber filtered by `MARKET_ADMIN_LOG`
///
/// Defaults to `info`. Calling this twice is harmless: the second
/// installation fails silently.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}
