#![forbid(unsafe_code)]

//! Subscriber installation for hosts that want log output.
//!
//! The runtime emits `tracing` events under the `leafbook.*` targets and
//! never installs a subscriber on its own. Hosts can call [`init`] once at
//! startup; the filter is read from `LEAFBOOK_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const FILTER_ENV: &str = "LEAFBOOK_LOG";

/// Install a global fmt subscriber, plain or JSON.
///
/// Fails if a global subscriber is already installed.
pub fn init(json: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
