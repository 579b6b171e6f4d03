//! Tracing subscriber setup.
//!
//! Defaults to info level for the grocery crates if `RUST_LOG` is not set.
//! Set `GROCERY_LOG_JSON` to get one JSON object per event, for log shipping.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "grocery_client=info,grocery_admin=info,grocery_storefront=info";

/// Install the global subscriber.
///
/// Safe to call more than once: later calls are ignored, which lets every
/// test binary call it unconditionally.
pub fn init() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let json = std::env::var_os("GROCERY_LOG_JSON").is_some();
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(tracing_subscriber::fmt::layer);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init();
}
