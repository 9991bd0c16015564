// SPDX-License-Identifier: MPL-2.0
//! Logging setup.

use crate::error::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Filter used when neither `--log-filter` nor `RUST_LOG` yields a valid one.
pub const DEFAULT_FILTER: &str = "simple_toast=info";

/// Picks the first valid filter among the explicit one, `RUST_LOG`, and
/// [`DEFAULT_FILTER`].
pub fn resolve_filter(explicit_filter: Option<&str>) -> Result<EnvFilter> {
    let mut candidates = Vec::new();
    if let Some(filter) = explicit_filter {
        candidates.push(filter.to_string());
    }
    if let Ok(env) = std::env::var("RUST_LOG") {
        candidates.push(env);
    }
    candidates.push(DEFAULT_FILTER.to_string());

    candidates
        .into_iter()
        .find_map(|candidate| EnvFilter::try_new(candidate).ok())
        .ok_or_else(|| Error::Telemetry("invalid log filter".to_string()))
}

/// Installs the global `fmt` subscriber.
///
/// # Errors
///
/// Fails if no filter is valid or a global subscriber is already set.
pub fn init_tracing(explicit_filter: Option<&str>) -> Result<()> {
    let filter = resolve_filter(explicit_filter)?;
    let subscriber = Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true));
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| Error::Telemetry(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let filter = resolve_filter(Some("simple_toast=debug")).expect("valid filter");
        assert!(filter.to_string().contains("simple_toast=debug"));
    }

    #[test]
    fn falls_back_when_explicit_filter_is_invalid() {
        assert!(resolve_filter(Some("=[not a filter")).is_ok());
    }
}
