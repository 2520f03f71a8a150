//! Logging setup for the binary
//!
//! Events go to stderr so stdout carries nothing but the JSON result.

use tracing_subscriber::EnvFilter;

/// Parse a filter directive. Returns the `info` filter and `true` when the
/// directive is rejected.
fn build_filter(filter: &str) -> (EnvFilter, bool) {
  match EnvFilter::try_new(filter) {
    Ok(f) => (f, false),
    Err(_) => (EnvFilter::new("info"), true),
  }
}

/// Install the stderr subscriber. A bad filter directive falls back to
/// `info` instead of failing startup.
pub fn init(filter: &str) {
  let (env_filter, rejected) = build_filter(filter);

  let installed = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init()
    .is_ok();

  if installed && rejected {
    tracing::warn!(filter, "invalid log filter, using info");
  }
}
