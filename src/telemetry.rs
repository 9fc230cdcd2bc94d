//! Logging setup shared by the binaries.

/// Quiet by default so log lines don't tear the rendered frames; `RUST_LOG`
/// overrides.
const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr logger; a second call is a no-op.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .try_init();
}
