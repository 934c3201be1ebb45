use tracing_subscriber::EnvFilter;

/// Initializes logging. Call once at startup.
///
/// Level: INFO by default, or overridden by the RUST_LOG env var.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
