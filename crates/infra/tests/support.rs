use std::sync::OnceLock;

static TRACING: OnceLock<()> = OnceLock::new();

/// Install a test subscriber once per test binary so adapter log lines
/// show up under `--nocapture`.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}
