use {
    std::sync::Once,
    tracing::Level,
    tracing_subscriber::{EnvFilter, FmtSubscriber},
};

static TRACING: Once = Once::new();

/// Print the logs of the crate under test, at `level` unless `RUST_LOG` says
/// otherwise. HTTP client crates are kept at `WARN`.
pub fn setup_tracing_subscriber(level: Level) {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{level},hyper=warn,reqwest=warn")));

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_test_writer()
            .finish();

        // Another harness may have installed a subscriber already.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
