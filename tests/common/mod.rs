use tracing_subscriber::EnvFilter;

/// Routes library logs to the test output. Level comes from `CANDB_LOG`
/// (e.g. `CANDB_LOG=candb=trace`), errors only when unset.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("CANDB_LOG"))
        .with_test_writer()
        .try_init();
}
