//! Test logging initialization shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize logging for tests. Idempotent; safe to call from every test.
///
/// Filter precedence: `TEST_LOG`, then `RUST_LOG`, then `warn` with sqlx and
/// sea_orm query logging silenced.
///
/// ```bash
/// TEST_LOG=debug cargo test -p blog-backend
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn,sqlx=off,sea_orm=off"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok(); // another subscriber may already be installed
    });
}
