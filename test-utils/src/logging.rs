use std::{env, sync::Once};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static INIT: Once = Once::new();

/// Installs a test-writer subscriber when `TEST_LOG` is set, e.g.
/// `TEST_LOG=debug cargo test`. `RUST_LOG` directives still apply on top.
pub(crate) fn init() {
    let Ok(level) = env::var("TEST_LOG") else {
        return;
    };

    INIT.call_once(|| {
        let level = level.parse().unwrap_or(LevelFilter::INFO);

        let env_filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init();
    });
}
