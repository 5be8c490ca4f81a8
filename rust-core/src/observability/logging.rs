use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, fmt};
use std::sync::OnceLock;

use crate::config::LoggingConfig;

static LOG_INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber once. `RUST_LOG` wins over the configured level.
pub fn setup_logging(config: &LoggingConfig) {
    LOG_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        // Stdout carries command output; logs go to stderr.
        let json_layer = config.json.then(|| {
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
        });

        let fmt_layer = (!config.json).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
        });

        // try_init: an embedding application may already own the global subscriber
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .with(fmt_layer)
            .try_init();
    });
}

#[macro_export]
macro_rules! log_tool {
    ($level:ident, $tool:expr, $($arg:tt)*) => {
        tracing::$level!(
            target: "tool",
            tool = %$tool,
            $($arg)*
        );
    };
}
