use std::sync::Once;

/// Logger configuration. `filter` uses the `env_logger` syntax, e.g. "gl_wrapper=debug".
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

static INIT: Once = Once::new();

///
/// Installs the global logger. Explicit filter first, then `RUST_LOG`, otherwise `info`.
///
/// Only the first call has an effect.
///
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        // a test harness may already own the logger
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
