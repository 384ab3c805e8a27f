use std::sync::Once;

use log::LevelFilter;

/// Log targets owned by this workspace, in the order they are configured.
const DECANTER_TARGETS: [&str; 3] = ["decanter_liquid", "decanter_engine", "decanter_studio"];

/// Logger configuration.
///
/// Without an explicit filter or `RUST_LOG`, decanter crates log at `level` and
/// every other crate is held to `warn`. `trace_stack` additionally opens
/// `decanter_liquid` at `trace`, which reports every merge, push and drain.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax; overrides every other setting when present.
    pub env_filter: Option<String>,
    pub level: LevelFilter,
    pub trace_stack: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            level: LevelFilter::Info,
            trace_stack: false,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    /// Default config with stack tracing switched on.
    pub fn tracing_stack() -> Self {
        Self { trace_stack: true, ..Self::default() }
    }

    /// Filter directives used when neither `env_filter` nor `RUST_LOG` is set.
    pub fn directives(&self) -> String {
        let mut out = String::from("warn");
        for target in DECANTER_TARGETS {
            let level = if self.trace_stack && target == "decanter_liquid" {
                LevelFilter::Trace
            } else {
                self.level
            };
            out.push_str(&format!(",{target}={}", level.as_str().to_ascii_lowercase()));
        }
        out
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then
/// [`LoggingConfig::directives`]. Later calls are ignored, and a logger already
/// installed by a host application is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let filter = config
            .env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| config.directives());
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized with `{filter}`");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::with_filter("debug"));
        init_logging(LoggingConfig::default());
        log::debug!("still alive");
    }

    #[test]
    fn default_directives_quiet_other_crates() {
        assert_eq!(
            LoggingConfig::default().directives(),
            "warn,decanter_liquid=info,decanter_engine=info,decanter_studio=info"
        );
    }

    #[test]
    fn tracing_stack_opens_only_the_model() {
        let c = LoggingConfig { level: LevelFilter::Debug, ..LoggingConfig::tracing_stack() };
        assert_eq!(
            c.directives(),
            "warn,decanter_liquid=trace,decanter_engine=debug,decanter_studio=debug"
        );
    }

    #[test]
    fn with_filter_keeps_defaults() {
        let c = LoggingConfig::with_filter("warn");
        assert_eq!(c.env_filter.as_deref(), Some("warn"));
        assert!(!c.trace_stack);
        assert!(matches!(c.write_style, env_logger::WriteStyle::Auto));
    }
}
