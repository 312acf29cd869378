use log::Level;

pub struct Config;

impl Config {
    /// Log level baked in at build time through `FRONTEND_LOG_LEVEL`.
    ///
    /// Trunk builds pick the variable up from the shell, so
    /// `FRONTEND_LOG_LEVEL=debug trunk serve` turns on render tracing.
    pub fn log_level() -> Level {
        Self::parse_log_level(option_env!("FRONTEND_LOG_LEVEL"))
    }

    pub fn parse_log_level(raw: Option<&str>) -> Level {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("error") => Level::Error,
            Some("warn") | Some("warning") => Level::Warn,
            Some("debug") => Level::Debug,
            Some("trace") => Level::Trace,
            _ => Level::Info,
        }
    }

    pub fn home_path() -> &'static str {
        crate::navigation::HOME_PATH
    }
}
