use std::sync::Once;

use log::LevelFilter;

/// Where the logger takes its filter from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSource {
    /// Filter given in the config.
    Explicit(String),
    /// Filter read from `RUST_LOG`.
    Env(String),
    /// Neither was set.
    Fallback(LevelFilter),
}

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax, e.g. `"goscene_engine=trace"`
/// to see every shape as it is drawn.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: env_logger::WriteStyle::Auto }
    }
}

impl LoggingConfig {
    /// Configuration with an explicit filter, ignoring `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    /// Resolves the filter: explicit config, then `RUST_LOG`, then `info`.
    pub fn filter_source(&self) -> FilterSource {
        if let Some(filter) = &self.env_filter {
            return FilterSource::Explicit(filter.clone());
        }
        match std::env::var("RUST_LOG") {
            Ok(filter) => FilterSource::Env(filter),
            Err(_) => FilterSource::Fallback(LevelFilter::Info),
        }
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        match self.filter_source() {
            FilterSource::Explicit(filter) | FilterSource::Env(filter) => {
                builder.parse_filters(&filter);
            }
            FilterSource::Fallback(level) => {
                builder.filter_level(level);
            }
        }
        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger.
///
/// Only the first call has any effect; later calls keep the logger and level
/// from the first one. If some other logger is already installed, it is left
/// in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| match config.builder().try_init() {
        Ok(()) => log::debug!("logging initialized ({:?})", config.filter_source()),
        Err(err) => log::warn!("logger already installed: {err}"),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_first_level() {
        init_logging(LoggingConfig::with_filter("goscene_engine=trace"));
        let first = log::max_level();
        assert_eq!(first, LevelFilter::Trace);

        init_logging(LoggingConfig::with_filter("off"));
        assert_eq!(log::max_level(), first);
    }

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig::with_filter("warn");
        assert_eq!(config.filter_source(), FilterSource::Explicit("warn".into()));
    }
}
