#[allow(clippy::module_inception)]
mod config;

pub use self::config::{DataSettings, DisplaySettings, LoggingSettings, Settings};
