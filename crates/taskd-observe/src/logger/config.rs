use std::io::{IsTerminal, stdout};

use crate::logger::format::LoggerFormat;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// EnvFilter directive, e.g. `"info"` or `"taskd_api=debug,info"`.
    pub level: String,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::Text,
            level: "info".to_string(),
            with_targets: true,
            use_color: stdout().is_terminal(),
        }
    }
}
