use std::str::FromStr;

use crate::logger::error::LoggerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerFormat {
    Text,
    Json,
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LoggerFormat::Text),
            "json" => Ok(LoggerFormat::Json),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("text".parse::<LoggerFormat>().unwrap(), LoggerFormat::Text);
        assert_eq!(" JSON ".parse::<LoggerFormat>().unwrap(), LoggerFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!("yaml".parse::<LoggerFormat>().is_err());
    }
}
