use std::str::FromStr;

/// A `--log-level` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub log::LevelFilter);

impl From<LogLevel> for log::LevelFilter {
    fn from(value: LogLevel) -> Self {
        value.0
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.to_ascii_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            l => return Err(format!("invalid log level: {l}")),
        };

        Ok(LogLevel(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel(log::LevelFilter::Debug)));
        assert_eq!("OFF".parse::<LogLevel>(), Ok(LogLevel(log::LevelFilter::Off)));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
