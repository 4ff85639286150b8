use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Interactive in-memory employee roster.
#[derive(Debug, Clone, Parser)]
#[command(name = "roster", version)]
pub struct Config {
    /// Diagnostic log level, written to stderr.
    #[arg(long, value_enum, env = "ROSTER_LOG", default_value = "warn")]
    pub log_level: LogLevel,
    /// Print listings as JSON instead of one line per employee.
    #[arg(long)]
    pub json: bool,
    /// Don't reprint the menu between commands.
    #[arg(long)]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::Warn,
            json: false,
            quiet: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parsed_empty_command_line() {
        let parsed = Config::try_parse_from(["roster"]).unwrap();
        let default = Config::default();

        assert_eq!(parsed.log_level, default.log_level);
        assert_eq!(parsed.json, default.json);
        assert_eq!(parsed.quiet, default.quiet);
    }

    #[test]
    fn parses_flags() {
        let parsed = Config::try_parse_from(["roster", "--log-level", "debug", "--json", "--quiet"]).unwrap();

        assert_eq!(parsed.log_level, LogLevel::Debug);
        assert_eq!(LevelFilter::from(parsed.log_level), LevelFilter::Debug);
        assert!(parsed.json);
        assert!(parsed.quiet);
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(Config::try_parse_from(["roster", "--log-level", "loud"]).is_err());
    }
}
