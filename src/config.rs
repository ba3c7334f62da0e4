use crate::error::ConfigError;

use std::env;
use std::path::PathBuf;

pub const LOG_ENV: &str = "MINI_GC_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source file to run once; `None` starts the REPL.
    pub source: Option<PathBuf>,
    pub show_tree: bool,
    pub log_filter: String,
}

impl Config {
    /// Resolves the configuration from the process arguments and environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        let log_filter = env::var(LOG_ENV).or_else(|_| env::var("RUST_LOG")).ok();

        Config::parse(env::args().skip(1), log_filter)
    }

    pub fn parse<I>(args: I, log_filter: Option<String>) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut show_tree = true;
        let mut positional = vec![];

        for arg in args {
            match arg.as_str() {
                "--no-tree" => show_tree = false,
                flag if flag.starts_with("--") => return Err(ConfigError::UnknownFlag(arg)),
                _ => positional.push(arg),
            }
        }

        if positional.len() > 1 {
            return Err(ConfigError::TooManyArguments(positional.len()));
        }

        let log_filter = log_filter
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            source: positional.pop().map(PathBuf::from),
            show_tree,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let config = Config::parse(args(&[]), None).unwrap();

        let expected = Config {
            source: None,
            show_tree: true,
            log_filter: "warn".to_string(),
        };

        assert_eq!(config, expected)
    }

    #[test]
    fn file_and_flag() {
        let config = Config::parse(args(&["--no-tree", "prog.txt"]), Some("debug".to_string()))
            .unwrap();

        assert_eq!(config.source, Some(PathBuf::from("prog.txt")));
        assert!(!config.show_tree);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn blank_log_filter_falls_back() {
        let config = Config::parse(args(&[]), Some("  ".to_string())).unwrap();

        assert_eq!(config.log_filter, "warn")
    }

    #[test_case(&["--verbose"]       , ConfigError::UnknownFlag("--verbose".to_string()) ; "unknown flag"  )]
    #[test_case(&["a.txt", "b.txt"]  , ConfigError::TooManyArguments(2)                  ; "two files"     )]
    fn invalid(input: &[&str], expected: ConfigError) {
        assert_eq!(Config::parse(args(input), None), Err(expected))
    }
}
