use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unit the timestamp is printed in
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Millis,
    Seconds,
}

#[derive(Parser, Debug, PartialEq)]
#[command(name = "epochms")]
#[command(about = "Print the current wall-clock time as milliseconds since the Unix epoch")]
pub struct CliArgs {
    /// Output unit (overrides config)
    #[arg(long, value_enum)]
    pub unit: Option<Unit>,

    /// Number of samples to print (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let args = CliArgs::parse_from(["epochms"]);
        assert_eq!(args.unit, None);
        assert_eq!(args.count, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_cli_parse_all_flags() {
        let args = CliArgs::parse_from([
            "epochms",
            "--unit",
            "seconds",
            "--count",
            "3",
            "--config",
            "/custom/epochms.toml",
        ]);
        assert_eq!(args.unit, Some(Unit::Seconds));
        assert_eq!(args.count, Some(3));
        assert_eq!(args.config, Some(PathBuf::from("/custom/epochms.toml")));
    }

    #[test]
    fn test_cli_rejects_zero_count() {
        assert!(CliArgs::try_parse_from(["epochms", "--count", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_unit() {
        assert!(CliArgs::try_parse_from(["epochms", "--unit", "hours"]).is_err());
    }
}
