use crate::config::toml_config::ToolConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "locale-helpers")]
#[command(about = "Format currency and dates in Spanish locales, and generate short ids")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Format an amount as US dollars (es-US)
    Currency {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Format epoch milliseconds as a long Spanish date (es-ES)
    Date {
        #[arg(allow_hyphen_values = true)]
        timestamp_millis: String,

        /// Use UTC instead of the local timezone
        #[arg(long)]
        utc: bool,
    },
    /// Generate one or more ids
    Id {
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

impl CliConfig {
    /// 載入設定檔 (若有指定)，命令列參數優先
    pub fn resolve(&self) -> Result<ToolConfig> {
        let mut config = match &self.config {
            Some(path) => {
                validation::validate_path("config", path)?;
                ToolConfig::from_file(path)?
            }
            None => ToolConfig::default(),
        };

        if self.verbose {
            config.logging.verbose = Some(true);
        }

        match &self.command {
            Command::Date { utc: true, .. } => config.date.utc = Some(true),
            Command::Id { count: Some(count) } => config.id.count = Some(*count),
            _ => {}
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_currency_negative_amount() {
        let cli = CliConfig::try_parse_from(["locale-helpers", "currency", "-12.5"]).unwrap();
        match cli.command {
            Command::Currency { amount } => assert_eq!(amount, "-12.5"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[id]\ncount = 2\n").unwrap();
        let path = temp_file.path().to_str().unwrap();

        let cli =
            CliConfig::try_parse_from(["locale-helpers", "--config", path, "id", "-n", "5"]).unwrap();
        assert_eq!(cli.resolve().unwrap().id_count(), 5);

        let cli = CliConfig::try_parse_from(["locale-helpers", "--config", path, "id"]).unwrap();
        assert_eq!(cli.resolve().unwrap().id_count(), 2);
    }

    #[test]
    fn test_date_utc_flag() {
        let cli = CliConfig::try_parse_from(["locale-helpers", "date", "0", "--utc"]).unwrap();
        assert!(cli.resolve().unwrap().use_utc());
    }

    #[test]
    fn test_invalid_count_rejected() {
        let cli = CliConfig::try_parse_from(["locale-helpers", "id", "--count", "0"]).unwrap();
        assert!(cli.resolve().is_err());
    }
}
