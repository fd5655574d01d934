use crate::adapters::SaveFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mobile-store")]
#[command(about = "Reads phone records, validates them and appends them to a store file")]
pub struct CliConfig {
    #[arg(long, short = 'c', help = "TOML configuration file; overrides the other options")]
    pub config: Option<String>,

    #[arg(long, default_value = "store.txt")]
    pub output_path: String,

    #[arg(long, default_value = "text", help = "Output format: text, csv or jsonl")]
    pub format: String,

    #[arg(long, help = "Read model/price lines from a file instead of the terminal")]
    pub input: Option<String>,

    #[arg(long, default_value = "1")]
    pub requests: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_format(&self) -> &str {
        &self.format
    }

    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn requests(&self) -> usize {
        self.requests
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_one_of("format", &self.format, &SaveFormat::NAMES)?;
        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
        }
        validation::validate_positive_number("requests", self.requests, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["mobile-store"]);

        assert_eq!(config.output_path(), "store.txt");
        assert_eq!(config.output_format(), "text");
        assert_eq!(config.input_path(), None);
        assert_eq!(config.requests(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_all_options() {
        let config = CliConfig::parse_from([
            "mobile-store",
            "--output-path",
            "phones.csv",
            "--format",
            "csv",
            "--input",
            "requests.txt",
            "--requests",
            "3",
            "--verbose",
        ]);

        assert_eq!(config.output_path(), "phones.csv");
        assert_eq!(config.output_format(), "csv");
        assert_eq!(config.input_path(), Some("requests.txt"));
        assert_eq!(config.requests(), 3);
        assert!(config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_format = CliConfig::parse_from(["mobile-store", "--format", "xml"]);
        assert!(bad_format.validate().is_err());

        let zero_requests = CliConfig::parse_from(["mobile-store", "--requests", "0"]);
        assert!(zero_requests.validate().is_err());

        let empty_output = CliConfig::parse_from(["mobile-store", "--output-path", ""]);
        assert!(empty_output.validate().is_err());
    }
}
