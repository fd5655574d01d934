use crate::adapters::SaveFormat;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub store: Option<StoreSection>,
    pub input: Option<InputConfig>,
    pub output: OutputConfig,
    pub processing: Option<ProcessingConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub requests: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StoreError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STORE_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StoreError::ConfigValidation {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store.as_ref().map(|s| s.name.as_str())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("text")
    }

    fn input_path(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.path.as_deref())
    }

    fn requests(&self) -> usize {
        self.processing
            .as_ref()
            .and_then(|p| p.requests)
            .unwrap_or(1)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = self.store_name() {
            validation::validate_non_empty_string("store.name", name)?;
        }

        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_one_of("output.format", self.output_format(), &SaveFormat::NAMES)?;

        if let Some(input) = &self.input {
            let path = validation::validate_required_field("input.path", &input.path)?;
            validation::validate_path("input.path", path)?;
        }

        validation::validate_positive_number("processing.requests", self.requests(), 1)?;

        if let Some(level) = self.log_level() {
            validation::validate_one_of(
                "logging.level",
                level,
                &["trace", "debug", "info", "warn", "error"],
            )?;
        }

        Ok(())
    }
}
