use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Binding error: {reason}")]
    Binding { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

/// 錯誤分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Storage,
    Configuration,
}

/// 錯誤嚴重程度，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StoreError {
    pub fn binding(reason: impl Into<String>) -> Self {
        StoreError::Binding {
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::Binding { .. } => ErrorCategory::Input,
            StoreError::Io(_) | StoreError::Csv(_) | StoreError::Serialization(_) => {
                ErrorCategory::Storage
            }
            StoreError::ConfigValidation { .. }
            | StoreError::InvalidConfigValue { .. }
            | StoreError::MissingConfig { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            StoreError::Binding { reason } => format!("Incorrect data entered: {}", reason),
            StoreError::Io(e) => format!("Could not write to the store file: {}", e),
            StoreError::Csv(e) => format!("Could not write the CSV record: {}", e),
            StoreError::Serialization(e) => format!("Could not serialize the record: {}", e),
            StoreError::ConfigValidation { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            StoreError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
            StoreError::MissingConfig { field } => {
                format!("Configuration value '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StoreError::Binding { .. } => {
                "Enter a non-empty model name and a whole-number price"
            }
            StoreError::Io(_) | StoreError::Csv(_) => {
                "Check that the output path exists and is writable"
            }
            StoreError::Serialization(_) => "Check the record contents for unsupported data",
            StoreError::ConfigValidation { .. }
            | StoreError::InvalidConfigValue { .. }
            | StoreError::MissingConfig { .. } => {
                "Fix the configuration file or command line arguments and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
