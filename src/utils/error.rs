use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl HelperError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            HelperError::IoError(e) => format!("無法讀取檔案: {}", e),
            HelperError::TomlError(_) => "設定檔不是有效的 TOML 格式".to_string(),
            HelperError::ConfigError { message } => format!("設定錯誤: {}", message),
            HelperError::InvalidConfigValueError { field, reason, .. } => {
                format!("設定值 '{}' 無效: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HelperError::IoError(_) => "Check that the config file exists and is readable",
            HelperError::TomlError(_) => "Fix the TOML syntax in the config file",
            HelperError::ConfigError { .. } | HelperError::InvalidConfigValueError { .. } => {
                "Review the config values and command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;
