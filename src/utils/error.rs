use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("Invalid argument: operands must be non-negative (got {a}, {b})")]
    InvalidArgument { a: i32, b: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl MathError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MathError::InvalidArgument { .. } => ErrorCategory::Argument,
            MathError::ConfigError { .. } | MathError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            MathError::IoError(_) | MathError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Argument => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            MathError::InvalidArgument { a, b } => {
                format!("Cannot multiply {} and {}: both numbers must be zero or greater", a, b)
            }
            MathError::ConfigError { message } => format!("Configuration problem: {}", message),
            MathError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            MathError::IoError(e) => format!("Could not access a file: {}", e),
            MathError::SerializationError(e) => format!("Could not format the result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MathError::InvalidArgument { .. } => "Pass non-negative integers as operands",
            MathError::ConfigError { .. } => "Check that the config file is valid TOML",
            MathError::InvalidConfigValueError { .. } => {
                "Fix the highlighted setting on the command line or in the config file"
            }
            MathError::IoError(_) => "Check that the path exists and is readable",
            MathError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, MathError>;
