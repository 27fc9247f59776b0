use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetAgeError {
    #[error("Birth date is required")]
    MissingBirthDate,

    #[error("Invalid birth date '{value}': {reason}")]
    InvalidBirthDate { value: String, reason: String },

    #[error("Birth date {birth_date} is in the future")]
    FutureBirthDate { birth_date: chrono::NaiveDate },

    #[error("Unknown size category: {value}")]
    UnknownSizeCategory { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlDeError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Preference store error: {message}")]
    StorageError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Storage,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Low => 0,
            Self::Medium => 2,
            Self::High => 1,
            Self::Critical => 3,
        }
    }
}

impl PetAgeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingBirthDate
            | Self::InvalidBirthDate { .. }
            | Self::FutureBirthDate { .. }
            | Self::UnknownSizeCategory { .. } => ErrorCategory::Validation,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlDeError(_) => ErrorCategory::Configuration,
            Self::IoError(_) | Self::TomlSerError(_) | Self::StorageError { .. } => {
                ErrorCategory::Storage
            }
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 使用者輸入錯誤，重新輸入即可
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// 是否為表單驗證錯誤 (顯示在結果區的那種)
    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingBirthDate => "Pass the birth date with --birth YYYY-MM-DD".to_string(),
            Self::InvalidBirthDate { .. } => {
                "Use the YYYY-MM-DD format, e.g. --birth 2020-05-17".to_string()
            }
            Self::FutureBirthDate { .. } => {
                "Check the birth date, or the --as-of date if one was given".to_string()
            }
            Self::UnknownSizeCategory { .. } => {
                "Use one of: small, medium, large".to_string()
            }
            Self::IoError(_) | Self::StorageError { .. } => {
                "Check that the preference file location is writable (--store)".to_string()
            }
            Self::TomlSerError(_) => "Report this as a bug".to_string(),
            Self::TomlDeError(_)
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or override the value on the command line".to_string()
            }
            Self::CsvError(_) => {
                "Make sure the CSV has a name,birth_date,size header row".to_string()
            }
            Self::SerializationError(_) => "Try --format text instead".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingBirthDate => "Please choose a birth date.".to_string(),
            Self::FutureBirthDate { .. } => "Birth date cannot be in the future.".to_string(),
            Self::InvalidBirthDate { value, .. } => {
                format!("'{}' is not a valid birth date.", value)
            }
            Self::UnknownSizeCategory { value } => {
                format!("'{}' is not a known size category.", value)
            }
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::StorageError { message } => {
                format!("Could not access saved preferences: {}", message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PetAgeError>;
