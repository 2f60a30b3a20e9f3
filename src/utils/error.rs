use thiserror::Error;

/// 轉換失敗時對使用者顯示的統一訊息
pub const CONVERSION_FAILED_MESSAGE: &str =
    "Unable to convert form. Please check the URL and try again.";

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid Google Forms URL.";

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid form URL: {url:?}")]
    InvalidUrl { url: String },

    #[error("Fetch failed: {message}")]
    FetchFailure { message: String },

    #[error("Could not find form data (FB_PUBLIC_LOAD_DATA_) in page")]
    SchemaNotFound,

    #[error("Malformed form schema: {reason}")]
    MalformedSchema { reason: String },

    #[error("Malformed question #{index}: {reason}")]
    MalformedQuestion { index: usize, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl From<reqwest::Error> for ConvertError {
    fn from(err: reqwest::Error) -> Self {
        ConvertError::FetchFailure {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Extraction,
    Config,
    Output,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::InvalidUrl { .. } => ErrorCategory::Input,
            ConvertError::FetchFailure { .. } => ErrorCategory::Network,
            ConvertError::SchemaNotFound
            | ConvertError::MalformedSchema { .. }
            | ConvertError::MalformedQuestion { .. } => ErrorCategory::Extraction,
            ConvertError::IoError(_) => ErrorCategory::Output,
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    /// 所有轉換階段的錯誤都收斂成同一則訊息，不顯示部分結果
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => INVALID_URL_MESSAGE.to_string(),
            ErrorCategory::Network | ErrorCategory::Extraction => {
                CONVERSION_FAILED_MESSAGE.to_string()
            }
            ErrorCategory::Config | ErrorCategory::Output => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Pass the form's public URL, e.g. https://docs.google.com/forms/d/e/<id>/viewform",
            ErrorCategory::Network => "Check your connection, or start form-proxy and pass --proxy",
            ErrorCategory::Extraction => "Make sure the form is public and the URL points at its viewform page",
            ErrorCategory::Config => "Fix the configuration value and run again",
            ErrorCategory::Output => "Check that the output directory is writable",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Config => 2,
            ErrorCategory::Network => 3,
            ErrorCategory::Extraction => 4,
            ErrorCategory::Output => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
