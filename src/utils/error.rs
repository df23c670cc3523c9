use thiserror::Error;

/// 菜單載入失敗。MenuViewModel 會在本地吸收，轉成 `MenuState::Failed`。
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Menu request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Menu endpoint returned HTTP {0}")]
    Status(u16),

    #[error("Menu response is not valid JSON: {0}")]
    Decode(String),
}

/// 聯絡表單送出失敗。對使用者一律顯示通用訊息，變體只用於內部判斷。
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Contact request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Contact endpoint returned HTTP {0}")]
    Status(u16),

    #[error("Contact response has unexpected shape: {0}")]
    Decode(String),

    #[error("Contact endpoint rejected the message")]
    Rejected,
}

impl SubmitError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Rejected => "Something went wrong.",
            _ => "Unable to send right now.",
        }
    }
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },
}

impl SiteError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::Fetch(_) => "Unable to load menu right now.".to_string(),
            SiteError::Submit(e) => e.user_message().to_string(),
            SiteError::IoError(e) => format!("Could not read file: {}", e),
            SiteError::TomlError(_) => "Configuration file is not valid TOML.".to_string(),
            SiteError::SerializationError(_) => "Could not encode request data.".to_string(),
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SiteError::MissingFieldError { field } => format!("Please fill in '{}'.", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::Fetch(_) | SiteError::Submit(_) => {
                "Check that the backend is running and --base-url points at it"
            }
            SiteError::IoError(_) => "Check the --config path",
            SiteError::TomlError(_) => "Fix the syntax of the configuration file",
            SiteError::SerializationError(_) => "Retry; if it persists, report a bug",
            SiteError::InvalidConfigValueError { .. } => {
                "Use an http(s) base URL and a positive timeout"
            }
            SiteError::MissingFieldError { .. } => "Name, email and message are required",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_errors_collapse_to_generic_messages() {
        assert_eq!(SubmitError::Status(500).user_message(), "Unable to send right now.");
        assert_eq!(
            SubmitError::Decode("x".into()).user_message(),
            "Unable to send right now."
        );
        assert_eq!(SubmitError::Rejected.user_message(), "Something went wrong.");
    }

    #[test]
    fn test_site_error_wraps_fetch_error() {
        let err: SiteError = FetchError::Status(502).into();
        assert_eq!(err.to_string(), "Menu endpoint returned HTTP 502");
        assert_eq!(err.user_friendly_message(), "Unable to load menu right now.");
    }
}
