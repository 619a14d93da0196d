use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid content in '{field}': '{value}' ({reason})")]
    InvalidContentError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Unknown form field: {name}")]
    UnknownFormField { name: String },

    #[error("Invalid value for form field '{field}': '{value}'")]
    InvalidFormValue { field: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Content,
    Rendering,
    Interaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::IoError(_) => ErrorCategory::Io,
            SiteError::SerializationError(_) | SiteError::RenderError { .. } => {
                ErrorCategory::Rendering
            }
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SiteError::InvalidContentError { .. } => ErrorCategory::Content,
            SiteError::UnknownFormField { .. } | SiteError::InvalidFormValue { .. } => {
                ErrorCategory::Interaction
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Configuration | ErrorCategory::Content => ErrorSeverity::High,
            // 內容與設定都已通過驗證，渲染失敗通常是單一頁面的問題
            ErrorCategory::Rendering => ErrorSeverity::Medium,
            ErrorCategory::Interaction => ErrorSeverity::Low,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::IoError(_) => "Check that the output directory exists and is writable",
            SiteError::SerializationError(_) => {
                "Re-run with --verbose and inspect the content record that failed to serialize"
            }
            SiteError::ConfigValidationError { .. } => {
                "Make sure the config file is valid TOML and matches the documented sections"
            }
            SiteError::InvalidConfigValueError { .. } => {
                "Fix the reported value in the config file or on the command line"
            }
            SiteError::MissingConfigError { .. } => "Add the missing field to the config file",
            SiteError::InvalidContentError { .. } => {
                "Fix the reported content record; skills and bullet points must not be empty"
            }
            SiteError::RenderError { .. } => "Re-run with --verbose to see which page failed",
            SiteError::UnknownFormField { .. } => {
                "Use one of the contact form fields: name, email, type, subject, message"
            }
            SiteError::InvalidFormValue { .. } => {
                "Pick one of the listed options: feedback, opportunity, question"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::IoError(e) => format!("Could not read or write a file: {}", e),
            SiteError::InvalidContentError { field, reason, .. } => {
                format!("Content record '{}' is invalid: {}", field, reason)
            }
            SiteError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_errors_are_high_severity() {
        let err = SiteError::InvalidContentError {
            field: "experiences[0].points".to_string(),
            value: String::new(),
            reason: "points cannot be empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Content);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("experiences[0].points"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = SiteError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_render_errors_are_medium_severity() {
        let err = SiteError::RenderError {
            message: "No page was rendered for /".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Rendering);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_form_errors_are_low_severity() {
        let err = SiteError::UnknownFormField {
            name: "phone".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Interaction);
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }
}
