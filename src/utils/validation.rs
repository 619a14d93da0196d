use crate::domain::model::{ContactType, FormField, FormState};
use crate::utils::error::{Result, SiteError};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidContentError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidContentError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidContentError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidContentError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(SiteError::InvalidContentError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 表單原生驗證失敗的原因（對應瀏覽器的 constraint validation）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    ValueMissing,
    TypeMismatch,
    NotAnOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub field: FormField,
    pub kind: ViolationKind,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    // WHATWG 的 valid e-mail address 語法
    EMAIL.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("email pattern is a valid regex")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// `type="email"` 的值清理：移除換行，再去掉前後空白
pub fn sanitize_email(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect::<String>()
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .to_string()
}

/// 模擬宿主環境在送出前做的必填與格式檢查，回傳第一個違規欄位
pub fn validate_submission(form: &FormState) -> std::result::Result<(), ConstraintViolation> {
    let email = sanitize_email(&form.email);

    for field in FormField::ALL {
        let value = match field {
            FormField::Email => email.as_str(),
            _ => form.get(field),
        };
        if value.is_empty() {
            return Err(ConstraintViolation {
                field,
                kind: ViolationKind::ValueMissing,
            });
        }
    }

    if !is_valid_email(&email) {
        return Err(ConstraintViolation {
            field: FormField::Email,
            kind: ViolationKind::TypeMismatch,
        });
    }

    if form.r#type.parse::<ContactType>().is_err() {
        return Err(ConstraintViolation {
            field: FormField::Type,
            kind: ViolationKind::NotAnOption,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        FormState {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            r#type: "feedback".to_string(),
            subject: "Hello".to_string(),
            message: "Great site".to_string(),
        }
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("projects[0].link", "https://github.com/ksharm-67").is_ok());
        assert!(validate_url("projects[0].link", "http://example.com").is_ok());
        assert!(validate_url("projects[0].link", "").is_err());
        assert!(validate_url("projects[0].link", "github.com/ksharm-67").is_err());
        assert!(validate_url("projects[0].link", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty_string("profile.name", "Kavish").is_ok());
        assert!(validate_non_empty_string("profile.name", "   ").is_err());
        assert!(validate_non_empty_list::<String>("skills", &[]).is_err());
        assert!(validate_range("variant", 3u8, 1, 5).is_ok());
        assert!(validate_range("variant", 6u8, 1, 5).is_err());
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("jane@localhost"));
        assert!(!is_valid_email("jane.example.com"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane doe@example.com"));
    }

    #[test]
    fn test_submission_accepts_complete_form() {
        assert_eq!(validate_submission(&filled_form()), Ok(()));
    }

    #[test]
    fn test_submission_reports_missing_field() {
        let mut form = filled_form();
        form.subject.clear();
        assert_eq!(
            validate_submission(&form),
            Err(ConstraintViolation {
                field: FormField::Subject,
                kind: ViolationKind::ValueMissing,
            })
        );
    }

    #[test]
    fn test_submission_rejects_bad_email_and_type() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        assert_eq!(
            validate_submission(&form).unwrap_err().kind,
            ViolationKind::TypeMismatch
        );

        let mut form = filled_form();
        form.r#type = "complaint".to_string();
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ConstraintViolation {
                field: FormField::Type,
                kind: ViolationKind::NotAnOption,
            }
        );
    }

    #[test]
    fn test_email_is_sanitized_before_validation() {
        assert_eq!(sanitize_email("  jane@example.com \n"), "jane@example.com");

        let mut form = filled_form();
        form.email = " jane@example.com ".to_string();
        assert_eq!(validate_submission(&form), Ok(()));

        form.email = "   ".to_string();
        assert_eq!(
            validate_submission(&form),
            Err(ConstraintViolation {
                field: FormField::Email,
                kind: ViolationKind::ValueMissing,
            })
        );
    }
}
