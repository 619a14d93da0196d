use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub output: OutputSection,
    pub content: Option<ContentSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub title: String,
    pub stylesheet: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
    pub emit_json: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSection {
    pub file: String,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 相對路徑的內容檔以設定檔所在目錄為基準
    pub fn resolve_content_path(&mut self, config_dir: &Path) {
        if let Some(content) = &mut self.content {
            let path = Path::new(&content.file);
            if path.is_relative() {
                content.file = config_dir.join(path).to_string_lossy().into_owned();
            }
        }
    }
}

impl ConfigProvider for SiteConfig {
    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn site_title(&self) -> &str {
        &self.site.title
    }

    fn stylesheet(&self) -> &str {
        self.site.stylesheet.as_deref().unwrap_or("/App.css")
    }

    fn emit_json(&self) -> bool {
        self.output.emit_json.unwrap_or(false)
    }

    fn content_file(&self) -> Option<&str> {
        self.content.as_ref().map(|c| c.file.as_str())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output.path", &self.output.path)?;
        if self.site.title.trim().is_empty() {
            return Err(SiteError::MissingConfigError {
                field: "site.title".to_string(),
            });
        }
        if let Some(content) = &self.content {
            validate_path("content.file", &content.file)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[site]
title = "Jane Doe"

[output]
path = "./public"
emit_json = true
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site_title(), "Jane Doe");
        assert_eq!(config.output_path(), "./public");
        assert_eq!(config.stylesheet(), "/App.css");
        assert!(config.emit_json());
        assert!(config.content_file().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_OUTPUT", "/tmp/site-out");

        let toml_content = r#"
[site]
title = "test"

[output]
path = "${PORTFOLIO_TEST_OUTPUT}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/site-out");

        std::env::remove_var("PORTFOLIO_TEST_OUTPUT");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[site]
title = "  "

[output]
path = "./out"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = SiteConfig::from_toml_str("[site\ntitle = 1").unwrap_err();
        assert!(matches!(err, SiteError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file_resolves_content_path() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[site]
title = "file-test"
stylesheet = "/styles/site.css"

[output]
path = "./out"

[content]
file = "content.toml"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let mut config = SiteConfig::from_file(temp_file.path()).unwrap();
        let dir = temp_file.path().parent().unwrap();
        config.resolve_content_path(dir);

        assert_eq!(config.stylesheet(), "/styles/site.css");
        assert_eq!(
            config.content_file().map(std::path::PathBuf::from),
            Some(dir.join("content.toml"))
        );
    }
}
