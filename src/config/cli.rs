use crate::config::toml_config::{ContentSection, SiteConfig};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "./dist";
pub const DEFAULT_TITLE: &str = "Kavish Sharma";
pub const DEFAULT_STYLESHEET: &str = "/App.css";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-spa")]
#[command(about = "Render the portfolio site into static HTML pages")]
pub struct CliConfig {
    /// Path to a TOML site configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output directory [default: ./dist]
    #[arg(long)]
    pub output_path: Option<String>,

    /// TOML file that replaces the built-in content
    #[arg(long)]
    pub content: Option<String>,

    /// Site title [default: Kavish Sharma]
    #[arg(long)]
    pub title: Option<String>,

    /// Stylesheet href [default: /App.css]
    #[arg(long)]
    pub stylesheet: Option<String>,

    /// Also write the content registry as content.json
    #[arg(long)]
    pub emit_json: bool,

    /// Render and summarize without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// -v for debug logs, -vv to also log every card render
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// 命令列明確給的參數覆蓋設定檔，沒給的保留設定檔的值
    pub fn apply_overrides(&self, config: &mut SiteConfig) {
        if let Some(path) = &self.output_path {
            config.output.path = path.clone();
        }
        if let Some(title) = &self.title {
            config.site.title = title.clone();
        }
        if let Some(stylesheet) = &self.stylesheet {
            config.site.stylesheet = Some(stylesheet.clone());
        }
        if let Some(file) = &self.content {
            config.content = Some(ContentSection { file: file.clone() });
        }
        if self.emit_json {
            config.output.emit_json = Some(true);
        }
    }
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn site_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    fn stylesheet(&self) -> &str {
        self.stylesheet.as_deref().unwrap_or(DEFAULT_STYLESHEET)
    }

    fn emit_json(&self) -> bool {
        self.emit_json
    }

    fn content_file(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", self.output_path())?;
        if let Some(content) = &self.content {
            validate_path("content", content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["portfolio-spa"]);
        assert_eq!(config.output_path(), "./dist");
        assert_eq!(config.stylesheet(), "/App.css");
        assert!(config.content_file().is_none());
        assert!(!config.emit_json());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from([
            "portfolio-spa",
            "--output-path",
            "public",
            "--content",
            "site.toml",
            "--emit-json",
            "-v",
        ]);
        assert_eq!(config.output_path(), "public");
        assert_eq!(config.content_file(), Some("site.toml"));
        assert!(config.emit_json());
        assert_eq!(config.verbose, 1);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut site = SiteConfig::from_toml_str(
            r#"
[site]
title = "From File"
stylesheet = "/file.css"

[output]
path = "./file-out"
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "portfolio-spa",
            "--config",
            "site.toml",
            "--output-path",
            "public",
            "--title",
            "From Flag",
            "--stylesheet",
            "/flag.css",
        ]);
        cli.apply_overrides(&mut site);

        assert_eq!(site.output_path(), "public");
        assert_eq!(site.site_title(), "From Flag");
        assert_eq!(site.stylesheet(), "/flag.css");
        assert!(site.content_file().is_none());
        assert!(!site.emit_json());
    }

    #[test]
    fn test_unset_flags_keep_config_file_values() {
        let mut site = SiteConfig::from_toml_str(
            r#"
[site]
title = "From File"

[output]
path = "./file-out"
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from(["portfolio-spa", "--config", "site.toml", "--emit-json"]);
        cli.apply_overrides(&mut site);

        assert_eq!(site.output_path(), "./file-out");
        assert_eq!(site.site_title(), "From File");
        assert_eq!(site.stylesheet(), DEFAULT_STYLESHEET);
        assert!(site.emit_json());
    }

    #[test]
    fn test_empty_output_path_is_rejected() {
        let config = CliConfig::parse_from(["portfolio-spa", "--output-path", ""]);
        assert!(config.validate().is_err());
    }
}
