use crate::utils::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// 技能分類的視覺樣式編號（1..=5）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkillVariant(u8);

impl SkillVariant {
    pub const BASE: SkillVariant = SkillVariant(1);
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self> {
        crate::utils::validation::validate_range("skill_categories.variant", value, 1, Self::MAX)?;
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// `skill` for the base style, `skillN` otherwise.
    pub fn skill_class(self) -> String {
        if self == Self::BASE {
            "skill".to_string()
        } else {
            format!("skill{}", self.0)
        }
    }

    pub fn section_modifier(self) -> &'static str {
        match self.0 {
            2 => "two",
            3 => "three",
            4 => "four",
            5 => "five",
            _ => "",
        }
    }
}

impl Default for SkillVariant {
    fn default() -> Self {
        Self::BASE
    }
}

impl TryFrom<u8> for SkillVariant {
    type Error = SiteError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SkillVariant> for u8 {
    fn from(variant: SkillVariant) -> Self {
        variant.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub variant: SkillVariant,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UxProject {
    pub title: String,
    pub date: String,
    pub tools: Vec<String>,
    pub description: String,
    /// 站內路由路徑，而非外部連結
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationStat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub dates: String,
    #[serde(default = "default_education_icon")]
    pub icon: String,
    #[serde(default)]
    pub stats: Vec<EducationStat>,
    #[serde(default)]
    pub coursework: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
}

fn default_education_icon() -> String {
    "🎓".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub resume_url: String,
    pub about: Vec<String>,
    pub image: ImageRef,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaseStudyBlock {
    Heading { text: String },
    Paragraph { text: String },
    Image { src: String, alt: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub path: String,
    pub title: String,
    pub subtitle: String,
    pub blocks: Vec<CaseStudyBlock>,
}

/// 整個網站的靜態內容。清單項目以 `Arc` 保存，讓卡片快取可以用參考比對。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
    #[serde(default)]
    pub experiences: Vec<Arc<Experience>>,
    #[serde(default)]
    pub projects: Vec<Arc<Project>>,
    #[serde(default)]
    pub skill_categories: Vec<Arc<SkillCategory>>,
    #[serde(default)]
    pub ux_projects: Vec<Arc<UxProject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<CaseStudy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Type,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Type,
        FormField::Subject,
        FormField::Message,
    ];

    /// The `name` attribute of the matching form control.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Type => "type",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

impl FromStr for FormField {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| SiteError::UnknownFormField { name: s.to_string() })
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactType {
    Feedback,
    Opportunity,
    Question,
}

impl ContactType {
    pub const ALL: [ContactType; 3] = [
        ContactType::Feedback,
        ContactType::Opportunity,
        ContactType::Question,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactType::Feedback => "feedback",
            ContactType::Opportunity => "opportunity",
            ContactType::Question => "question",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactType::Feedback => "Feedback",
            ContactType::Opportunity => "Opportunity",
            ContactType::Question => "Question",
        }
    }
}

impl FromStr for ContactType {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        ContactType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SiteError::InvalidFormValue {
                field: FormField::Type.name().to_string(),
                value: s.to_string(),
            })
    }
}

/// 聯絡表單的五個受控欄位，初始皆為空字串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub subject: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Type => &self.r#type,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Type => &mut self.r#type,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// 一個已序列化的頁面，`file_path` 相對於輸出目錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub route_path: String,
    pub file_path: String,
    pub html: String,
}

#[derive(Debug, Clone, Default)]
pub struct RenderedSite {
    pub pages: Vec<RenderedPage>,
    pub content_json: Option<String>,
}
