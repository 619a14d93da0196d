//! Content registry: the typed records that drive every rendered section.

pub mod builtin;

use crate::domain::model::SiteContent;
use crate::navigation::Route;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_url, Validate,
};

pub use builtin::builtin;

impl SiteContent {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: SiteContent =
            toml::from_str(content).map_err(|e| SiteError::ConfigValidationError {
                field: "content".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        parsed.validate()?;
        Ok(parsed)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Validate for SiteContent {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("profile.name", &self.profile.name)?;
        validate_url("profile.resume_url", &self.profile.resume_url)?;

        for (i, experience) in self.experiences.iter().enumerate() {
            validate_non_empty_string(&format!("experiences[{}].title", i), &experience.title)?;
            validate_non_empty_list(&format!("experiences[{}].points", i), &experience.points)?;
        }

        for (i, project) in self.projects.iter().enumerate() {
            validate_non_empty_string(&format!("projects[{}].title", i), &project.title)?;
            if let Some(link) = &project.link {
                validate_url(&format!("projects[{}].link", i), link)?;
            }
        }

        for (i, category) in self.skill_categories.iter().enumerate() {
            validate_non_empty_list(&format!("skill_categories[{}].skills", i), &category.skills)?;
        }

        for (i, ux) in self.ux_projects.iter().enumerate() {
            let field = format!("ux_projects[{}].link", i);
            match Route::from_path(&ux.link) {
                None => {
                    return Err(SiteError::InvalidContentError {
                        field,
                        value: ux.link.clone(),
                        reason: "Link does not resolve to a known route".to_string(),
                    })
                }
                Some(Route::CaseStudy) if self.case_study.is_none() => {
                    return Err(SiteError::InvalidContentError {
                        field,
                        value: ux.link.clone(),
                        reason: "Links to the case study page but no case study is defined"
                            .to_string(),
                    })
                }
                Some(_) => {}
            }
        }

        if let Some(case_study) = &self.case_study {
            if Route::from_path(&case_study.path) != Some(Route::CaseStudy) {
                return Err(SiteError::InvalidContentError {
                    field: "case_study.path".to_string(),
                    value: case_study.path.clone(),
                    reason: format!("Case study must live at {}", Route::CaseStudy.path()),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Experience, Project};
    use std::sync::Arc;

    const MINIMAL: &str = r#"
[profile]
name = "Jane Doe"
resume_url = "https://example.com/resume.pdf"
about = ["Hello there."]
footer = "© 2025 Jane Doe"

[profile.image]
src = "/assets/me.jpg"
alt = "Profile"

[[experiences]]
title = "Engineer"
company = "Acme"
period = "(2024)"
points = ["Shipped things."]

[[projects]]
title = "No Link Project"
description = "Private repository."

[[skill_categories]]
title = "Languages"
variant = 2
skills = ["Rust"]
"#;

    #[test]
    fn test_builtin_content_is_valid() {
        let content = builtin();
        assert!(content.validate().is_ok());
        assert_eq!(content.experiences.len(), 3);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.skill_categories.len(), 5);
        assert_eq!(content.ux_projects[0].link, Route::CaseStudy.path());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let content = SiteContent::from_toml_str(MINIMAL).unwrap();
        assert_eq!(content.profile.name, "Jane Doe");
        assert!(content.projects[0].link.is_none());
        assert_eq!(content.skill_categories[0].variant.get(), 2);
        assert!(content.ux_projects.is_empty());
        assert!(content.education.is_none());
    }

    #[test]
    fn test_rejects_out_of_range_variant() {
        let toml = MINIMAL.replace("variant = 2", "variant = 7");
        assert!(SiteContent::from_toml_str(&toml).is_err());
    }

    #[test]
    fn test_rejects_empty_points_and_skills() {
        let mut content = builtin();
        content.experiences.push(Arc::new(Experience {
            title: "Empty".to_string(),
            company: "Nowhere".to_string(),
            period: "-".to_string(),
            points: vec![],
        }));
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("experiences[3].points"));

        let toml = MINIMAL.replace(r#"skills = ["Rust"]"#, "skills = []");
        assert!(SiteContent::from_toml_str(&toml).is_err());
    }

    #[test]
    fn test_rejects_bad_project_link() {
        let mut content = builtin();
        content.projects.push(Arc::new(Project {
            title: "Broken".to_string(),
            description: "x".to_string(),
            link: Some("not a url".to_string()),
        }));
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_ux_link_must_resolve() {
        let mut content = builtin();
        let mut ux = (*content.ux_projects[0]).clone();
        ux.link = "/projects/unknown".to_string();
        content.ux_projects = vec![Arc::new(ux)];
        assert!(content.validate().is_err());

        let mut content = builtin();
        content.case_study = None;
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_json_export_round_trips() {
        let content = builtin();
        let json = content.to_json().unwrap();
        let back: SiteContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }
}
