use crate::content;
use crate::core::{ConfigProvider, RenderedPage, RenderedSite, SiteContent, SitePipeline, Storage};
use crate::navigation::Route;
use crate::pages::shell::{self, PageView};
use crate::pages::AppWrapper;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub const CONTENT_JSON_FILE: &str = "content.json";

pub struct StaticSitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> StaticSitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn page_title(&self, route: Route, content: &SiteContent) -> String {
        match (route, &content.case_study) {
            (Route::CaseStudy, Some(case_study)) => {
                format!("{} | {}", case_study.title, self.config.site_title())
            }
            _ => self.config.site_title().to_string(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> SitePipeline for StaticSitePipeline<S, C> {
    async fn extract(&self) -> Result<SiteContent> {
        let site_content = match self.config.content_file() {
            Some(path) => {
                tracing::debug!("Loading content from: {}", path);
                let raw = tokio::fs::read_to_string(path).await?;
                SiteContent::from_toml_str(&raw)?
            }
            None => {
                tracing::debug!("Using built-in content");
                content::builtin()
            }
        };

        site_content.validate()?;
        tracing::debug!(
            "Content: {} experiences, {} projects, {} skill categories, {} case studies",
            site_content.experiences.len(),
            site_content.projects.len(),
            site_content.skill_categories.len(),
            site_content.ux_projects.len()
        );
        Ok(site_content)
    }

    async fn transform(&self, content: SiteContent) -> Result<RenderedSite> {
        let mut views = Vec::new();

        for route in Route::ALL {
            if route == Route::CaseStudy && content.case_study.is_none() {
                tracing::debug!("No case study content, skipping {}", route.path());
                continue;
            }

            let app = AppWrapper::new(content.clone(), route.path());
            views.push(PageView {
                route,
                title: self.page_title(route, &content),
                body: app.document().root().clone(),
            });
        }

        // 每個路由的輸出檔都內嵌所有頁面，瀏覽器換頁時不必重新載入
        let mut pages = Vec::with_capacity(views.len());
        for view in &views {
            let html = shell::document(self.config.stylesheet(), &views, view.route)?;
            tracing::debug!("Rendered {} ({} bytes)", view.route.path(), html.len());

            pages.push(RenderedPage {
                route_path: view.route.path().to_string(),
                file_path: view.route.file_path().to_string(),
                html,
            });
        }

        let content_json = if self.config.emit_json() {
            Some(content.to_json()?)
        } else {
            None
        };

        Ok(RenderedSite {
            pages,
            content_json,
        })
    }

    async fn load(&self, site: RenderedSite) -> Result<String> {
        for page in &site.pages {
            self.storage
                .write_file(&page.file_path, page.html.as_bytes())
                .await?;
            tracing::debug!("Wrote {}", page.file_path);
        }

        if let Some(json) = &site.content_json {
            self.storage
                .write_file(CONTENT_JSON_FILE, json.as_bytes())
                .await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
