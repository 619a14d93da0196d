use crate::core::{RenderedSite, SitePipeline};
use crate::utils::error::Result;

pub struct SiteEngine<P: SitePipeline> {
    pipeline: P,
}

impl<P: SitePipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 只載入與渲染，不寫檔（dry run 使用）
    pub async fn render(&self) -> Result<RenderedSite> {
        tracing::info!("Loading content...");
        let content = self.pipeline.extract().await?;

        tracing::info!("Rendering pages...");
        let site = self.pipeline.transform(content).await?;
        tracing::info!("Rendered {} pages", site.pages.len());

        Ok(site)
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting site build...");
        let site = self.render().await?;

        tracing::info!("Writing pages...");
        let output_path = self.pipeline.load(site).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
