use crate::domain::model::{FormState, RenderedSite, SiteContent};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn site_title(&self) -> &str;
    fn stylesheet(&self) -> &str;
    fn emit_json(&self) -> bool;
    /// 外部內容檔路徑；未設定時使用內建內容
    fn content_file(&self) -> Option<&str>;
}

#[async_trait]
pub trait SitePipeline: Send + Sync {
    async fn extract(&self) -> Result<SiteContent>;
    async fn transform(&self, content: SiteContent) -> Result<RenderedSite>;
    async fn load(&self, site: RenderedSite) -> Result<String>;
}

/// Where a contact form submission goes. Returns the status text shown to the visitor.
pub trait SubmissionSink {
    fn submit(&self, form: &FormState) -> String;
}
