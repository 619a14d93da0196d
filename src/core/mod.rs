pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{RenderedPage, RenderedSite, SiteContent};
pub use crate::domain::ports::{ConfigProvider, SitePipeline, Storage, SubmissionSink};
pub use crate::utils::error::Result;
