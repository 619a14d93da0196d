pub mod adapters;
pub mod components;
pub mod config;
pub mod content;
pub mod core;
pub mod domain;
pub mod navigation;
pub mod pages;
pub mod utils;
pub mod view;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SiteConfig;

pub use adapters::LocalStorage;
pub use crate::core::{engine::SiteEngine, pipeline::StaticSitePipeline};
pub use domain::model::SiteContent;
pub use pages::{AppWrapper, EventOutcome, NavAction, UiEvent};
pub use utils::error::{Result, SiteError};
