use anyhow::Context;
use clap::Parser;
use portfolio_spa::core::ConfigProvider;
use portfolio_spa::utils::error::{ErrorSeverity, SiteError};
use portfolio_spa::utils::{logger, validation::Validate};
use portfolio_spa::{CliConfig, LocalStorage, SiteConfig, SiteEngine, StaticSitePipeline};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting portfolio-spa");
    if cli.verbose > 0 {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(config_path) => {
            tracing::info!("📁 Loading configuration from: {}", config_path);
            let mut config = SiteConfig::from_file(&config_path)
                .with_context(|| format!("Failed to load config file '{}'", config_path))?;

            let config_dir = Path::new(&config_path)
                .parent()
                .unwrap_or_else(|| Path::new("."));
            config.resolve_content_path(config_dir);

            // 命令列參數覆蓋設定檔
            cli.apply_overrides(&mut config);

            build(config, cli.dry_run).await
        }
        None => {
            let dry_run = cli.dry_run;
            build(cli, dry_run).await
        }
    }
}

async fn build<C>(config: C, dry_run: bool) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        report_and_exit(&e);
    }
    tracing::info!("✅ Configuration validated");

    let storage = LocalStorage::new(config.output_path());
    let pipeline = StaticSitePipeline::new(storage, config);
    let engine = SiteEngine::new(pipeline);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        match engine.render().await {
            Ok(site) => {
                for page in &site.pages {
                    println!("{:<28} -> {} ({} bytes)", page.route_path, page.file_path, page.html.len());
                }
                if site.content_json.is_some() {
                    println!("{:<28} -> content.json", "(content registry)");
                }
            }
            Err(e) => report_and_exit(&e),
        }
        return Ok(());
    }

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Site build completed successfully!");
            println!("✅ Site build completed successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => report_and_exit(&e),
    }
}

fn report_and_exit(e: &SiteError) -> ! {
    tracing::error!(
        "❌ Site build failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
