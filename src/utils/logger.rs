use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 每張卡片重繪都會記一筆，只在 -vv 時打開
const MEMO_TARGET: &str = "portfolio_spa::components::memo";

/// `-v` 次數對應的預設過濾規則；設定 `RUST_LOG` 時以環境變數為準
pub fn filter_directives(verbosity: u8) -> String {
    match verbosity {
        0 => "portfolio_spa=info".to_string(),
        1 => format!("portfolio_spa=debug,{}=info,info", MEMO_TARGET),
        _ => "portfolio_spa=trace,info".to_string(),
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(verbosity)))
}

pub fn init_cli_logger(verbosity: u8) {
    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(
            tracing_subscriber::fmt::layer()
                // 詳細模式下顯示模組路徑，方便對照過濾規則
                .with_target(verbosity > 0)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON 格式日誌，方便 CI 收集建置紀錄
pub fn init_json_logger(verbosity: u8) {
    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives_by_verbosity() {
        assert_eq!(filter_directives(0), "portfolio_spa=info");

        let verbose = filter_directives(1);
        assert!(verbose.starts_with("portfolio_spa=debug"));
        assert!(verbose.contains("portfolio_spa::components::memo=info"));

        assert_eq!(filter_directives(2), filter_directives(5));
        assert!(filter_directives(2).starts_with("portfolio_spa=trace"));
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        for verbosity in 0..3 {
            assert!(EnvFilter::try_new(filter_directives(verbosity)).is_ok());
        }
    }
}
