//! 文件日志
//!
//! 终端被 UI 占用，日志只能写文件。`RUST_LOG` 优先于配置中的 `log_level`。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::AppConfig;

/// 默认日志文件：`<cache dir>/lowcode-showcase/showcase.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("lowcode-showcase").join("showcase.log"))
}

/// 初始化 tracing；日志文件无法打开时静默关闭日志
pub fn init_logging(config: &AppConfig) {
    let Some(path) = config.log_file.clone().or_else(default_log_path) else {
        return;
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let initialized = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_target(false)
                .with_ansi(false),
        )
        .with(filter)
        .try_init();

    if initialized.is_ok() {
        tracing::debug!("Logging to {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_under_app_dir() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("lowcode-showcase/showcase.log"));
        }
    }
}
