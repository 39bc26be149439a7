//! 配置服务

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use lowcode_showcase_core::{HighlightConfig, Language};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "LOWCODE_SHOWCASE_CONFIG";

/// 应用配置，所有字段均可省略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 启动语言代码，如 `en`、`hi`
    pub language: String,
    pub theme: Theme,
    /// `RUST_LOG` 未设置时使用的过滤规则
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    /// 覆盖内置文案的翻译文件
    pub translations: Option<PathBuf>,
    pub highlight: HighlightConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
            theme: Theme::Dark,
            log_level: "info".to_string(),
            log_file: None,
            translations: None,
            highlight: HighlightConfig::default(),
        }
    }
}

impl AppConfig {
    /// 启动语言，无法识别时回退到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            tracing::warn!("Unknown language '{}' in config, using default", self.language);
            Language::default()
        })
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地 JSON 配置服务（只读）
#[derive(Debug, Clone)]
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    /// `LOWCODE_SHOWCASE_CONFIG` 优先，否则 `<config dir>/lowcode-showcase/config.json`
    pub fn from_env() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("lowcode-showcase").join("config.json")));
        Self { path }
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let Some(path) = self.path.as_deref() else {
            return Ok(AppConfig::default());
        };

        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(path: impl Into<PathBuf>) -> LocalConfigService {
        LocalConfigService {
            path: Some(path.into()),
        }
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path().join("absent.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "language": "hi", "theme": "light", "highlight": { "interval_ms": 3000 } }"#,
        )
        .unwrap();

        let config = service(&path).load().unwrap();
        assert_eq!(config.language(), Language::Hi);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.highlight.interval_ms, 3000);
        assert_eq!(config.highlight.stagger_ms, 1500);
        assert!(config.highlight.enabled);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = service(&path).load().unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let config = AppConfig {
            language: "xx".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.language(), Language::En);
    }
}
