//!
//! src/backend/mod.rs
//! Backend 层：启动时读取的外部资源
//!
//!     mod config_service;         // JSON 配置
//!     mod translation_service;    // 内置翻译表 + 覆盖文件

mod config_service;
mod translation_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use translation_service::load_translations;
