//! 翻译表加载

use lowcode_showcase_core::TranslationTable;

use super::AppConfig;

/// 内置文案，叠加配置中的覆盖文件；覆盖文件出错只记日志
///
/// 加载成功的日志由 `TranslationTable::load_file` 输出
pub fn load_translations(config: &AppConfig) -> TranslationTable {
    let mut table = TranslationTable::builtin();

    if let Some(path) = &config.translations {
        match TranslationTable::load_file(path) {
            Ok(overlay) => table.merge(overlay),
            Err(e) => tracing::warn!("Ignoring translation file: {}", e),
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use lowcode_showcase_core::Language;

    #[test]
    fn test_builtin_without_override() {
        let table = load_translations(&AppConfig::default());
        assert_eq!(table.resolve(Language::En, "title"), "Low-Code Development Platform");
    }

    #[test]
    fn test_override_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        std::fs::write(&path, r#"{ "en": { "subtitle": "Custom subtitle" } }"#).unwrap();

        let config = AppConfig {
            translations: Some(path),
            ..AppConfig::default()
        };
        let table = load_translations(&config);
        assert_eq!(table.resolve(Language::En, "subtitle"), "Custom subtitle");
        assert_eq!(table.resolve(Language::En, "title"), "Low-Code Development Platform");
    }

    #[test]
    fn test_broken_override_keeps_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            translations: Some(dir.path().join("missing.json")),
            ..AppConfig::default()
        };
        let table = load_translations(&config);
        assert_eq!(table.resolve(Language::En, "title"), "Low-Code Development Platform");
    }
}
