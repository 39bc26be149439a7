//!
//! src/update/mod.rs
//! Update 层：唯一修改 App 的地方
//!
//!     mod navigation;     // 分区切换
//!     mod content;        // 滚动、组件面板、拖放
//!     mod modal;          // 语言选择、帮助

mod content;
mod modal;
mod navigation;

use lowcode_showcase_core::Language;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else if app.focus.is_content() {
                app.focus = app.focus.toggle();
            }
            app.clear_status();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ShowLanguagePicker => {
            app.modal.show_language_picker(app.view.language());
        }

        AppMessage::NextLanguage => {
            set_language(app, app.view.language().next());
        }

        AppMessage::PrevLanguage => {
            set_language(app, app.view.language().prev());
        }

        AppMessage::ToggleTheme => {
            app.theme = app.theme.toggle();
            tracing::debug!("Theme switched to {:?}", app.theme);
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Highlight(event) => {
            app.highlight.apply(event);
        }

        AppMessage::Noop => {}
    }
}

/// 切换语言并在状态栏提示
fn set_language(app: &mut App, language: Language) {
    app.view.select_language(language);
    tracing::info!("Language switched to {}", language);

    let message = format!("{} {}", app.t("statusLanguageChanged"), language.display_name());
    app.set_status(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ContentMessage, ModalMessage, NavigationMessage};
    use crate::view::theme::Theme;
    use lowcode_showcase_core::{Component, HighlightEvent, Section};

    #[test]
    fn test_status_keys_exist_in_english() {
        let app = App::default();
        for key in [
            "title",
            "subtitle",
            "languageLabel",
            "draggingLabel",
            "addedComponent",
            "statusLanguageChanged",
            "statusNothingToDrop",
        ] {
            assert!(app.translations.contains(Language::En, key), "missing '{key}'");
        }
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_language_change_updates_view_and_status() {
        let mut app = App::default();
        update(&mut app, AppMessage::NextLanguage);

        assert_eq!(app.view.language(), Language::Hi);
        assert_eq!(app.t("title"), "लो-कोड डेवलपमेंट प्लेटफ़ॉर्म");
        assert!(app.status_message.as_deref().is_some_and(|s| s.ends_with("हिंदी")));

        update(&mut app, AppMessage::PrevLanguage);
        assert_eq!(app.view.language(), Language::En);
    }

    #[test]
    fn test_select_language_is_idempotent() {
        let mut once = App::default();
        set_language(&mut once, Language::Ta);
        let mut twice = App::default();
        set_language(&mut twice, Language::Ta);
        set_language(&mut twice, Language::Ta);

        assert_eq!(once.view, twice.view);
    }

    #[test]
    fn test_go_back_closes_modal_then_returns_to_tabs() {
        let mut app = App::default();
        update(&mut app, AppMessage::ToggleFocus);
        update(&mut app, AppMessage::ShowHelp);

        // 弹窗打开时 Tab 不切换焦点
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_content());

        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
        assert!(app.focus.is_content());

        update(&mut app, AppMessage::GoBack);
        assert!(app.focus.is_tabs());
    }

    #[test]
    fn test_theme_toggle() {
        let mut app = App::default();
        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.theme, Theme::Light);
        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.theme, Theme::Dark);
    }

    #[test]
    fn test_highlight_events() {
        let mut app = App::default();
        update(&mut app, AppMessage::Highlight(HighlightEvent::On(1)));
        assert!(app.highlight.is_lit(1));
        update(&mut app, AppMessage::Highlight(HighlightEvent::Off(1)));
        assert!(!app.highlight.is_lit(1));
    }

    #[test]
    fn test_full_drag_and_drop_session() {
        let mut app = App::default();
        update(&mut app, AppMessage::Navigation(NavigationMessage::Select(Section::Development)));
        update(&mut app, AppMessage::ToggleFocus);

        // Form
        update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
        update(&mut app, AppMessage::Content(ContentMessage::BeginDrag));
        update(&mut app, AppMessage::Content(ContentMessage::CompleteDrop));
        // Table
        update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
        update(&mut app, AppMessage::Content(ContentMessage::BeginDrag));
        update(&mut app, AppMessage::Content(ContentMessage::CompleteDrop));

        assert_eq!(app.view.dropped(), &[Component::Form, Component::Table]);
        assert_eq!(app.view.drag_payload(), None);
    }

    #[test]
    fn test_language_picker_flow() {
        let mut app = App::default();
        update(&mut app, AppMessage::ShowLanguagePicker);
        update(&mut app, AppMessage::Modal(ModalMessage::SelectNext));
        update(&mut app, AppMessage::Modal(ModalMessage::SelectNext));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        assert_eq!(app.view.language(), Language::Bn);
        assert!(!app.modal.is_open());
    }
}
