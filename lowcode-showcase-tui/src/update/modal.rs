//! 弹窗

use lowcode_showcase_core::Language;

use crate::message::ModalMessage;
use crate::model::state::Modal;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::SelectPrevious | ModalMessage::SelectNext => {
            if let Some(Modal::LanguagePicker { selected }) = app.modal.active.as_mut() {
                let len = Language::all().len();
                *selected = if msg == ModalMessage::SelectNext {
                    (*selected + 1) % len
                } else {
                    (*selected + len - 1) % len
                };
            }
        }

        ModalMessage::Confirm => {
            let picked = match app.modal.active {
                Some(Modal::LanguagePicker { selected }) => Language::all().get(selected).copied(),
                _ => None,
            };
            app.modal.close();

            if let Some(language) = picked {
                super::set_language(app, language);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_wraps() {
        let mut app = App::default();
        app.modal.show_language_picker(Language::En);

        update(&mut app, ModalMessage::SelectPrevious);
        assert_eq!(app.modal.active, Some(Modal::LanguagePicker { selected: 5 }));
        update(&mut app, ModalMessage::SelectNext);
        assert_eq!(app.modal.active, Some(Modal::LanguagePicker { selected: 0 }));
    }

    #[test]
    fn test_close_keeps_language() {
        let mut app = App::default();
        app.modal.show_language_picker(Language::En);
        update(&mut app, ModalMessage::SelectNext);
        update(&mut app, ModalMessage::Close);

        assert_eq!(app.view.language(), Language::En);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_confirm_on_help_just_closes() {
        let mut app = App::default();
        app.modal.show_help();
        update(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
        assert_eq!(app.view.language(), Language::En);
    }
}
