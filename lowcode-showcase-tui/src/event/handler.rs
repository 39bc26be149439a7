//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use lowcode_showcase_core::Section;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize 等事件由下一轮 draw 自动处理
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 有弹窗打开时，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_ALT.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::ShowLanguagePicker;
    }
    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::PREV_LANGUAGE.matches(&key) {
        return AppMessage::PrevLanguage;
    }
    if DefaultKeymap::NEXT_LANGUAGE.matches(&key) {
        return AppMessage::NextLanguage;
    }

    // 1-5: 直接跳到分区
    if let KeyCode::Char(c @ '1'..='9') = key.code {
        if key.modifiers.is_empty() {
            let index = (c as usize) - ('1' as usize);
            return Section::from_index(index)
                .map_or(AppMessage::Noop, |s| AppMessage::Navigation(NavigationMessage::Select(s)));
        }
    }

    // 根据焦点位置处理按键
    if app.focus.is_tabs() {
        handle_tab_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 标签栏的按键
fn handle_tab_keys(key: KeyEvent) -> AppMessage {
    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Right | KeyCode::Char('l') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        // Enter / ↓: 进入内容面板
        KeyCode::Enter | KeyCode::Down | KeyCode::Char('j') => AppMessage::ToggleFocus,

        _ => AppMessage::Noop,
    }
}

/// 内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if app.view.section() == Section::Development {
        if DefaultKeymap::PICK_UP.matches(&key) {
            return AppMessage::Content(ContentMessage::BeginDrag);
        }
        if DefaultKeymap::DROP.matches(&key) {
            return AppMessage::Content(ContentMessage::CompleteDrop);
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                return AppMessage::Content(ContentMessage::SelectPrevious);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                return AppMessage::Content(ContentMessage::SelectNext);
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::ScrollDown),
        KeyCode::PageUp => AppMessage::Content(ContentMessage::PageUp),
        KeyCode::PageDown => AppMessage::Content(ContentMessage::PageDown),
        KeyCode::Home => AppMessage::Content(ContentMessage::ScrollTop),
        _ => AppMessage::Noop,
    }
}

/// 弹窗的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match modal {
        Modal::Help => match key.code {
            KeyCode::Enter | KeyCode::Char('?' | 'q') => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        Modal::LanguagePicker { .. } => match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::SelectPrevious),
            KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::SelectNext),
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
    }
}
