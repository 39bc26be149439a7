//! 状态栏

use lowcode_showcase_core::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::Modal;
use crate::model::{App, FocusPanel};
use crate::util::text;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let colors = app.theme.colors();
    let separator = Span::styled(" │ ", Style::default().fg(colors.muted));

    // 快捷键提示
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in get_hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(separator.clone());
        }
        spans.push(Span::styled(key, colors.hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, colors.hint_desc()));
    }

    // 状态消息固定在右侧，不被提示挤掉
    let message = app
        .status_message
        .as_deref()
        .map(|msg| format!(" {msg} "))
        .unwrap_or_default();
    let message_width = u16::try_from(text::width(&message)).unwrap_or(u16::MAX);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(message_width)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(spans)).style(colors.statusbar()), columns[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(message, Style::default().fg(colors.lit_fg).bg(colors.warning))),
        columns[1],
    );
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, String)> {
    let hint = |key: &'static str, desc_key: &str| (key, app.t(desc_key).to_string());

    if let Some(modal) = &app.modal.active {
        return match modal {
            Modal::LanguagePicker { .. } => vec![
                hint("↑↓", "hintSelect"),
                hint("Enter", "hintConfirm"),
                hint("Esc", "hintClose"),
            ],
            Modal::Help => vec![hint("Esc", "hintClose")],
        };
    }

    let mut hints = vec![hint("1-5", "hintSection"), hint("Tab", "hintFocus")];

    match app.focus {
        FocusPanel::Tabs => {
            hints.push(hint("←→", "hintSection"));
        }
        FocusPanel::Content if app.view.section() == Section::Development => {
            hints.push(hint("↑↓", "hintSelect"));
            hints.push(hint("Space", "hintPickUp"));
            hints.push(hint("Enter", "hintDrop"));
            hints.push(hint("PgUp/PgDn", "hintScroll"));
        }
        FocusPanel::Content => {
            hints.push(hint("↑↓", "hintScroll"));
        }
    }

    hints.push(hint("[ ]", "hintLanguage"));
    hints.push(hint("?", "hintHelp"));
    hints.push(hint("q", "hintQuit"));
    hints
}

/// 状态栏用到的所有文案 key
#[cfg(test)]
pub(crate) const HINT_KEYS: &[&str] = &[
    "hintSection",
    "hintFocus",
    "hintLanguage",
    "hintScroll",
    "hintSelect",
    "hintPickUp",
    "hintDrop",
    "hintConfirm",
    "hintClose",
    "hintHelp",
    "hintQuit",
];
