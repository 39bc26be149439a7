//! 弹窗组件

use lowcode_showcase_core::Language;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::state::Modal;
use crate::model::App;
use crate::util::text;

/// 帮助弹窗的条目：按键, 说明 key
pub(crate) const HELP_ENTRIES: &[(&str, &str)] = &[
    ("1-5", "helpSections"),
    ("←/→", "helpSwitchSection"),
    ("Home/End", "helpFirstLast"),
    ("Tab", "helpToggleFocus"),
    ("Esc", "helpBack"),
    ("↑/↓ PgUp/PgDn", "helpScroll"),
    ("↑/↓", "helpPalette"),
    ("Space", "helpPickUp"),
    ("Enter", "helpDrop"),
    ("Alt+L", "helpLanguage"),
    ("[ / ]", "helpCycleLanguage"),
    ("Alt+T", "helpTheme"),
    ("? / Alt+H", "helpShowHelp"),
    ("q / Ctrl+C", "helpQuit"),
];

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::LanguagePicker { selected } => render_language_picker(app, frame, *selected),
        Modal::Help => render_help(app, frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block<'a>(app: &'a App, title_key: &'a str) -> Block<'a> {
    let colors = app.theme.colors();
    Block::default()
        .title(format!(" {} ", app.t(title_key)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(colors.border_style(true))
}

/// 语言选择
fn render_language_picker(app: &App, frame: &mut Frame, selected: usize) {
    let colors = app.theme.colors();
    let current = app.view.language();

    let lines: Vec<Line> = Language::all()
        .iter()
        .enumerate()
        .map(|(i, language)| {
            let marker = if *language == current { "● " } else { "  " };
            let label = format!(" {marker}{} ({})", language.display_name(), language.code());
            let style = if i == selected {
                colors.selected()
            } else {
                Style::default().fg(colors.fg)
            };
            Line::from(Span::styled(label, style))
        })
        .collect();

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(34, height, frame.area());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(modal_block(app, "languagePickerTitle")),
        area,
    );
}

/// 快捷键帮助
fn render_help(app: &App, frame: &mut Frame) {
    let colors = app.theme.colors();
    let key_width = HELP_ENTRIES
        .iter()
        .map(|(key, _)| text::width(key))
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .map(|(key, desc_key)| {
            Line::from(vec![
                Span::styled(format!(" {}  ", text::pad_right(key, key_width)), colors.title()),
                Span::styled(app.t(desc_key), Style::default().fg(colors.fg)),
            ])
        })
        .collect();

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(64, height, frame.area());

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(modal_block(app, "helpTitle")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use lowcode_showcase_core::TranslationTable;

    #[test]
    fn test_help_keys_exist_in_english() {
        let table = TranslationTable::builtin();
        for (_, key) in HELP_ENTRIES {
            assert!(table.contains(Language::En, key), "missing '{key}'");
        }
        assert!(table.contains(Language::En, "helpTitle"));
        assert!(table.contains(Language::En, "languagePickerTitle"));
    }

    #[test]
    fn test_help_lists_navigation_and_help_keys() {
        let keys: Vec<&str> = HELP_ENTRIES.iter().map(|(key, _)| *key).collect();
        for expected in ["Esc", "? / Alt+H", "Home/End", "Tab", "Alt+L", "q / Ctrl+C"] {
            assert!(keys.contains(&expected), "help is missing {expected}");
        }
    }

    #[test]
    fn test_centered_rect_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(64, 13, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 10));

        let rect = centered_rect(10, 4, area);
        assert_eq!(rect, Rect::new(5, 3, 10, 4));
    }
}
