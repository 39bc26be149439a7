//!
//! src/view/mod.rs
//! View 层：只读 App，绘制一帧
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ header      标题 / 副标题 / 当前语言         │
//!     │ tabs        1 Overview │ 2 Development │ ... │
//!     │ content     当前分区（开发分区含拖放面板）   │
//!     │ statusbar   快捷键提示 + 状态消息            │
//!     └──────────────────────────────────────────────┘
//!     弹窗（语言选择、帮助）最后绘制，覆盖在最上层

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{AppMessage, ContentMessage, NavigationMessage};
    use crate::model::App;
    use crate::update::update;
    use lowcode_showcase_core::{Language, Section};
    use ratatui::{backend::TestBackend, Terminal};

    /// 绘制一帧，按行返回缓冲区文本
    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_overview_frame() {
        let app = App::default();
        let screen = draw(&app, 110, 40);

        assert!(screen.contains("Low-Code Development Platform"));
        assert!(screen.contains("Platform Overview"));
        assert!(screen.contains("Rapid Development"));
        assert!(screen.contains("Security"));
    }

    #[test]
    fn test_every_section_renders() {
        for language in Language::all() {
            for section in Section::all() {
                let mut app = App::default();
                app.view.select_language(*language);
                update(&mut app, AppMessage::Navigation(NavigationMessage::Select(*section)));
                // 窄终端也不应 panic
                draw(&app, 110, 40);
                draw(&app, 30, 12);
            }
        }
    }

    #[test]
    fn test_canvas_shows_dropped_component() {
        let mut app = App::default();
        update(&mut app, AppMessage::Navigation(NavigationMessage::Select(Section::Development)));
        update(&mut app, AppMessage::ToggleFocus);
        update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
        update(&mut app, AppMessage::Content(ContentMessage::BeginDrag));

        let before = draw(&app, 110, 40);
        assert!(before.contains("Drop components here"));
        assert!(before.contains("Dragging: Form"));

        update(&mut app, AppMessage::Content(ContentMessage::CompleteDrop));
        let after = draw(&app, 110, 40);
        assert!(after.contains("Added: Form"));
    }

    #[test]
    fn test_help_modal_drawn_on_top() {
        let mut app = App::default();
        update(&mut app, AppMessage::ShowHelp);
        let screen = draw(&app, 110, 40);
        assert!(screen.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_render_records_scroll_limit() {
        let mut app = App::default();
        update(&mut app, AppMessage::Navigation(NavigationMessage::Select(Section::Security)));
        draw(&app, 60, 20);
        assert!(app.scroll_limit.get() > 0);

        draw(&app, 200, 200);
        assert_eq!(app.scroll_limit.get(), 0);
    }
}
