//! 分区标签栏

use lowcode_showcase_core::Section;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::model::App;

/// 渲染标签栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let colors = app.theme.colors();

    let titles: Vec<Line> = Section::all()
        .iter()
        .map(|section| Line::from(format!("{} {}", section.index() + 1, app.t(section.nav_key()))))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(colors.border_style(app.focus.is_tabs())),
        )
        .select(app.view.section().index())
        .style(Style::default().fg(colors.fg))
        .highlight_style(colors.selected())
        .divider(Span::styled("│", colors.muted_text()));

    frame.render_widget(tabs, area);
}
