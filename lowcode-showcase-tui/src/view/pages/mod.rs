//! 分区内容面板

mod development;
mod section;

use lowcode_showcase_core::{render_section, Section};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

use crate::model::App;

/// 渲染当前分区
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let colors = app.theme.colors();
    let view = render_section(app.view.section(), &app.translator());

    let block = Block::default()
        .title(Span::styled(format!(" {} ", view.title), colors.title()))
        .borders(Borders::ALL)
        .border_style(colors.border_style(app.focus.is_content()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match view.section {
        Section::Development => development::render(app, frame, inner, &view),
        Section::Overview | Section::Testing | Section::Eoffice | Section::Security => {
            section::render(app, frame, inner, &view);
        }
    }
}
