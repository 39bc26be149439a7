//! 页头：标题、副标题、当前语言

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::util::text;

/// 渲染页头
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let colors = app.theme.colors();

    let language = format!(
        " {}: {} ▾ ",
        app.t("languageLabel"),
        app.view.language().display_name()
    );
    let language_width = u16::try_from(text::width(&language)).unwrap_or(u16::MAX);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(language_width)])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            app.t("title"),
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(app.t("subtitle"), colors.muted_text())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, columns[0]);

    let picker = Paragraph::new(Line::from(vec![Span::styled(
        language,
        Style::default().fg(colors.selected_fg).bg(colors.selected_bg),
    )]))
    .alignment(Alignment::Right);
    frame.render_widget(picker, columns[1]);
}
