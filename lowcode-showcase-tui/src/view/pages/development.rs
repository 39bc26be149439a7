//! 开发分区：组件面板 → 画布，下方沿用通用内容块

use lowcode_showcase_core::content::{BlockView, DragDropView, SectionView};
use lowcode_showcase_core::render_canvas;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::util::text;

use super::section;

/// 组件面板与画布的高度：边框 2 + 组件 3 + 空行 1 + 拖动提示 1
const PANEL_HEIGHT: u16 = 7;

/// 渲染开发分区
pub fn render(app: &App, frame: &mut Frame, area: Rect, view: &SectionView) {
    let Some(demo) = view.blocks.iter().find_map(|block| match block {
        BlockView::DragDrop(demo) => Some(demo),
        _ => None,
    }) else {
        section::render(app, frame, area, view);
        return;
    };

    let colors = app.theme.colors();
    let description = text::wrap(&demo.description, usize::from(area.width.saturating_sub(2)));
    let intro_height = u16::try_from(description.len() + 1).unwrap_or(u16::MAX);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(intro_height), // 标题 + 说明
            Constraint::Length(PANEL_HEIGHT), // 面板 + 画布
            Constraint::Length(1),
            Constraint::Min(0), // 其余内容块
        ])
        .split(area);

    // 标题 + 说明
    let mut intro = vec![Line::from(vec![
        Span::raw("  "),
        Span::styled(demo.heading.clone(), colors.title().add_modifier(Modifier::UNDERLINED)),
    ])];
    intro.extend(
        description
            .into_iter()
            .map(|row| Line::from(vec![Span::raw("  "), Span::styled(row, colors.muted_text())])),
    );
    frame.render_widget(Paragraph::new(intro), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // 组件面板
            Constraint::Length(5),      // 箭头
            Constraint::Min(10),        // 画布
        ])
        .split(rows[1]);

    render_palette(app, frame, columns[0], demo);
    render_arrow(app, frame, columns[1]);
    render_canvas_panel(app, frame, columns[2], demo);

    section::render(app, frame, rows[3], view);
}

/// 组件面板
fn render_palette(app: &App, frame: &mut Frame, area: Rect, demo: &DragDropView) {
    let colors = app.theme.colors();
    let focused = app.focus.is_content();

    let mut lines: Vec<Line> = demo
        .palette
        .iter()
        .enumerate()
        .map(|(i, (_, label))| {
            let selected = i == app.palette.selected_index();
            let marker = if selected { "▸ " } else { "  " };
            let style = match (selected, focused) {
                (true, true) => colors.selected(),
                (true, false) => colors.title(),
                _ => Style::default().fg(colors.fg),
            };
            Line::from(Span::styled(format!("{marker}{label}"), style))
        })
        .collect();

    if let Some(component) = app.view.drag_payload() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{} {}", app.t("draggingLabel"), app.t(component.id())),
            Style::default().fg(colors.warning).add_modifier(Modifier::BOLD),
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", demo.components_label))
        .borders(Borders::ALL)
        .border_style(colors.border_style(focused));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 面板与画布之间的箭头，拿着组件时点亮
fn render_arrow(app: &App, frame: &mut Frame, area: Rect) {
    let colors = app.theme.colors();
    let style = if app.view.drag_payload().is_some() {
        Style::default().fg(colors.warning).add_modifier(Modifier::BOLD)
    } else {
        colors.muted_text()
    };

    let mut lines = vec![Line::default(); usize::from(PANEL_HEIGHT / 2)];
    lines.push(Line::from(Span::styled("→", style)));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// 画布：空时显示提示，否则显示最近放置的、放得下的那些
fn render_canvas_panel(app: &App, frame: &mut Frame, area: Rect, demo: &DragDropView) {
    let colors = app.theme.colors();

    let border_style = if app.view.drag_payload().is_some() {
        Style::default().fg(colors.warning)
    } else {
        colors.border_style(false)
    };
    let block = Block::default()
        .title(format!(" {} ", demo.canvas_label))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.view.dropped().is_empty() {
        let hint = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(demo.empty_hint.clone(), colors.muted_text())),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    }

    let entries = render_canvas(app.view.dropped(), &app.translator());
    let skip = entries.len().saturating_sub(usize::from(inner.height));
    let lines: Vec<Line> = entries
        .into_iter()
        .skip(skip)
        .map(|entry| {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(entry, Style::default().fg(colors.success)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
