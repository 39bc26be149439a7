//! 通用内容块：特性卡片、统计、流程图、合规清单、说明段落
//!
//! 所有行在这里按显示宽度预先换行，行数即可滚动的总高度。

use lowcode_showcase_core::content::{BlockView, CardView, Connector, SectionView, StatView, StepView};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::model::state::HighlightState;
use crate::model::App;
use crate::util::text;
use crate::view::theme::ThemeColors;

const INDENT: &str = "  ";

/// 渲染可滚动的内容块
pub fn render(app: &App, frame: &mut Frame, area: Rect, view: &SectionView) {
    if area.width == 0 || area.height == 0 {
        app.scroll_limit.set(0);
        return;
    }

    let colors = app.theme.colors();
    // 右侧留一列给滚动条
    let width = usize::from(area.width.saturating_sub(1));
    let lines = build_lines(view, &app.highlight, &colors, width);

    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let limit = total.saturating_sub(area.height);
    app.scroll_limit.set(limit);
    let scroll = app.scroll.min(limit);

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);

    if limit > 0 {
        let mut state = ScrollbarState::new(usize::from(limit)).position(usize::from(scroll));
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}

/// 把内容块排成行；拖放块由开发分区单独绘制，这里跳过
pub fn build_lines(
    view: &SectionView,
    highlight: &HighlightState,
    colors: &ThemeColors,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in &view.blocks {
        let before = lines.len();

        match block {
            BlockView::Features(cards) => feature_lines(&mut lines, cards, colors, width),
            BlockView::Stats(stats) => stat_lines(&mut lines, stats, colors, width),
            BlockView::Workflow(steps) => {
                flow_lines(&mut lines, steps, Connector::Arrow, Some(highlight), colors, width);
            }
            BlockView::Flow {
                heading,
                steps,
                connector,
            } => {
                if let Some(heading) = heading {
                    heading_lines(&mut lines, heading, colors, width);
                }
                flow_lines(&mut lines, steps, *connector, None, colors, width);
            }
            BlockView::Compliance { heading, items } => {
                heading_lines(&mut lines, heading, colors, width);
                compliance_lines(&mut lines, items, colors, width);
            }
            BlockView::Callout { heading, body } => {
                heading_lines(&mut lines, heading, colors, width);
                paragraph_lines(&mut lines, body, INDENT, Style::default().fg(colors.fg), width);
            }
            BlockView::DragDrop(_) => {}
        }

        if lines.len() > before {
            lines.push(Line::default());
        }
    }

    // 去掉末尾空行
    while lines.last().is_some_and(|line| line.width() == 0) {
        lines.pop();
    }
    lines
}

fn heading_lines(lines: &mut Vec<Line<'static>>, heading: &str, colors: &ThemeColors, width: usize) {
    let style = colors.title().add_modifier(Modifier::UNDERLINED);
    paragraph_lines(lines, heading, INDENT, style, width);
}

/// 缩进后按宽度换行
fn paragraph_lines(lines: &mut Vec<Line<'static>>, body: &str, indent: &'static str, style: Style, width: usize) {
    for row in text::wrap(body, width.saturating_sub(indent.len())) {
        lines.push(Line::from(vec![Span::raw(indent), Span::styled(row, style)]));
    }
}

fn feature_lines(lines: &mut Vec<Line<'static>>, cards: &[CardView], colors: &ThemeColors, width: usize) {
    let title_style = Style::default().fg(colors.accent).add_modifier(Modifier::BOLD);

    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        for (row_index, row) in text::wrap(&card.title, width.saturating_sub(5)).into_iter().enumerate() {
            let mut spans = if row_index == 0 {
                vec![Span::raw(INDENT), Span::raw(card.icon), Span::raw(" ")]
            } else {
                vec![Span::raw("     ")]
            };
            spans.push(Span::styled(row, title_style));
            lines.push(Line::from(spans));
        }
        paragraph_lines(lines, &card.description, "     ", Style::default().fg(colors.fg), width);
    }
}

fn stat_lines(lines: &mut Vec<Line<'static>>, stats: &[StatView], colors: &ThemeColors, width: usize) {
    const SEPARATOR: &str = "   │   ";

    let value_style = Style::default().fg(colors.success).add_modifier(Modifier::BOLD);
    let label_style = colors.muted_text();

    let row_width = INDENT.len()
        + stats
            .iter()
            .map(|s| text::width(s.value) + 1 + text::width(&s.label))
            .sum::<usize>()
        + text::width(SEPARATOR) * stats.len().saturating_sub(1);

    if row_width <= width {
        let mut spans = vec![Span::raw(INDENT)];
        for (i, stat) in stats.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, label_style));
            }
            spans.push(Span::styled(stat.value, value_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(stat.label.clone(), label_style));
        }
        lines.push(Line::from(spans));
        return;
    }

    // 放不下一行时逐项列出，数值右对齐，标签在自己的列内换行
    let value_width = stats.iter().map(|s| text::width(s.value)).max().unwrap_or(0);
    let label_column = INDENT.len() + value_width + 2;
    for stat in stats {
        for (row_index, row) in text::wrap(&stat.label, width.saturating_sub(label_column)).into_iter().enumerate() {
            let lead = if row_index == 0 {
                format!("{}  ", text::pad_left(stat.value, value_width))
            } else {
                " ".repeat(value_width + 2)
            };
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(lead, value_style),
                Span::styled(row, label_style),
            ]));
        }
    }
}

/// 纵向排列时使用的连接符
fn vertical_glyph(connector: Connector) -> &'static str {
    match connector {
        Connector::Arrow => "↓",
        Connector::BiArrow => "↕",
    }
}

/// 流程图：宽度足够时横排（标题行 + 副标题行），否则纵向
fn flow_lines(
    lines: &mut Vec<Line<'static>>,
    steps: &[StepView],
    connector: Connector,
    highlight: Option<&HighlightState>,
    colors: &ThemeColors,
    width: usize,
) {
    let normal = Style::default()
        .fg(colors.accent)
        .bg(colors.selected_bg)
        .add_modifier(Modifier::BOLD);
    let lit = Style::default()
        .fg(colors.lit_fg)
        .bg(colors.lit_bg)
        .add_modifier(Modifier::BOLD);
    let step_style = |index: usize| {
        if highlight.is_some_and(|h| h.is_lit(index)) {
            lit
        } else {
            normal
        }
    };

    let link = format!(" {} ", connector.glyph());
    let link_width = text::width(&link);
    let columns: Vec<usize> = steps
        .iter()
        .map(|s| text::width(&s.title).max(text::width(&s.subtitle)) + 2)
        .collect();
    let row_width = INDENT.len()
        + columns.iter().sum::<usize>()
        + link_width * steps.len().saturating_sub(1);

    if row_width <= width {
        let mut titles = vec![Span::raw(INDENT)];
        let mut subtitles = vec![Span::raw(INDENT)];

        for (i, (step, column)) in steps.iter().zip(&columns).enumerate() {
            if i > 0 {
                titles.push(Span::styled(link.clone(), colors.muted_text()));
                subtitles.push(Span::raw(" ".repeat(link_width)));
            }
            titles.push(Span::styled(text::pad_right(&format!(" {}", step.title), *column), step_style(i)));
            subtitles.push(Span::styled(
                text::pad_right(&format!(" {}", step.subtitle), *column),
                colors.muted_text(),
            ));
        }

        lines.push(Line::from(titles));
        lines.push(Line::from(subtitles));
        return;
    }

    for (i, step) in steps.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(vertical_glyph(connector), colors.muted_text()),
            ]));
        }
        for row in text::wrap(&step.title, width.saturating_sub(4)) {
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(format!(" {row} "), step_style(i)),
            ]));
        }
        paragraph_lines(lines, &step.subtitle, "   ", colors.muted_text(), width);
    }
}

fn compliance_lines(lines: &mut Vec<Line<'static>>, items: &[StepView], colors: &ThemeColors, width: usize) {
    for item in items {
        for (row_index, row) in text::wrap(&item.title, width.saturating_sub(4)).into_iter().enumerate() {
            let mark = if row_index == 0 { "✓ " } else { "  " };
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(mark, Style::default().fg(colors.success)),
                Span::styled(row, colors.title()),
            ]));
        }
        paragraph_lines(lines, &item.subtitle, "    ", colors.muted_text(), width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::theme::Theme;
    use lowcode_showcase_core::{render_section, HighlightEvent, Language, Section, TranslationTable};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn lines_for(section: Section, highlight: &HighlightState, width: usize) -> Vec<Line<'static>> {
        let table = TranslationTable::builtin();
        let view = render_section(section, &table.translator(Language::En));
        build_lines(&view, highlight, &Theme::Dark.colors(), width)
    }

    #[test]
    fn test_lines_fit_width() {
        let highlight = HighlightState::new(4);
        for section in Section::all() {
            for width in [24, 60, 120] {
                for line in lines_for(*section, &highlight, width) {
                    // emoji 图标按两列计，允许超出一列
                    assert!(line.width() <= width + 1, "{section:?}@{width}: {}", line_text(&line));
                }
            }
        }
    }

    #[test]
    fn test_narrow_stats_wrap_under_label_column() {
        let lines = lines_for(Section::Overview, &HighlightState::new(4), 24);
        let rows: Vec<String> = lines.iter().map(line_text).collect();

        let first = rows
            .iter()
            .position(|r| r.contains("80%"))
            .unwrap();
        assert_eq!(rows[first], "    80%  Faster");
        assert_eq!(rows[first + 1], "         Development");
        for row in &rows[first..] {
            assert!(text::width(row) <= 24, "{row}");
        }
    }

    #[test]
    fn test_wide_workflow_is_horizontal() {
        let lines = lines_for(Section::Testing, &HighlightState::new(4), 200);
        let first = line_text(&lines[0]);
        assert!(first.contains("Test Creation"));
        assert!(first.contains("Integration"));
        assert!(first.contains('→'));
    }

    #[test]
    fn test_narrow_workflow_is_vertical() {
        let lines = lines_for(Section::Testing, &HighlightState::new(4), 30);
        assert!(line_text(&lines[0]).contains("Test Creation"));
        assert!(!line_text(&lines[0]).contains("Execution"));
    }

    #[test]
    fn test_lit_step_styled() {
        let colors = Theme::Dark.colors();
        let mut highlight = HighlightState::new(4);
        highlight.apply(HighlightEvent::On(1));

        let lines = lines_for(Section::Eoffice, &highlight, 200);
        let styled: Vec<_> = lines[0]
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(colors.lit_bg))
            .collect();
        assert_eq!(styled.len(), 1);
        assert!(styled[0].content.contains("L2 Approval"));
    }

    #[test]
    fn test_decorative_flow_never_lit() {
        let colors = Theme::Dark.colors();
        let mut highlight = HighlightState::new(4);
        highlight.apply(HighlightEvent::On(0));

        // 安全分区没有工作流，只有装饰性流程图
        let lines = lines_for(Section::Security, &highlight, 200);
        assert!(lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .all(|s| s.style.bg != Some(colors.lit_bg)));
    }

    #[test]
    fn test_drag_drop_block_skipped() {
        let lines = lines_for(Section::Development, &HighlightState::new(4), 200);
        let all: String = lines.iter().map(line_text).collect();
        assert!(!all.contains("Drop components here"));
        assert!(all.contains("Visual Designer"));
    }
}
