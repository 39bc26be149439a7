//! 主布局

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：页头 + 标签栏 + 内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 页头
            Constraint::Length(3), // 标签栏
            Constraint::Min(3),    // 内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    components::header::render(app, frame, main_layout[0]);
    components::tabs::render(app, frame, main_layout[1]);
    pages::render(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}
