//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// 主题枚举，配置文件中写作 `dark` / `light`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// 当前主题的颜色方案
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors::dark(),
            Theme::Light => ThemeColors::light(),
        }
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub accent: Color,
    /// 高亮中的工作流步骤
    pub lit_bg: Color,
    pub lit_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            accent: Color::Rgb(156, 220, 254),
            lit_bg: Color::Rgb(78, 201, 176),
            lit_fg: Color::Black,
            success: Color::Rgb(78, 201, 176),
            warning: Color::Rgb(206, 145, 120),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            accent: Color::Rgb(0, 92, 197),
            lit_bg: Color::Rgb(34, 134, 58),
            lit_fg: Color::White,
            success: Color::Rgb(34, 134, 58),
            warning: Color::Rgb(176, 136, 0),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 边框样式，焦点面板使用强调色
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.border_focused } else { self.border })
    }

    /// 选中项样式
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// 次要文本
    pub fn muted_text(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// 状态栏样式
    pub fn statusbar(&self) -> Style {
        Style::default().bg(self.highlight).fg(Color::White)
    }

    /// 快捷键提示：按键
    pub fn hint_key(&self) -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    /// 快捷键提示：说明
    pub fn hint_desc(&self) -> Style {
        Style::default().fg(Color::Rgb(220, 220, 220))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_focus_border_differs() {
        let colors = Theme::Dark.colors();
        assert_ne!(colors.border_style(true), colors.border_style(false));
    }
}
