//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 顶部分区标签栏
    #[default]
    Tabs,
    /// 分区内容面板
    Content,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Tabs => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Tabs,
        }
    }

    pub fn is_tabs(self) -> bool {
        matches!(self, FocusPanel::Tabs)
    }

    pub fn is_content(self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(FocusPanel::default(), FocusPanel::Tabs);
        assert!(FocusPanel::Tabs.toggle().is_content());
        assert!(FocusPanel::Content.toggle().is_tabs());
    }
}
