//! 开发分区：组件面板的选中项

use lowcode_showcase_core::Component;

/// 组件面板状态
#[derive(Debug, Clone, Default)]
pub struct PaletteState {
    selected: usize,
}

impl PaletteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// 当前选中的组件
    pub fn current(&self) -> Component {
        let all = Component::all();
        all[self.selected % all.len()]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Component::all().len();
    }

    pub fn select_previous(&mut self) {
        let len = Component::all().len();
        self.selected = (self.selected + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        let mut palette = PaletteState::new();
        assert_eq!(palette.current(), Component::Chart);

        palette.select_previous();
        assert_eq!(palette.current(), Component::Table);

        palette.select_next();
        palette.select_next();
        assert_eq!(palette.current(), Component::Form);
    }
}
