//! 工作流步骤高亮状态

use lowcode_showcase_core::HighlightEvent;

/// 当前点亮的步骤下标
#[derive(Debug, Clone, Default)]
pub struct HighlightState {
    lit: Vec<bool>,
}

impl HighlightState {
    pub fn new(step_count: usize) -> Self {
        Self {
            lit: vec![false; step_count],
        }
    }

    /// 应用一次定时器事件，越界下标忽略
    pub fn apply(&mut self, event: HighlightEvent) {
        let (index, on) = match event {
            HighlightEvent::On(index) => (index, true),
            HighlightEvent::Off(index) => (index, false),
        };
        if let Some(slot) = self.lit.get_mut(index) {
            *slot = on;
        }
    }

    pub fn is_lit(&self, index: usize) -> bool {
        self.lit.get(index).copied().unwrap_or(false)
    }

    /// 熄灭全部步骤
    pub fn clear(&mut self) {
        self.lit.iter_mut().for_each(|slot| *slot = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_off() {
        let mut state = HighlightState::new(4);
        state.apply(HighlightEvent::On(2));
        assert!(state.is_lit(2));
        assert!(!state.is_lit(1));

        state.apply(HighlightEvent::Off(2));
        assert!(!state.is_lit(2));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut state = HighlightState::new(2);
        state.apply(HighlightEvent::On(7));
        assert!(!state.is_lit(7));
    }

    #[test]
    fn test_clear() {
        let mut state = HighlightState::new(3);
        state.apply(HighlightEvent::On(0));
        state.apply(HighlightEvent::On(1));
        state.clear();
        assert!(!state.is_lit(0));
        assert!(!state.is_lit(1));
    }
}
