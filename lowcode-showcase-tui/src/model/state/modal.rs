//! 弹窗状态

use lowcode_showcase_core::Language;

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 语言选择，`selected` 为 `Language::all()` 中的下标
    LanguagePicker { selected: usize },
    /// 快捷键帮助
    Help,
}

/// 弹窗状态
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 打开语言选择，初始选中当前语言
    pub fn show_language_picker(&mut self, current: Language) {
        self.active = Some(Modal::LanguagePicker {
            selected: current.index(),
        });
    }
}
