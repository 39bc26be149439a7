//! 应用状态

use std::cell::Cell;

use lowcode_showcase_core::{content, Language, TranslationTable, Translator, ViewState};

use crate::model::focus::FocusPanel;
use crate::model::state::{HighlightState, ModalState, PaletteState};
use crate::view::theme::Theme;

/// 应用主状态
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 当前焦点面板
    pub focus: FocusPanel,
    /// 分区、语言、拖放状态
    pub view: ViewState,
    /// 翻译表（内置 + 覆盖文件）
    pub translations: TranslationTable,
    pub theme: Theme,
    /// 开发分区的组件面板
    pub palette: PaletteState,
    /// 内容面板滚动偏移（行）
    pub scroll: u16,
    /// 上一次渲染得到的最大滚动偏移
    pub scroll_limit: Cell<u16>,
    /// 工作流步骤高亮
    pub highlight: HighlightState,
    /// 状态栏消息
    pub status_message: Option<String>,
    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    pub fn new(translations: TranslationTable, language: Language, theme: Theme) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            view: ViewState::with_language(language),
            translations,
            theme,
            palette: PaletteState::new(),
            scroll: 0,
            scroll_limit: Cell::new(0),
            highlight: HighlightState::new(content::workflow_step_count()),
            status_message: None,
            modal: ModalState::new(),
        }
    }

    /// 绑定当前语言的翻译器
    pub fn translator(&self) -> Translator<'_> {
        self.translations.translator(self.view.language())
    }

    /// 按 key 取当前语言文案
    pub fn t<'k>(&'k self, key: &'k str) -> &'k str {
        self.translations.resolve(self.view.language(), key)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(TranslationTable::builtin(), Language::default(), Theme::default())
    }
}
