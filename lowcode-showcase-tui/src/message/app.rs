//! 应用级消息定义

use lowcode_showcase_core::HighlightEvent;

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 应用级消息枚举
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,
    /// 切换焦点面板
    ToggleFocus,
    /// 关闭弹窗或把焦点交回标签栏
    GoBack,
    /// 显示帮助
    ShowHelp,
    /// 打开语言选择
    ShowLanguagePicker,
    /// 下一个语言
    NextLanguage,
    /// 上一个语言
    PrevLanguage,
    /// 切换深色/浅色主题
    ToggleTheme,
    /// 分区切换
    Navigation(NavigationMessage),
    /// 内容面板操作
    Content(ContentMessage),
    /// 弹窗操作
    Modal(ModalMessage),
    /// 高亮定时器事件
    Highlight(HighlightEvent),
    /// 无操作
    Noop,
}
