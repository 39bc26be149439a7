//! 内容面板消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    /// 组件面板上移
    SelectPrevious,
    /// 组件面板下移
    SelectNext,
    /// 拿起选中的组件
    BeginDrag,
    /// 放到画布上
    CompleteDrop,
}
