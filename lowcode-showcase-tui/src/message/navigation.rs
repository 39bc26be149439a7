//! 分区切换消息

use lowcode_showcase_core::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 上一个分区
    SelectPrevious,
    /// 下一个分区
    SelectNext,
    /// 第一个分区
    SelectFirst,
    /// 最后一个分区
    SelectLast,
    /// 跳到指定分区
    Select(Section),
}
