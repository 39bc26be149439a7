//! 页面框架组件

pub mod header;
pub mod modal;
pub mod statusbar;
pub mod tabs;
