//!
//! src/event/mod.rs
//! Event 层：把 crossterm 事件翻译为 AppMessage
//!
//! handle_key_event 的判断顺序：
//!     - Ctrl+C 总是退出
//!     - 有弹窗打开时，由 handle_modal_keys 处理
//!     - 全局快捷键（帮助、语言、主题、焦点、数字键跳转分区）
//!     - 焦点在标签栏，由 handle_tab_keys 处理
//!     - 焦点在内容面板，由 handle_content_keys 处理

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
