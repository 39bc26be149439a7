//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与展示内容无关的基础设施代码：
//!     mod terminal;       // 终端初始化和恢复
//!     mod logging;        // 文件日志
//!     mod text;           // 按显示宽度换行、补齐

mod logging;
mod terminal;
pub mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
