//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//!     mod app;        // App 主状态
//!     mod focus;      // 焦点面板
//!     pub mod state;  // 组件面板、高亮、弹窗
//!
//! 分区、语言、拖放负载与已放置组件都在 `lowcode_showcase_core::ViewState` 中，
//! App 只补充终端界面特有的状态。

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
