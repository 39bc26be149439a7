//!
//! src/message/mod.rs
//! Message 层：Event 层产出、Update 层消费的消息
//!
//!     AppMessage
//!         ├── Navigation(NavigationMessage)    // 分区切换
//!         ├── Content(ContentMessage)          // 滚动、组件面板、拖放
//!         ├── Modal(ModalMessage)              // 语言选择、帮助
//!         └── Highlight(HighlightEvent)        // 来自定时器，而非按键

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
