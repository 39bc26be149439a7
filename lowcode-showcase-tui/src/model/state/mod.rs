//! 页面状态

mod development;
mod highlight;
mod modal;

pub use development::PaletteState;
pub use highlight::HighlightState;
pub use modal::{Modal, ModalState};
