//! Low-Code Platform Showcase Core Library
//!
//! UI-independent building blocks of the showcase page:
//! - Translation tables and the fallback resolver (`i18n`)
//! - The view-state store: active section, language, drag payload, dropped components (`state`)
//! - Static section descriptors and the pure section renderer (`content`)
//! - The periodic workflow highlight timer (`highlight`)
//!
//! Front ends own a [`ViewState`] and a [`TranslationTable`], feed user input into the
//! store's mutators and re-derive everything they display from those two values.

pub mod content;
pub mod error;
pub mod highlight;
pub mod i18n;
pub mod state;

// Re-export common types
pub use content::{render_canvas, render_section, SectionView};
pub use error::{I18nError, I18nResult};
pub use highlight::{HighlightConfig, HighlightEvent, HighlightTimer};
pub use i18n::{Language, TranslationTable, Translator};
pub use state::{Component, Section, ViewState};
