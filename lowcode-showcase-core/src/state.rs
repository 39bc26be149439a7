//! View-state store
//!
//! The only mutable state of the showcase. Front ends hold one [`ViewState`], call its
//! mutators in response to user input and pass it by reference to the renderers.
//!
//! ```text
//!   drag lifecycle:   empty ──begin_drag──▶ payload held ──complete_drop──▶ appended
//!                                   ▲            │
//!                                   └────────────┘  begin_drag overwrites the payload
//! ```

use crate::i18n::Language;

/// Top-level content tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Overview,
    Development,
    Testing,
    Eoffice,
    Security,
}

impl Section {
    /// All sections in tab order
    pub fn all() -> &'static [Section] {
        &[
            Section::Overview,
            Section::Development,
            Section::Testing,
            Section::Eoffice,
            Section::Security,
        ]
    }

    /// Stable identifier
    pub fn id(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Development => "development",
            Section::Testing => "testing",
            Section::Eoffice => "eoffice",
            Section::Security => "security",
        }
    }

    /// Translation key of the tab label (`nav` + capitalised id)
    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Overview => "navOverview",
            Section::Development => "navDevelopment",
            Section::Testing => "navTesting",
            Section::Eoffice => "navEoffice",
            Section::Security => "navSecurity",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::all().iter().copied().find(|s| s.id() == id)
    }

    /// Position in tab order
    pub fn index(self) -> usize {
        match self {
            Section::Overview => 0,
            Section::Development => 1,
            Section::Testing => 2,
            Section::Eoffice => 3,
            Section::Security => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Section::all().get(index).copied()
    }

    /// Next tab (wrapping)
    #[must_use]
    pub fn next(self) -> Section {
        let all = Section::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Previous tab (wrapping)
    #[must_use]
    pub fn prev(self) -> Section {
        let all = Section::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Demo widgets that can be dragged onto the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Chart,
    Form,
    Table,
}

impl Component {
    /// Palette order
    pub fn all() -> &'static [Component] {
        &[Component::Chart, Component::Form, Component::Table]
    }

    /// Identifier, also the translation key of the label
    pub fn id(self) -> &'static str {
        match self {
            Component::Chart => "chart",
            Component::Form => "form",
            Component::Table => "table",
        }
    }

    pub fn from_id(id: &str) -> Option<Component> {
        Component::all().iter().copied().find(|c| c.id() == id)
    }
}

/// Active section, active language, in-flight drag payload and dropped components.
///
/// Every mutator is total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    section: Section,
    language: Language,
    drag_payload: Option<Component>,
    dropped: Vec<Component>,
}

impl ViewState {
    /// Default state: overview, base language, nothing dragged or dropped
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a language other than the base one
    pub fn with_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Component currently being dragged, if any
    pub fn drag_payload(&self) -> Option<Component> {
        self.drag_payload
    }

    /// Components dropped so far, oldest first
    pub fn dropped(&self) -> &[Component] {
        &self.dropped
    }

    pub fn select_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn next_section(&mut self) {
        self.section = self.section.next();
    }

    pub fn prev_section(&mut self) {
        self.section = self.section.prev();
    }

    pub fn select_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Hold `component` as the drag payload, replacing any previous one
    pub fn begin_drag(&mut self, component: Component) {
        self.drag_payload = Some(component);
    }

    /// Append the held payload to the dropped list and clear it.
    ///
    /// Returns the appended component; a no-op returning `None` when nothing is held.
    pub fn complete_drop(&mut self) -> Option<Component> {
        let component = self.drag_payload.take()?;
        self.dropped.push(component);
        Some(component)
    }
}
