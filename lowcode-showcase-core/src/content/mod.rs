//! Section content
//!
//! Every section is a fixed list of [`ContentBlock`]s built from static descriptors.
//! Descriptors only carry icons, literal figures and translation keys; the text is
//! produced by [`render_section`] through a [`Translator`](crate::i18n::Translator).

mod render;

pub use render::{
    render_canvas, render_section, BlockView, CardView, DragDropView, SectionView, StatView,
    StepView,
};

use crate::state::Section;

/// Feature card: icon, title key, description key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title_key: &'static str,
    pub desc_key: &'static str,
}

/// Headline figure with a translated label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label_key: &'static str,
}

/// One box of a flow or workflow diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowStep {
    pub title_key: &'static str,
    pub sub_key: &'static str,
}

/// Glyph drawn between flow boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `→`
    Arrow,
    /// `⟷`
    BiArrow,
}

impl Connector {
    pub fn glyph(self) -> &'static str {
        match self {
            Connector::Arrow => "→",
            Connector::BiArrow => "⟷",
        }
    }
}

/// A building block of a section page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentBlock {
    /// Grid of feature cards
    Features(&'static [FeatureCard]),
    /// Row of headline figures
    Stats(&'static [Stat]),
    /// Workflow diagram whose steps take part in the periodic highlight
    Workflow(&'static [FlowStep]),
    /// Decorative flow diagram, optionally under a heading
    Flow {
        heading_key: Option<&'static str>,
        steps: &'static [FlowStep],
        connector: Connector,
    },
    /// Titled grid of compliance items
    Compliance {
        heading_key: &'static str,
        items: &'static [FlowStep],
    },
    /// Heading with a paragraph
    Callout {
        heading_key: &'static str,
        body_key: &'static str,
    },
    /// Component palette and drop canvas
    DragDrop,
}

const fn card(icon: &'static str, title_key: &'static str, desc_key: &'static str) -> FeatureCard {
    FeatureCard {
        icon,
        title_key,
        desc_key,
    }
}

const fn step(title_key: &'static str, sub_key: &'static str) -> FlowStep {
    FlowStep { title_key, sub_key }
}

// ============================================================================
// Overview
// ============================================================================

const OVERVIEW_FEATURES: &[FeatureCard] = &[
    card("🚀", "rapidDevelopment", "rapidDevDesc"),
    card("🔧", "customCodeSupport", "customCodeDesc"),
    card("📱", "crossPlatformReady", "crossPlatformDesc"),
    card("🔐", "enterpriseSecurity", "enterpriseSecDesc"),
];

const OVERVIEW_STATS: &[Stat] = &[
    Stat { value: "80%", label_key: "fasterDevelopment" },
    Stat { value: "22", label_key: "languagesSupported" },
    Stat { value: "99.9%", label_key: "uptimeSLA" },
    Stat { value: "24/7", label_key: "supportAvailable" },
];

const OVERVIEW: &[ContentBlock] = &[
    ContentBlock::Features(OVERVIEW_FEATURES),
    ContentBlock::Stats(OVERVIEW_STATS),
];

// ============================================================================
// Development
// ============================================================================

const DEVELOPMENT_FLOW: &[FlowStep] = &[
    step("visualDesigner", "visualDesignerSub"),
    step("codeEditor", "codeEditorSub"),
    step("devSecOps", "devSecOpsSub"),
];

const DEVELOPMENT_FEATURES: &[FeatureCard] = &[
    card("🎨", "visualDevelopment", "visualDevDesc"),
    card("🔗", "apiIntegration", "apiIntegDesc"),
    card("🗄️", "databaseSupport", "databaseDesc"),
    card("📚", "autoDocumentation", "autoDocDesc"),
];

const DEVELOPMENT: &[ContentBlock] = &[
    ContentBlock::DragDrop,
    ContentBlock::Flow {
        heading_key: None,
        steps: DEVELOPMENT_FLOW,
        connector: Connector::BiArrow,
    },
    ContentBlock::Features(DEVELOPMENT_FEATURES),
];

// ============================================================================
// Testing
// ============================================================================

const TESTING_WORKFLOW: &[FlowStep] = &[
    step("testCreation", "testCreationSub"),
    step("execution", "executionSub"),
    step("reporting", "reportingSub"),
    step("integration", "integrationSub"),
];

const TESTING_FEATURES: &[FeatureCard] = &[
    card("🎯", "noCodeTesting", "noCodeTestDesc"),
    card("🌐", "multiPlatformSupport", "multiPlatformDesc"),
    card("📊", "advancedReporting", "advancedReportDesc"),
    card("🔄", "testManagement", "testMgmtDesc"),
];

const TESTING_FLOW: &[FlowStep] = &[
    step("versionControl", "versionControlSub"),
    step("testSuite", "testSuiteSub"),
    step("issueTracking", "issueTrackingSub"),
];

const TESTING: &[ContentBlock] = &[
    ContentBlock::Workflow(TESTING_WORKFLOW),
    ContentBlock::Features(TESTING_FEATURES),
    ContentBlock::Flow {
        heading_key: Some("testingWorkflowTitle"),
        steps: TESTING_FLOW,
        connector: Connector::BiArrow,
    },
];

// ============================================================================
// E-Office
// ============================================================================

const EOFFICE_WORKFLOW: &[FlowStep] = &[
    step("l1Approval", "l1ApprovalSub"),
    step("l2Approval", "l2ApprovalSub"),
    step("l3Approval", "l3ApprovalSub"),
    step("archive", "archiveSub"),
];

const EOFFICE_FEATURES: &[FeatureCard] = &[
    card("📁", "documentManagement", "docMgmtDesc"),
    card("📋", "eofficeIntegration", "eofficeIntegDesc"),
    card("🔄", "fileMovementTracking", "fileTrackDesc"),
    card("✅", "multiLevelApprovals", "multiLevelDesc"),
];

const EOFFICE_FLOW: &[FlowStep] = &[
    step("documentUpload", "docUploadSub"),
    step("approvalChain", "approvalChainSub"),
    step("finalStatus", "finalStatusSub"),
];

const EOFFICE: &[ContentBlock] = &[
    ContentBlock::Workflow(EOFFICE_WORKFLOW),
    ContentBlock::Features(EOFFICE_FEATURES),
    ContentBlock::Flow {
        heading_key: Some("approvalWorkflowTitle"),
        steps: EOFFICE_FLOW,
        connector: Connector::Arrow,
    },
    ContentBlock::Callout {
        heading_key: "integratedReporting",
        body_key: "reportingDesc",
    },
];

// ============================================================================
// Security
// ============================================================================

const SECURITY_FEATURES: &[FeatureCard] = &[
    card("🛡️", "owaspCompliance", "owaspDesc"),
    card("🤖", "aiAssistedSecurity", "aiSecDesc"),
    card("🔒", "encryptionProtocols", "encryptionDesc"),
    card("📊", "siemIntegration", "siemDesc"),
];

const SECURITY_FLOW: &[FlowStep] = &[
    step("codeAnalysis", "codeAnalysisSub"),
    step("vulnerabilityCheck", "vulnerabilityCheckSub"),
    step("deployment", "deploymentSub"),
];

const SECURITY_COMPLIANCE: &[FlowStep] = &[
    step("dataPrivacy", "dataPrivacySub"),
    step("accessControl", "accessControlSub"),
    step("auditTrails", "auditTrailsSub"),
    step("secureAPIs", "secureApisSub"),
];

const SECURITY: &[ContentBlock] = &[
    ContentBlock::Features(SECURITY_FEATURES),
    ContentBlock::Flow {
        heading_key: Some("securityArchitecture"),
        steps: SECURITY_FLOW,
        connector: Connector::Arrow,
    },
    ContentBlock::Compliance {
        heading_key: "complianceFeatures",
        items: SECURITY_COMPLIANCE,
    },
];

/// Translation key of a section's page heading
pub fn title_key(section: Section) -> &'static str {
    match section {
        Section::Overview => "overviewTitle",
        Section::Development => "developmentTitle",
        Section::Testing => "testingTitle",
        Section::Eoffice => "eofficeTitle",
        Section::Security => "securityTitle",
    }
}

/// Content blocks of a section, top to bottom
pub fn blocks(section: Section) -> &'static [ContentBlock] {
    match section {
        Section::Overview => OVERVIEW,
        Section::Development => DEVELOPMENT,
        Section::Testing => TESTING,
        Section::Eoffice => EOFFICE,
        Section::Security => SECURITY,
    }
}

/// Length of the longest workflow diagram; the highlight timer cycles over this many steps.
pub fn workflow_step_count() -> usize {
    Section::all()
        .iter()
        .flat_map(|section| blocks(*section))
        .filter_map(|block| match block {
            ContentBlock::Workflow(steps) => Some(steps.len()),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

/// Every translation key referenced by section content
pub fn referenced_keys() -> Vec<&'static str> {
    let mut keys = Vec::new();

    for section in Section::all() {
        keys.push(section.nav_key());
        keys.push(title_key(*section));

        for block in blocks(*section) {
            match block {
                ContentBlock::Features(cards) => {
                    for c in *cards {
                        keys.extend([c.title_key, c.desc_key]);
                    }
                }
                ContentBlock::Stats(stats) => {
                    keys.extend(stats.iter().map(|s| s.label_key));
                }
                ContentBlock::Workflow(steps) => {
                    for s in *steps {
                        keys.extend([s.title_key, s.sub_key]);
                    }
                }
                ContentBlock::Compliance { heading_key, items } => {
                    keys.push(*heading_key);
                    for s in *items {
                        keys.extend([s.title_key, s.sub_key]);
                    }
                }
                ContentBlock::Flow {
                    heading_key, steps, ..
                } => {
                    keys.extend(heading_key.iter().copied());
                    for s in *steps {
                        keys.extend([s.title_key, s.sub_key]);
                    }
                }
                ContentBlock::Callout {
                    heading_key,
                    body_key,
                } => {
                    keys.extend([*heading_key, *body_key]);
                }
                ContentBlock::DragDrop => {
                    keys.extend(render::DRAG_DROP_KEYS);
                    keys.extend(crate::state::Component::all().iter().map(|c| c.id()));
                }
            }
        }
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, TranslationTable};

    #[test]
    fn test_every_section_has_content() {
        for section in Section::all() {
            assert!(!blocks(*section).is_empty(), "{section:?} has no blocks");
        }
    }

    #[test]
    fn test_only_development_has_drag_drop() {
        for section in Section::all() {
            let has = blocks(*section).contains(&ContentBlock::DragDrop);
            assert_eq!(has, *section == Section::Development);
        }
    }

    #[test]
    fn test_workflow_step_count() {
        assert_eq!(workflow_step_count(), 4);
    }

    #[test]
    fn test_referenced_keys_exist_in_english() {
        let table = TranslationTable::builtin();
        for key in referenced_keys() {
            assert!(
                table.contains(Language::En, key),
                "missing English translation for '{key}'"
            );
        }
    }
}
