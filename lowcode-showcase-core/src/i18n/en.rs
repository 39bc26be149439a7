//! English translations (en); complete, and the fallback for every other language

pub const ENTRIES: &[(&str, &str)] = &[
    // ========================================================================
    // Header
    // ========================================================================
    ("title", "Low-Code Development Platform"),
    ("subtitle", "Build, test and ship secure enterprise applications faster"),
    ("languageLabel", "Language"),
    // ========================================================================
    // Navigation
    // ========================================================================
    ("navOverview", "Overview"),
    ("navDevelopment", "Development"),
    ("navTesting", "Testing"),
    ("navEoffice", "E-Office"),
    ("navSecurity", "Security"),
    // ========================================================================
    // Overview
    // ========================================================================
    ("overviewTitle", "Platform Overview"),
    ("rapidDevelopment", "Rapid Development"),
    ("rapidDevDesc", "Assemble applications from ready-made building blocks with a visual designer and reusable templates."),
    ("customCodeSupport", "Custom Code Support"),
    ("customCodeDesc", "Drop down to code whenever you need to: extend components, write business rules and call any API."),
    ("crossPlatformReady", "Cross-Platform Ready"),
    ("crossPlatformDesc", "Publish one application to web, Android and iOS without rewriting the interface."),
    ("enterpriseSecurity", "Enterprise Security"),
    ("enterpriseSecDesc", "Role-based access, encrypted storage and full audit trails are built in from day one."),
    ("fasterDevelopment", "Faster Development"),
    ("languagesSupported", "Languages Supported"),
    ("uptimeSLA", "Uptime SLA"),
    ("supportAvailable", "Support Available"),
    // ========================================================================
    // Development
    // ========================================================================
    ("developmentTitle", "Visual Development Studio"),
    ("dragDropDemo", "Drag & Drop Demo"),
    ("dragDropDesc", "Pick a component from the palette and drop it on the canvas to add it to your app."),
    ("componentsLabel", "Components"),
    ("chart", "Chart"),
    ("form", "Form"),
    ("table", "Table"),
    ("appCanvasLabel", "App Canvas"),
    ("dropHere", "Drop components here"),
    ("addedComponent", "Added:"),
    ("draggingLabel", "Dragging:"),
    ("visualDesigner", "Visual Designer"),
    ("visualDesignerSub", "Drag, drop and configure"),
    ("codeEditor", "Code Editor"),
    ("codeEditorSub", "Extend with custom logic"),
    ("devSecOps", "DevSecOps"),
    ("devSecOpsSub", "Build, scan and deploy"),
    ("visualDevelopment", "Visual Development"),
    ("visualDevDesc", "Design screens, data models and workflows visually while the platform generates clean code."),
    ("apiIntegration", "API Integration"),
    ("apiIntegDesc", "Connect REST and SOAP services, government gateways and third-party systems in a few clicks."),
    ("databaseSupport", "Database Support"),
    ("databaseDesc", "Work with PostgreSQL, MySQL, Oracle and SQL Server through a unified data layer."),
    ("autoDocumentation", "Auto Documentation"),
    ("autoDocDesc", "Technical and user documentation is generated and kept in sync with every release."),
    // ========================================================================
    // Testing
    // ========================================================================
    ("testingTitle", "Integrated Testing Suite"),
    ("testCreation", "Test Creation"),
    ("testCreationSub", "Record or design tests"),
    ("execution", "Execution"),
    ("executionSub", "Run across devices"),
    ("reporting", "Reporting"),
    ("reportingSub", "Detailed results"),
    ("integration", "Integration"),
    ("integrationSub", "CI/CD pipelines"),
    ("noCodeTesting", "No-Code Testing"),
    ("noCodeTestDesc", "Business users create automated tests by recording their own interactions."),
    ("multiPlatformSupport", "Multi-Platform Support"),
    ("multiPlatformDesc", "Execute the same suite on browsers, mobile devices and APIs."),
    ("advancedReporting", "Advanced Reporting"),
    ("advancedReportDesc", "Dashboards with trends, screenshots and failure analysis for every run."),
    ("testManagement", "Test Management"),
    ("testMgmtDesc", "Organise cases, plans and cycles with traceability back to requirements."),
    ("testingWorkflowTitle", "Testing Workflow Integration"),
    ("versionControl", "Version Control"),
    ("versionControlSub", "Git-based branching"),
    ("testSuite", "Test Suite"),
    ("testSuiteSub", "Automated regression"),
    ("issueTracking", "Issue Tracking"),
    ("issueTrackingSub", "Defects linked to tests"),
    // ========================================================================
    // E-Office
    // ========================================================================
    ("eofficeTitle", "E-Office Integration"),
    ("l1Approval", "L1 Approval"),
    ("l1ApprovalSub", "Section officer"),
    ("l2Approval", "L2 Approval"),
    ("l2ApprovalSub", "Department head"),
    ("l3Approval", "L3 Approval"),
    ("l3ApprovalSub", "Final authority"),
    ("archive", "Archive"),
    ("archiveSub", "Stored and indexed"),
    ("documentManagement", "Document Management"),
    ("docMgmtDesc", "Create, version and search official documents from a single repository."),
    ("eofficeIntegration", "E-Office Integration"),
    ("eofficeIntegDesc", "Works with existing e-Office systems for files, notes and correspondence."),
    ("fileMovementTracking", "File Movement Tracking"),
    ("fileTrackDesc", "See where every file is, who holds it and for how long."),
    ("multiLevelApprovals", "Multi-Level Approvals"),
    ("multiLevelDesc", "Configurable approval hierarchies with delegation and escalation rules."),
    ("approvalWorkflowTitle", "Approval Workflow"),
    ("documentUpload", "Document Upload"),
    ("docUploadSub", "Submit with metadata"),
    ("approvalChain", "Approval Chain"),
    ("approvalChainSub", "Routed automatically"),
    ("finalStatus", "Final Status"),
    ("finalStatusSub", "Approved or returned"),
    ("integratedReporting", "Integrated Reporting"),
    ("reportingDesc", "Track pendency, turnaround time and approvals across departments in real time."),
    // ========================================================================
    // Security
    // ========================================================================
    ("securityTitle", "Security & Compliance"),
    ("owaspCompliance", "OWASP Compliance"),
    ("owaspDesc", "Generated applications are hardened against the OWASP Top 10 by default."),
    ("aiAssistedSecurity", "AI-Assisted Security"),
    ("aiSecDesc", "Machine-learning models flag risky code and unusual behaviour before release."),
    ("encryptionProtocols", "Encryption Protocols"),
    ("encryptionDesc", "TLS in transit and AES-256 at rest, with managed key rotation."),
    ("siemIntegration", "SIEM Integration"),
    ("siemDesc", "Stream security events to your SIEM for correlation and alerting."),
    ("securityArchitecture", "Security Architecture"),
    ("codeAnalysis", "Code Analysis"),
    ("codeAnalysisSub", "Static and dynamic scans"),
    ("vulnerabilityCheck", "Vulnerability Check"),
    ("vulnerabilityCheckSub", "Dependencies and configs"),
    ("deployment", "Deployment"),
    ("deploymentSub", "Signed, verified releases"),
    ("complianceFeatures", "Compliance Features"),
    ("dataPrivacy", "Data Privacy"),
    ("dataPrivacySub", "Consent and masking"),
    ("accessControl", "Access Control"),
    ("accessControlSub", "Role-based permissions"),
    ("auditTrails", "Audit Trails"),
    ("auditTrailsSub", "Tamper-evident logs"),
    ("secureAPIs", "Secure APIs"),
    ("secureApisSub", "OAuth 2.0 and rate limits"),
    // ========================================================================
    // Terminal chrome: hints, help, picker
    // ========================================================================
    ("hintSection", "Section"),
    ("hintFocus", "Focus"),
    ("hintLanguage", "Language"),
    ("hintScroll", "Scroll"),
    ("hintSelect", "Select"),
    ("hintPickUp", "Pick up"),
    ("hintDrop", "Drop"),
    ("hintConfirm", "Confirm"),
    ("hintClose", "Close"),
    ("hintHelp", "Help"),
    ("hintQuit", "Quit"),
    ("helpTitle", "Keyboard Shortcuts"),
    ("helpSections", "Jump to section"),
    ("helpSwitchSection", "Previous / next section"),
    ("helpToggleFocus", "Switch between tabs and content"),
    ("helpScroll", "Scroll content"),
    ("helpPalette", "Choose a component"),
    ("helpPickUp", "Pick up the selected component"),
    ("helpDrop", "Drop it on the canvas"),
    ("helpLanguage", "Choose language"),
    ("helpCycleLanguage", "Previous / next language"),
    ("helpTheme", "Toggle theme"),
    ("helpQuit", "Quit"),
    ("helpBack", "Back to the tab bar / close dialog"),
    ("helpShowHelp", "Show this help"),
    ("helpFirstLast", "First / last section, or top of content"),
    ("languagePickerTitle", "Select Language"),
    ("statusLanguageChanged", "Language:"),
    ("statusNothingToDrop", "Pick up a component first"),
];
