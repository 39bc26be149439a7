//! Hindi translations (hi)

pub const ENTRIES: &[(&str, &str)] = &[
    // Header
    ("title", "लो-कोड डेवलपमेंट प्लेटफ़ॉर्म"),
    ("subtitle", "सुरक्षित एंटरप्राइज़ एप्लिकेशन तेज़ी से बनाएं, परखें और लॉन्च करें"),
    ("languageLabel", "भाषा"),
    // Navigation
    ("navOverview", "अवलोकन"),
    ("navDevelopment", "विकास"),
    ("navTesting", "परीक्षण"),
    ("navEoffice", "ई-ऑफिस"),
    ("navSecurity", "सुरक्षा"),
    // Overview
    ("overviewTitle", "प्लेटफ़ॉर्म अवलोकन"),
    ("rapidDevelopment", "तीव्र विकास"),
    ("rapidDevDesc", "विज़ुअल डिज़ाइनर और पुन: उपयोग योग्य टेम्पलेट से तैयार घटकों द्वारा एप्लिकेशन बनाएं।"),
    ("customCodeSupport", "कस्टम कोड समर्थन"),
    ("customCodeDesc", "जब भी ज़रूरत हो, कोड लिखें: घटकों का विस्तार करें और कोई भी API कॉल करें।"),
    ("crossPlatformReady", "क्रॉस-प्लेटफ़ॉर्म तैयार"),
    ("crossPlatformDesc", "एक ही एप्लिकेशन को वेब, एंड्रॉइड और iOS पर प्रकाशित करें।"),
    ("enterpriseSecurity", "एंटरप्राइज़ सुरक्षा"),
    ("enterpriseSecDesc", "भूमिका-आधारित पहुंच, एन्क्रिप्टेड भंडारण और पूर्ण ऑडिट ट्रेल शामिल हैं।"),
    ("fasterDevelopment", "तेज़ विकास"),
    ("languagesSupported", "समर्थित भाषाएं"),
    ("uptimeSLA", "अपटाइम SLA"),
    ("supportAvailable", "सहायता उपलब्ध"),
    // Development
    ("developmentTitle", "विज़ुअल डेवलपमेंट स्टूडियो"),
    ("dragDropDemo", "ड्रैग और ड्रॉप डेमो"),
    ("dragDropDesc", "पैलेट से एक घटक चुनें और उसे कैनवास पर छोड़ें।"),
    ("componentsLabel", "घटक"),
    ("chart", "चार्ट"),
    ("form", "फ़ॉर्म"),
    ("table", "तालिका"),
    ("appCanvasLabel", "ऐप कैनवास"),
    ("dropHere", "घटक यहां छोड़ें"),
    ("addedComponent", "जोड़ा गया:"),
    ("visualDesigner", "विज़ुअल डिज़ाइनर"),
    ("codeEditor", "कोड एडिटर"),
    ("visualDevelopment", "विज़ुअल विकास"),
    ("apiIntegration", "API एकीकरण"),
    ("databaseSupport", "डेटाबेस समर्थन"),
    ("autoDocumentation", "स्वचालित दस्तावेज़ीकरण"),
    // Testing
    ("testingTitle", "एकीकृत परीक्षण सूट"),
    ("testCreation", "परीक्षण निर्माण"),
    ("execution", "निष्पादन"),
    ("reporting", "रिपोर्टिंग"),
    ("integration", "एकीकरण"),
    ("noCodeTesting", "नो-कोड परीक्षण"),
    ("testManagement", "परीक्षण प्रबंधन"),
    // E-Office
    ("eofficeTitle", "ई-ऑफिस एकीकरण"),
    ("l1Approval", "स्तर 1 अनुमोदन"),
    ("l2Approval", "स्तर 2 अनुमोदन"),
    ("l3Approval", "स्तर 3 अनुमोदन"),
    ("archive", "संग्रह"),
    ("documentManagement", "दस्तावेज़ प्रबंधन"),
    ("multiLevelApprovals", "बहु-स्तरीय अनुमोदन"),
    ("approvalWorkflowTitle", "अनुमोदन कार्यप्रवाह"),
    // Security
    ("securityTitle", "सुरक्षा और अनुपालन"),
    ("encryptionProtocols", "एन्क्रिप्शन प्रोटोकॉल"),
    ("securityArchitecture", "सुरक्षा संरचना"),
    ("complianceFeatures", "अनुपालन सुविधाएं"),
    ("dataPrivacy", "डेटा गोपनीयता"),
    ("accessControl", "पहुंच नियंत्रण"),
    // Chrome
    ("languagePickerTitle", "भाषा चुनें"),
    ("hintLanguage", "भाषा"),
    ("hintQuit", "बाहर निकलें"),
    ("hintHelp", "सहायता"),
];
