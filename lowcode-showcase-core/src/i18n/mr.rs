//! Marathi translations (mr)

pub const ENTRIES: &[(&str, &str)] = &[
    ("title", "लो-कोड डेव्हलपमेंट प्लॅटफॉर्म"),
    ("subtitle", "सुरक्षित एंटरप्राइझ अ‍ॅप्लिकेशन्स जलद तयार करा"),
    ("languageLabel", "भाषा"),
    ("navOverview", "आढावा"),
    ("navDevelopment", "विकास"),
    ("navTesting", "चाचणी"),
    ("navEoffice", "ई-ऑफिस"),
    ("navSecurity", "सुरक्षा"),
    ("overviewTitle", "प्लॅटफॉर्मचा आढावा"),
    ("chart", "चार्ट"),
    ("form", "फॉर्म"),
    ("table", "तक्ता"),
    ("languagePickerTitle", "भाषा निवडा"),
];
