//! Telugu translations (te)

pub const ENTRIES: &[(&str, &str)] = &[
    ("title", "లో-కోడ్ డెవలప్‌మెంట్ ప్లాట్‌ఫారమ్"),
    ("subtitle", "సురక్షితమైన ఎంటర్‌ప్రైజ్ అప్లికేషన్లను వేగంగా నిర్మించండి"),
    ("languageLabel", "భాష"),
    ("navOverview", "అవలోకనం"),
    ("navDevelopment", "అభివృద్ధి"),
    ("navTesting", "పరీక్ష"),
    ("navEoffice", "ఈ-ఆఫీస్"),
    ("navSecurity", "భద్రత"),
    ("chart", "చార్ట్"),
    ("form", "ఫారం"),
    ("table", "పట్టిక"),
    ("languagePickerTitle", "భాషను ఎంచుకోండి"),
];
