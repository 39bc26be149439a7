//! Bengali translations (bn)

pub const ENTRIES: &[(&str, &str)] = &[
    ("title", "লো-কোড ডেভেলপমেন্ট প্ল্যাটফর্ম"),
    ("subtitle", "নিরাপদ এন্টারপ্রাইজ অ্যাপ্লিকেশন দ্রুত তৈরি করুন"),
    ("languageLabel", "ভাষা"),
    ("navOverview", "সংক্ষিপ্ত বিবরণ"),
    ("navDevelopment", "উন্নয়ন"),
    ("navTesting", "পরীক্ষা"),
    ("navEoffice", "ই-অফিস"),
    ("navSecurity", "নিরাপত্তা"),
    ("overviewTitle", "প্ল্যাটফর্মের সংক্ষিপ্ত বিবরণ"),
    ("chart", "চার্ট"),
    ("form", "ফর্ম"),
    ("table", "টেবিল"),
    ("languagePickerTitle", "ভাষা নির্বাচন করুন"),
];
