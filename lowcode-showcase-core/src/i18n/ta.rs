//! Tamil translations (ta)

pub const ENTRIES: &[(&str, &str)] = &[
    ("title", "லோ-கோட் மேம்பாட்டு தளம்"),
    ("subtitle", "பாதுகாப்பான நிறுவன பயன்பாடுகளை விரைவாக உருவாக்குங்கள்"),
    ("languageLabel", "மொழி"),
    ("navOverview", "கண்ணோட்டம்"),
    ("navDevelopment", "மேம்பாடு"),
    ("navTesting", "சோதனை"),
    ("navEoffice", "மின்-அலுவலகம்"),
    ("navSecurity", "பாதுகாப்பு"),
    ("chart", "விளக்கப்படம்"),
    ("form", "படிவம்"),
    ("table", "அட்டவணை"),
    ("languagePickerTitle", "மொழியைத் தேர்ந்தெடுக்கவும்"),
];
