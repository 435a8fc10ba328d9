use serde::{Deserialize, Serialize};

/// localStorage key holding the visitor's language preference.
pub const LANGUAGE_STORAGE_KEY: &str = "epidural-language-preference";

/// Page language. Arabic is the default.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Code used for storage, `<html lang>` and fragment file names.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }

    /// Accepts bare codes and region-tagged ones (`en-GB`), any case.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(|c| c == '-' || c == '_').next().unwrap_or_default();
        match primary {
            "ar" => Some(Language::Arabic),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Stored preference. Only an explicit `"en"` switches away from the
    /// default.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("en") => Language::English,
            _ => Language::Arabic,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Language::Arabic => Language::English,
            Language::English => Language::Arabic,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Arabic)
    }

    /// Value for the `dir` attribute.
    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn document_title(&self) -> &'static str {
        match self {
            Language::Arabic => {
                "إبرة الظهر لتسكين آلام الولادة | Epidural Analgesia for Labour Pain"
            }
            Language::English => {
                "Epidural Analgesia for Labour Pain | إبرة الظهر لتسكين آلام الولادة"
            }
        }
    }

    /// Fragment file name, e.g. `ar.html`.
    pub fn content_file(&self) -> String {
        format!("{}.html", self.code())
    }

    /// Absolute path the client fetches the fragment from; stays the same
    /// whatever URL the page itself was opened at.
    pub fn content_path(&self) -> String {
        format!("/content/{}", self.content_file())
    }

    /// Inverse of [`Language::content_file`].
    pub fn from_content_file(file: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|lang| lang.content_file() == file)
    }

    /// Name of the language in itself, for the switch button.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Arabic => "العربية",
            Language::English => "English",
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::Arabic, Language::English]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("ar"), Some(Language::Arabic));
        assert_eq!(Language::from_code("AR-sa"), Some(Language::Arabic));
        assert_eq!(Language::from_code("en-GB"), Some(Language::English));
        assert_eq!(Language::from_code(" en "), Some(Language::English));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_from_stored_defaults_to_arabic() {
        assert_eq!(Language::from_stored(None), Language::Arabic);
        assert_eq!(Language::from_stored(Some("garbage")), Language::Arabic);
        assert_eq!(Language::from_stored(Some("ar")), Language::Arabic);
        assert_eq!(Language::from_stored(Some("en")), Language::English);
    }

    #[test]
    fn test_direction_and_titles() {
        assert_eq!(Language::Arabic.dir(), "rtl");
        assert_eq!(Language::English.dir(), "ltr");
        assert!(Language::Arabic.document_title().starts_with("إبرة"));
        assert!(Language::English.document_title().starts_with("Epidural"));
        assert_eq!(Language::Arabic.other(), Language::English);
        assert_eq!(Language::English.other().other(), Language::English);
    }

    #[test]
    fn test_content_files() {
        assert_eq!(Language::Arabic.content_path(), "/content/ar.html");
        assert!(Language::English.content_path().starts_with('/'));
        assert_eq!(Language::English.content_file(), "en.html");
        assert_eq!(
            Language::from_content_file("en.html"),
            Some(Language::English)
        );
        assert_eq!(Language::from_content_file("../secret"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Arabic).unwrap(), "\"ar\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
