use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A target language for generated templates.
///
/// The set is closed: adding a language means adding a variant here and
/// handling it in every exhaustive `match` downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Java,
    Cpp,
    JavaScript,
}

impl Language {
    /// Every supported language, in the order they are advertised.
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::JavaScript,
    ];

    /// The wire identifier (`"python"`, `"cpp"`, ...).
    pub fn id(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::JavaScript => "javascript",
        }
    }

    /// Human-readable name including the targeted runtime version.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Python => "Python 3.12",
            Self::Java => "Java 17",
            Self::Cpp => "C++20",
            Self::JavaScript => "JavaScript (Node 20)",
        }
    }

    /// Conventional source file extension.
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::JavaScript => "js",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A language identifier outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.id() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_ids_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.id().parse::<Language>(), Ok(lang));
            assert_eq!(lang.to_string(), lang.id());
        }
    }

    #[test]
    fn test_unknown_language() {
        let err = "rust".parse::<Language>().unwrap_err();
        assert_eq!(err, UnknownLanguage("rust".into()));
        assert_eq!(err.to_string(), "unsupported language: rust");
    }

    #[test]
    fn test_language_ids_are_case_sensitive() {
        assert!("Python".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde_uses_ids() {
        let json = serde_json::to_string(&Language::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");
        let lang: Language = serde_json::from_str("\"cpp\"").unwrap();
        assert_eq!(lang, Language::Cpp);
    }
}
