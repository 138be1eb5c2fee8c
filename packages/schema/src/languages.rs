use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text direction of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub direction: Direction,
}

impl LanguageConfig {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            direction: Direction::Ltr,
        }
    }
}

/// Language configuration of an app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Languages {
    pub default: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,

    pub supported: Vec<LanguageConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detect_browser: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persist_selection: Option<bool>,

    /// language code -> translation key -> text
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, BTreeMap<String, String>>,
}

impl Languages {
    pub fn new(default: impl Into<String>, supported: Vec<LanguageConfig>) -> Self {
        Self {
            default: default.into(),
            fallback: None,
            supported,
            detect_browser: None,
            persist_selection: None,
            translations: BTreeMap::new(),
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn with_translation(
        mut self,
        lang: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.translations
            .entry(lang.into())
            .or_default()
            .insert(key.into(), text.into());
        self
    }

    pub fn find(&self, code: &str) -> Option<&LanguageConfig> {
        self.supported.iter().find(|lang| lang.code == code)
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Raw lookup with no fallback
    pub fn translation(&self, lang: &str, key: &str) -> Option<&str> {
        self.translations
            .get(lang)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub fn detect_browser(&self) -> bool {
        self.detect_browser.unwrap_or(true)
    }

    pub fn persist_selection(&self) -> bool {
        self.persist_selection.unwrap_or(true)
    }
}
