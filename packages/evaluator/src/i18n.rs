//! Translation lookup.
//!
//! One fallback chain for every caller: the server render path uses it
//! directly and client code reaches it through the wasm bindings.
//! Order: current language, configured fallback, default language, the key itself.

use pagekit_schema::{Direction, Languages};
use serde::Serialize;
use std::collections::BTreeMap;

/// Language code used when an app has no language configuration
pub const DEFAULT_LANG: &str = "en-US";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationSource {
    Current,
    Fallback,
    Default,
    Key,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub text: String,
    pub source: TranslationSource,
}

impl Translation {
    pub fn is_missing(&self) -> bool {
        self.source == TranslationSource::Key
    }
}

pub fn resolve_translation(key: &str, lang: &str, languages: Option<&Languages>) -> Translation {
    if let Some(languages) = languages {
        let chain = [
            (Some(lang), TranslationSource::Current),
            (languages.fallback.as_deref(), TranslationSource::Fallback),
            (Some(languages.default.as_str()), TranslationSource::Default),
        ];
        for (code, source) in chain {
            if let Some(text) = code.and_then(|code| languages.translation(code, key)) {
                return Translation {
                    text: text.to_string(),
                    source,
                };
            }
        }
    }

    Translation {
        text: key.to_string(),
        source: TranslationSource::Key,
    }
}

/// Resolved text of `key` for every supported language, keyed by language code
pub fn translations_for_key(key: &str, languages: Option<&Languages>) -> BTreeMap<String, String> {
    languages
        .map(|languages| {
            languages
                .supported
                .iter()
                .map(|lang| {
                    let translation = resolve_translation(key, &lang.code, Some(languages));
                    (lang.code.clone(), translation.text)
                })
                .collect()
        })
        .unwrap_or_default()
}

/// The language a render runs in: the requested one when supported, else the default
pub fn active_language(requested: Option<&str>, languages: Option<&Languages>) -> String {
    match (requested, languages) {
        (Some(code), Some(languages)) if languages.is_supported(code) => code.to_string(),
        (_, Some(languages)) => languages.default.clone(),
        (Some(code), None) => code.to_string(),
        (None, None) => DEFAULT_LANG.to_string(),
    }
}

pub fn direction_for(lang: &str, languages: Option<&Languages>) -> Direction {
    languages
        .and_then(|languages| languages.find(lang))
        .map(|lang| lang.direction)
        .unwrap_or_default()
}
