use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Language {
    #[serde(rename = "zh-cn")]
    #[default]
    ZhCn,
    #[serde(rename = "en")]
    En,
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    /// Anything other than `zh-cn` renders in English.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("zh-cn") {
            Ok(Language::ZhCn)
        } else {
            Ok(Language::En)
        }
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(language) => language,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::ZhCn => write!(f, "zh-cn"),
            Language::En => write!(f, "en"),
        }
    }
}

/// Namespace -> source key -> translated text.
pub type Translations = BTreeMap<String, BTreeMap<String, String>>;

/// Translation lookup consumed by the summary formatter.
pub trait Translator {
    /// Falls back to `key` itself when no entry exists.
    fn translate(&self, namespace: &str, key: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Translations,
}

impl Catalog {
    pub fn builtin(language: Language) -> Self {
        let mut entries: Translations = BTreeMap::new();
        let pairs: &[(&str, &str, &str)] = match language {
            Language::ZhCn => &[
                ("verify", "请选择", "请选择"),
                ("common", "，", "，"),
                ("common", "：", "："),
            ],
            Language::En => &[
                ("verify", "请选择", "Please select"),
                ("common", "，", ", "),
                ("common", "：", ": "),
            ],
        };

        for (namespace, key, text) in pairs {
            entries
                .entry(namespace.to_string())
                .or_default()
                .insert(key.to_string(), text.to_string());
        }

        Self { entries }
    }

    /// Layer user-supplied entries over the current ones.
    pub fn with_overrides(mut self, overrides: &Translations) -> Self {
        for (namespace, keys) in overrides {
            let slot = self.entries.entry(namespace.clone()).or_default();
            for (key, text) in keys {
                slot.insert(key.clone(), text.clone());
            }
        }
        self
    }
}

impl Translator for Catalog {
    fn translate(&self, namespace: &str, key: &str) -> String {
        self.entries
            .get(namespace)
            .and_then(|keys| keys.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
