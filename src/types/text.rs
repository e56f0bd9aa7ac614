//! Bilingual labels

use super::Language;
use serde::{Deserialize, Serialize};

/// A label carried in both supported languages
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Simplified Chinese text
    pub zh: String,
    /// English text
    pub en: String,
}

impl LocalizedText {
    /// Create a label from its Chinese and English forms
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        Self { zh: zh.into(), en: en.into() }
    }

    /// Text in the requested language
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Zh => &self.zh,
            Language::En => &self.en,
        }
    }
}
