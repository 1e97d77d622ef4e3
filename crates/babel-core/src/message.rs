use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// The end customer. Writes in their preferred language.
    User,
    /// The human or bot representative. Writes in the canonical language.
    Agent,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Agent => "agent",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single inbound translation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub source: Source,
    pub user_id: String,
    pub message: String,
}

/// What the caller gets back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub translated_message: String,
}

impl TranslationResult {
    /// Successful result carrying the (possibly untranslated) message.
    pub fn ok(translated_message: String) -> Self {
        Self {
            status_code: 200,
            translated_message,
        }
    }
}

/// A stored language preference.
///
/// `pref_lang` is optional because a record may exist without the field;
/// readers fall back to the canonical language in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePreference {
    pub user_id: String,
    #[serde(default)]
    pub pref_lang: Option<String>,
}

/// Raw output of a translation backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateOutput {
    /// `None` when the backend answered without a translated text field.
    pub translated_text: Option<String>,
}
