//! Persisted user settings and the closed language vocabulary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Subtitle language understood by the remote server.
///
/// The vocabulary is closed; anything unrecognized normalizes to
/// [`Language::En`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// German.
    De,
    /// Hindi.
    Hi,
    /// Japanese.
    Ja,
}

/// Full names and codes accepted for each language.
const LANGUAGE_TABLE: &[(&str, Language)] = &[
    ("english", Language::En),
    ("en", Language::En),
    ("spanish", Language::Es),
    ("es", Language::Es),
    ("french", Language::Fr),
    ("fr", Language::Fr),
    ("german", Language::De),
    ("de", Language::De),
    ("hindi", Language::Hi),
    ("hi", Language::Hi),
    ("japanese", Language::Ja),
    ("ja", Language::Ja),
];

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Hi,
        Language::Ja,
    ];

    /// Two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Hi => "hi",
            Self::Ja => "ja",
        }
    }

    /// English display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::Hi => "Hindi",
            Self::Ja => "Japanese",
        }
    }

    /// Normalizes a language label (full name or code, any case, padded).
    pub fn from_label(label: &str) -> Self {
        let wanted = label.trim().to_lowercase();
        LANGUAGE_TABLE
            .iter()
            .find(|(key, _)| *key == wanted)
            .map(|(_, lang)| *lang)
            .unwrap_or_default()
    }

    /// Normalizes an untrusted JSON value. Non-text input maps to English.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => Self::from_label(s),
            _ => Self::default(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Persisted launcher settings.
///
/// Field order is the on-disk order; the file is written as two-space
/// indented JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Subtitle server host name or address, empty when unconfigured.
    pub server_host: String,
    /// Subtitle server port as decimal text, empty when unconfigured.
    pub server_port: String,
    /// Language forced on generated subtitles.
    pub default_language: Language,
}

impl Settings {
    /// Whether both remote host and port are set.
    pub fn is_configured(&self) -> bool {
        !self.server_host.is_empty() && !self.server_port.is_empty()
    }

    /// Pretty JSON text exactly as stored on disk.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
