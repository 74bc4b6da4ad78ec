//! Conversion of untrusted settings input into [`Settings`].
//!
//! Two entry points with different strictness:
//! - [`SettingsInput::normalize`] validates every field before a save.
//! - [`from_stored`] reads a file that was written earlier (possibly by an
//!   older version) and only repairs the language.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use launcher_core::error::AppError;
use launcher_core::result::AppResult;
use launcher_core::types::{Language, Settings};

/// Highest valid TCP port.
const MAX_PORT: f64 = 65535.0;

/// Candidate settings as submitted by a client. Every field is untrusted
/// and may hold any JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsInput {
    /// Remote host.
    #[serde(default)]
    pub server_host: Option<Value>,
    /// Remote port, as number or text.
    #[serde(default)]
    pub server_port: Option<Value>,
    /// Language name or code.
    #[serde(default)]
    pub default_language: Option<Value>,
}

impl SettingsInput {
    /// Builds input from plain text fields, as typed on a command line.
    pub fn from_text(host: Option<&str>, port: Option<&str>, language: Option<&str>) -> Self {
        let text = |v: Option<&str>| v.map(|s| Value::String(s.to_string()));
        Self {
            server_host: text(host),
            server_port: text(port),
            default_language: text(language),
        }
    }

    /// Validates and normalizes every field.
    ///
    /// Invalid values never fail the call; they fall back to the field's
    /// default.
    pub fn normalize(&self) -> Settings {
        Settings {
            server_host: normalize_host(self.server_host.as_ref()),
            server_port: normalize_port(self.server_port.as_ref()),
            default_language: Language::from_value(self.default_language.as_ref()),
        }
    }
}

impl From<&Settings> for SettingsInput {
    fn from(settings: &Settings) -> Self {
        Self {
            server_host: Some(Value::String(settings.server_host.clone())),
            server_port: Some(Value::String(settings.server_port.clone())),
            default_language: Some(Value::String(settings.default_language.code().to_string())),
        }
    }
}

/// Trims text; anything else becomes empty.
pub fn normalize_host(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

/// Accepts integers in `1..=65535` given as numbers or numeric text.
/// Returns the plain decimal rendering, or empty when invalid.
pub fn normalize_port(value: Option<&Value>) -> String {
    value
        .and_then(parse_port)
        .map(|port| port.to_string())
        .unwrap_or_default()
}

fn parse_port(value: &Value) -> Option<u16> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };

    if !number.is_finite() || number.fract() != 0.0 || !(1.0..=MAX_PORT).contains(&number) {
        return None;
    }
    Some(number as u16)
}

/// Reads settings from previously stored JSON text.
///
/// Fields missing from the file take their defaults; text fields are kept
/// as stored; the language is normalized. Unknown keys are ignored.
pub fn from_stored(raw: &str) -> AppResult<Settings> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(map) = value else {
        return Err(AppError::validation("Settings file does not hold a JSON object"));
    };

    let defaults = Settings::default();
    let server_host = match map.get("serverHost") {
        Some(Value::String(s)) => s.clone(),
        _ => defaults.server_host,
    };
    let server_port = match map.get("serverPort") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => defaults.server_port,
    };

    Ok(Settings {
        server_host,
        server_port,
        default_language: Language::from_value(map.get("defaultLanguage")),
    })
}
