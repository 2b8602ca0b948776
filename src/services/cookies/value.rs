/*
 * Responsibility
 * - 解析後の cookie 値の表現 (CookieValue) と name → value の mapping
 * - 署名検証に失敗した cookie は Invalid (JSON では false) として残す
 */
use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Raw tokenizer output: cookie name → undecoded string value.
pub type RawCookies = BTreeMap<String, String>;

/// Final cookie mapping handed to request handlers.
pub type CookieMap = BTreeMap<String, CookieValue>;

/// A cookie value after tag processing.
#[derive(Debug, Clone, PartialEq)]
pub enum CookieValue {
    /// Plain string, or a `j:` value whose payload did not decode.
    Str(String),
    /// Parsed payload of a `j:` value.
    Json(Value),
    /// `s:` value whose signature failed every configured secret.
    Invalid,
}

impl CookieValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CookieValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            CookieValue::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, CookieValue::Invalid)
    }
}

impl From<String> for CookieValue {
    fn from(s: String) -> Self {
        CookieValue::Str(s)
    }
}

impl From<&str> for CookieValue {
    fn from(s: &str) -> Self {
        CookieValue::Str(s.to_string())
    }
}

impl From<Value> for CookieValue {
    fn from(v: Value) -> Self {
        CookieValue::Json(v)
    }
}

impl Serialize for CookieValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CookieValue::Str(s) => serializer.serialize_str(s),
            CookieValue::Json(v) => v.serialize(serializer),
            CookieValue::Invalid => serializer.serialize_bool(false),
        }
    }
}

/// Lift raw tokenizer output into an all-`Str` cookie mapping.
pub fn from_raw(raw: RawCookies) -> CookieMap {
    raw.into_iter()
        .map(|(name, value)| (name, CookieValue::Str(value)))
        .collect()
}
