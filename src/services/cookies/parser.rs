//! Cookie header → plain / signed cookie mappings.
//!
//! `CookieParser` is built once (usually at router construction) and is
//! read-only afterwards, so one instance can serve concurrent requests.

use serde::Serialize;
use tracing::{debug, warn};

use super::json::{decode_payload, is_truthy};
use super::signature::{Secrets, Verification, verify_payload};
use super::tag::TaggedValue;
use super::tokenizer::{self, ParseOptions};
use super::value::{CookieMap, CookieValue};

/// Per-request parse result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCookies {
    /// Cookies that were never signed-tagged, JSON-decoded where applicable.
    pub cookies: CookieMap,
    /// `s:`-tagged cookies, verified (or `Invalid`). Empty without secrets.
    pub signed_cookies: CookieMap,
    /// First configured secret, for collaborators that sign new values.
    #[serde(skip)]
    pub secret: Option<String>,
}

impl ParsedCookies {
    pub fn get(&self, name: &str) -> Option<&CookieValue> {
        self.cookies.get(name)
    }

    pub fn get_signed(&self, name: &str) -> Option<&CookieValue> {
        self.signed_cookies.get(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CookieParser {
    secrets: Secrets,
    options: ParseOptions,
}

impl CookieParser {
    pub fn new(secrets: impl Into<Secrets>) -> Self {
        Self::with_options(secrets, ParseOptions::default())
    }

    pub fn with_options(secrets: impl Into<Secrets>, options: ParseOptions) -> Self {
        Self {
            secrets: secrets.into(),
            options,
        }
    }

    pub fn secrets(&self) -> &Secrets {
        &self.secrets
    }

    /// Parse one `Cookie` header.
    ///
    /// Signature tags are only interpreted when at least one secret is
    /// configured; otherwise `s:` values stay as raw strings in `cookies`.
    pub fn parse(&self, header: Option<&str>) -> ParsedCookies {
        let mut parsed = ParsedCookies {
            secret: self.secrets.first().map(str::to_string),
            ..ParsedCookies::default()
        };

        let Some(header) = header.filter(|h| !h.is_empty()) else {
            return parsed;
        };

        let verify = !self.secrets.is_empty();

        for (name, raw) in tokenizer::parse(header, &self.options) {
            match TaggedValue::classify(&raw) {
                TaggedValue::Signed(payload) if verify => {
                    let value = match verify_payload(payload, &self.secrets) {
                        Verification::Verified(payload) => decode_json_or_keep(payload),
                        _ => {
                            warn!(cookie = %name, "signed cookie failed verification");
                            CookieValue::Invalid
                        }
                    };
                    parsed.signed_cookies.insert(name, value);
                }
                TaggedValue::Json(payload) => {
                    let value = match decode_payload(payload).filter(is_truthy) {
                        Some(json) => CookieValue::Json(json),
                        None => CookieValue::Str(raw),
                    };
                    parsed.cookies.insert(name, value);
                }
                _ => {
                    parsed.cookies.insert(name, CookieValue::Str(raw));
                }
            }
        }

        debug!(
            cookies = parsed.cookies.len(),
            signed_cookies = parsed.signed_cookies.len(),
            "parsed cookie header"
        );

        parsed
    }
}

// A verified payload may itself be `j:`-tagged.
fn decode_json_or_keep(payload: String) -> CookieValue {
    let decoded = match TaggedValue::classify(&payload) {
        TaggedValue::Json(json) => decode_payload(json).filter(is_truthy),
        _ => None,
    };
    match decoded {
        Some(json) => CookieValue::Json(json),
        None => CookieValue::Str(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::cookies::json::json_cookies;
    use crate::services::cookies::partition::signed_cookies;
    use crate::services::cookies::signature::sign_cookie;
    use crate::services::cookies::value::from_raw;
    use serde_json::json;

    #[test]
    fn plain_cookies_without_secret() {
        let parsed = CookieParser::default().parse(Some("Cho=Kim;Greet=Hello"));

        assert_eq!(parsed.cookies.len(), 2);
        assert_eq!(parsed.get("Cho"), Some(&CookieValue::from("Kim")));
        assert_eq!(parsed.get("Greet"), Some(&CookieValue::from("Hello")));
        assert!(parsed.signed_cookies.is_empty());
        assert_eq!(parsed.secret, None);
    }

    #[test]
    fn absent_or_empty_header_yields_empty_mappings() {
        let parser = CookieParser::new("K");
        for header in [None, Some("")] {
            let parsed = parser.parse(header);
            assert!(parsed.cookies.is_empty());
            assert!(parsed.signed_cookies.is_empty());
            assert_eq!(parsed.secret.as_deref(), Some("K"));
        }
    }

    #[test]
    fn verified_signed_cookie_moves_to_signed() {
        let header = format!("id={}", sign_cookie("AAA", "K"));
        let parsed = CookieParser::new("K").parse(Some(&header));

        assert_eq!(parsed.get_signed("id"), Some(&CookieValue::from("AAA")));
        assert!(parsed.cookies.is_empty());
    }

    #[test]
    fn bad_signature_is_invalid() {
        let parsed = CookieParser::new("K").parse(Some("id=s:AAA.badsig"));

        assert_eq!(parsed.get_signed("id"), Some(&CookieValue::Invalid));
        assert!(parsed.cookies.is_empty());
    }

    #[test]
    fn json_cookie_without_secret() {
        let parsed = CookieParser::default().parse(Some("obj=j:{\"a\":1}"));
        assert_eq!(parsed.get("obj"), Some(&CookieValue::Json(json!({"a": 1}))));
    }

    #[test]
    fn signed_json_cookie_is_decoded() {
        let header = format!("obj={}", sign_cookie("j:{\"a\":1}", "K"));
        let parsed = CookieParser::new("K").parse(Some(&header));
        assert_eq!(
            parsed.get_signed("obj"),
            Some(&CookieValue::Json(json!({"a": 1})))
        );
    }

    #[test]
    fn signed_tags_are_plain_without_secrets() {
        let header = format!("id={}", sign_cookie("AAA", "K"));
        let parsed = CookieParser::new(Secrets::empty()).parse(Some(&header));

        assert_eq!(parsed.get("id"), Some(&CookieValue::Str(sign_cookie("AAA", "K"))));
        assert!(parsed.signed_cookies.is_empty());
    }

    #[test]
    fn rotated_secret_still_verifies() {
        let header = format!("old={}; new={}", sign_cookie("o", "v1"), sign_cookie("n", "v2"));
        let parsed = CookieParser::new(vec!["v2", "v1"]).parse(Some(&header));

        assert_eq!(parsed.get_signed("old"), Some(&CookieValue::from("o")));
        assert_eq!(parsed.get_signed("new"), Some(&CookieValue::from("n")));
        assert_eq!(parsed.secret.as_deref(), Some("v2"));
    }

    #[test]
    fn single_pass_matches_batch_operations() {
        let header = format!(
            "a=1; b={}; c=s:x.bad; d=j:[1,2]; e=j:0; f={}",
            sign_cookie("j:{\"k\":true}", "K"),
            sign_cookie("plain", "K"),
        );
        let parser = CookieParser::new("K");
        let parsed = parser.parse(Some(&header));

        let mut plain = from_raw(tokenizer::parse(&header, &ParseOptions::default()));
        let mut signed = signed_cookies(&mut plain, parser.secrets());
        json_cookies(&mut signed);
        json_cookies(&mut plain);

        assert_eq!(parsed.cookies, plain);
        assert_eq!(parsed.signed_cookies, signed);
    }

    #[test]
    fn serializes_without_secret() {
        let parsed = CookieParser::new("K").parse(Some("id=s:AAA.badsig; a=b"));
        let out = serde_json::to_value(&parsed).unwrap();
        assert_eq!(out, json!({"cookies": {"a": "b"}, "signedCookies": {"id": false}}));
    }
}
