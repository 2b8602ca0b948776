//! Signed cookie values (HMAC-SHA256).
//!
//! Wire format of a signed value: `<payload>.<base64(hmac_sha256(secret, payload))>`,
//! standard base64 alphabet with the `=` padding stripped. Cookies carry it
//! behind the `s:` tag.
//!
//! Secrets form an ordered priority list. Verification tries each one in turn
//! and accepts the first match, so a rotated secret can be placed first while
//! the previous one keeps validating older cookies.

use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::tag::{SIGNED_PREFIX, TaggedValue};

type HmacSha256 = Hmac<Sha256>;

/// Ordered list of signing secrets. Order is priority, never a set.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secrets(Vec<String>);

impl Secrets {
    pub fn new(secrets: Vec<String>) -> Self {
        Self(secrets)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The secret new values should be signed with.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

// Never print secret material.
impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets").field("len", &self.0.len()).finish()
    }
}

// A single empty secret means "not configured".
impl From<&str> for Secrets {
    fn from(secret: &str) -> Self {
        if secret.is_empty() {
            Self::empty()
        } else {
            Self(vec![secret.to_string()])
        }
    }
}

impl From<String> for Secrets {
    fn from(secret: String) -> Self {
        Self::from(secret.as_str())
    }
}

impl From<Vec<String>> for Secrets {
    fn from(secrets: Vec<String>) -> Self {
        Self(secrets)
    }
}

impl From<Vec<&str>> for Secrets {
    fn from(secrets: Vec<&str>) -> Self {
        Self(secrets.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Secrets {
    fn from(secrets: &[&str]) -> Self {
        Self(secrets.iter().map(|s| s.to_string()).collect())
    }
}

impl<T: Into<Secrets>> From<Option<T>> for Secrets {
    fn from(secrets: Option<T>) -> Self {
        secrets.map(Into::into).unwrap_or_default()
    }
}

/// Outcome of checking a cookie value for a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification<'a> {
    /// No `s:` tag: the input, untouched.
    NotSigned(&'a str),
    /// Payload accepted by one of the secrets.
    Verified(String),
    /// Tagged, but no secret accepted it.
    Tampered,
}

/// Sign `value` with `secret`, returning `value.signature`.
pub fn sign(value: &str, secret: &str) -> String {
    let sig = base64::engine::general_purpose::STANDARD_NO_PAD.encode(mac(value, secret));
    format!("{value}.{sig}")
}

/// Sign `value` and prepend the `s:` tag, ready to be used as a cookie value.
pub fn sign_cookie(value: &str, secret: &str) -> String {
    format!("{SIGNED_PREFIX}{}", sign(value, secret))
}

/// Verify a `value.signature` string against one secret.
pub fn unsign(input: &str, secret: &str) -> Option<String> {
    let (value, _) = input.rsplit_once('.')?;
    let expected = sign(value, secret);

    // slices of different length never compare equal
    if bool::from(expected.as_bytes().ct_eq(input.as_bytes())) {
        Some(value.to_string())
    } else {
        None
    }
}

/// Verify an `s:`-tagged cookie value against `secrets` in priority order.
///
/// An empty secret list rejects every tagged value; callers that want
/// "no secrets" to mean "no verification" must skip the call.
pub fn signed_cookie<'a>(value: &'a str, secrets: &Secrets) -> Verification<'a> {
    match TaggedValue::classify(value) {
        TaggedValue::Signed(payload) => verify_payload(payload, secrets),
        _ => Verification::NotSigned(value),
    }
}

pub(crate) fn verify_payload<'a>(payload: &str, secrets: &Secrets) -> Verification<'a> {
    secrets
        .iter()
        .find_map(|secret| unsign(payload, secret))
        .map(Verification::Verified)
        .unwrap_or(Verification::Tampered)
}

fn mac(value: &str, secret: &str) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("hmac accepts keys of any length");
    mac.update(value.as_bytes());
    mac.finalize().into_bytes().to_vec()
}
