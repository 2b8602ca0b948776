//! Prefix tags on cookie values.
//!
//! A value starting with `s:` carries a signed payload, `j:` a JSON payload.
//! Detection is purely syntactic: any string can match by coincidence.

pub const SIGNED_PREFIX: &str = "s:";
pub const JSON_PREFIX: &str = "j:";

/// A raw cookie value classified by its two-character prefix.
///
/// `Signed` and `Json` carry the payload with the tag already stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaggedValue<'a> {
    Plain(&'a str),
    Signed(&'a str),
    Json(&'a str),
}

impl<'a> TaggedValue<'a> {
    pub fn classify(raw: &'a str) -> Self {
        if let Some(payload) = raw.strip_prefix(SIGNED_PREFIX) {
            TaggedValue::Signed(payload)
        } else if let Some(payload) = raw.strip_prefix(JSON_PREFIX) {
            TaggedValue::Json(payload)
        } else {
            TaggedValue::Plain(raw)
        }
    }
}
