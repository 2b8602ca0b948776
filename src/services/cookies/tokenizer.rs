/*
 * Responsibility
 * - Cookie ヘッダ文字列 → name/value の flat mapping への分解
 * - 分解そのものは cookie crate に任せる (ここでは再実装しない)
 * - 値の decode 方法 (ParseOptions.decode) は解釈せずにそのまま適用する
 */
use std::fmt;
use std::sync::Arc;

use cookie::Cookie;
use percent_encoding::percent_decode_str;
use tracing::debug;

use super::value::RawCookies;

/// Value decoder applied to every raw cookie value.
///
/// Returning `None` keeps the raw value.
pub type ValueDecoder = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Options passed through to the tokenizer.
#[derive(Clone)]
pub struct ParseOptions {
    pub decode: ValueDecoder,
}

impl ParseOptions {
    pub fn new(decode: ValueDecoder) -> Self {
        Self { decode }
    }

    /// Keep values exactly as they appear in the header.
    pub fn raw() -> Self {
        Self::new(Arc::new(|_: &str| -> Option<String> { None }))
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new(Arc::new(percent_decode))
    }
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions").finish_non_exhaustive()
    }
}

/// Default value decoder: percent-decoding into UTF-8.
pub fn percent_decode(value: &str) -> Option<String> {
    if !value.contains('%') {
        return None;
    }
    match percent_decode_str(value).decode_utf8() {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(err) => {
            debug!(error = %err, "cookie value is not valid utf-8 after percent-decoding");
            None
        }
    }
}

/// Split a `Cookie` header into name → value.
///
/// Pairs without `=` or with an empty name are skipped. When a name repeats,
/// the first value wins.
pub fn parse(header: &str, options: &ParseOptions) -> RawCookies {
    let mut out = RawCookies::new();

    for pair in Cookie::split_parse(header) {
        let cookie = match pair {
            Ok(c) => c,
            Err(err) => {
                debug!(error = %err, "skipping unparsable cookie pair");
                continue;
            }
        };

        if out.contains_key(cookie.name()) {
            continue;
        }

        let raw = cookie.value_trimmed();
        let value = (options.decode)(raw).unwrap_or_else(|| raw.to_string());
        out.insert(cookie.name().to_string(), value);
    }

    out
}
