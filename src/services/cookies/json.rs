/*
 * Responsibility
 * - "j:" で始まる cookie 値を JSON として decode する
 * - decode 失敗は呼び出し側に伝播させない (None を返し、元の文字列を残す)
 */
use serde_json::Value;
use tracing::debug;

use super::tag::TaggedValue;
use super::value::{CookieMap, CookieValue};

/// Decode a `j:`-tagged cookie value.
///
/// Returns `None` when the value is not tagged or the payload is not valid JSON.
pub fn json_cookie(value: &str) -> Option<Value> {
    match TaggedValue::classify(value) {
        TaggedValue::Json(payload) => decode_payload(payload),
        _ => None,
    }
}

/// Decode every `j:`-tagged string in `map`, in place.
///
/// A value is replaced only when its decoded JSON is truthy; `false`, `null`,
/// `0` and `""` leave the tagged string untouched.
pub fn json_cookies(map: &mut CookieMap) -> &mut CookieMap {
    for value in map.values_mut() {
        let CookieValue::Str(raw) = value else {
            continue;
        };
        if let Some(decoded) = json_cookie(raw).filter(is_truthy) {
            *value = CookieValue::Json(decoded);
        }
    }
    map
}

pub(crate) fn decode_payload(payload: &str) -> Option<Value> {
    match serde_json::from_str(payload) {
        Ok(v) => Some(v),
        Err(err) => {
            debug!(error = %err, "ignoring malformed json cookie");
            None
        }
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn untagged_values_are_not_applicable() {
        assert_eq!(json_cookie("foo"), None);
        assert_eq!(json_cookie("{\"a\":1}"), None);
        assert_eq!(json_cookie("s:j:{}"), None);
        assert_eq!(json_cookie(""), None);
    }

    #[test]
    fn decodes_any_json_payload() {
        assert_eq!(json_cookie("j:{\"a\":1}"), Some(json!({"a": 1})));
        assert_eq!(json_cookie("j:[1,\"two\",null]"), Some(json!([1, "two", null])));
        assert_eq!(json_cookie("j:\"str\""), Some(json!("str")));
        assert_eq!(json_cookie("j:42.5"), Some(json!(42.5)));
        assert_eq!(json_cookie("j:null"), Some(Value::Null));
    }

    #[test]
    fn malformed_payload_is_absent() {
        assert_eq!(json_cookie("j:{\"foo\": "), None);
        assert_eq!(json_cookie("j:"), None);
        assert_eq!(json_cookie("j:undefined"), None);
    }

    #[test]
    fn batch_replaces_only_truthy_results() {
        let mut map = CookieMap::new();
        map.insert("obj".into(), "j:{\"foo\":\"bar\"}".into());
        map.insert("broken".into(), "j:{\"foo\"".into());
        map.insert("zero".into(), "j:0".into());
        map.insert("off".into(), "j:false".into());
        map.insert("nil".into(), "j:null".into());
        map.insert("empty".into(), "j:\"\"".into());
        map.insert("plain".into(), "bar".into());
        map.insert("bad_sig".into(), CookieValue::Invalid);

        json_cookies(&mut map);

        assert_eq!(map["obj"], CookieValue::Json(json!({"foo": "bar"})));
        assert_eq!(map["broken"], CookieValue::from("j:{\"foo\""));
        assert_eq!(map["zero"], CookieValue::from("j:0"));
        assert_eq!(map["off"], CookieValue::from("j:false"));
        assert_eq!(map["nil"], CookieValue::from("j:null"));
        assert_eq!(map["empty"], CookieValue::from("j:\"\""));
        assert_eq!(map["plain"], CookieValue::from("bar"));
        assert_eq!(map["bad_sig"], CookieValue::Invalid);
    }

    #[test]
    fn batch_returns_the_same_mapping() {
        let mut map = CookieMap::new();
        map.insert("n".into(), "j:1".into());
        let ptr: *const CookieMap = &map;

        let out = json_cookies(&mut map);

        assert!(std::ptr::eq(ptr, out));
        assert_eq!(out["n"], CookieValue::Json(json!(1)));
    }
}
