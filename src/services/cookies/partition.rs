/*
 * Responsibility
 * - 署名付き ("s:") cookie を plain mapping から取り出し、signed mapping へ移す
 * - plain / signed のどちらか一方にだけ必ず入る (disjoint cover)
 */
use tracing::warn;

use super::signature::{Secrets, Verification, signed_cookie};
use super::value::{CookieMap, CookieValue};

/// Move every `s:`-tagged cookie out of `map` into a new signed mapping.
///
/// Verified cookies land as their payload, failed ones as
/// [`CookieValue::Invalid`]. An entry moves iff the verifier did not hand the
/// input back unchanged, so untagged strings and non-string values stay put.
pub fn signed_cookies(map: &mut CookieMap, secrets: &Secrets) -> CookieMap {
    let mut signed = CookieMap::new();

    map.retain(|name, value| {
        let CookieValue::Str(raw) = value else {
            return true;
        };
        match signed_cookie(raw, secrets) {
            Verification::NotSigned(_) => true,
            Verification::Verified(payload) => {
                signed.insert(name.clone(), CookieValue::Str(payload));
                false
            }
            Verification::Tampered => {
                warn!(cookie = %name, "signed cookie failed verification");
                signed.insert(name.clone(), CookieValue::Invalid);
                false
            }
        }
    });

    signed
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::services::cookies::signature::sign_cookie;

    fn sample(secret: &str) -> CookieMap {
        let mut map = CookieMap::new();
        map.insert("plain".into(), "hello".into());
        map.insert("good".into(), sign_cookie("AAA", secret).into());
        map.insert("bad".into(), "s:AAA.badsig".into());
        map.insert("obj".into(), "j:{\"a\":1}".into());
        map
    }

    #[test]
    fn moves_signed_entries_out_of_plain() {
        let mut map = sample("K");
        let signed = signed_cookies(&mut map, &Secrets::from("K"));

        assert_eq!(signed["good"], CookieValue::from("AAA"));
        assert_eq!(signed["bad"], CookieValue::Invalid);
        assert_eq!(signed.len(), 2);

        assert_eq!(map["plain"], CookieValue::from("hello"));
        assert_eq!(map["obj"], CookieValue::from("j:{\"a\":1}"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn partition_is_a_disjoint_cover() {
        let mut map = sample("K");
        let before: BTreeSet<String> = map.keys().cloned().collect();

        let signed = signed_cookies(&mut map, &Secrets::from(vec!["X", "K"]));

        let plain: BTreeSet<String> = map.keys().cloned().collect();
        let signed_keys: BTreeSet<String> = signed.keys().cloned().collect();
        assert!(plain.is_disjoint(&signed_keys));
        assert_eq!(&plain | &signed_keys, before);
    }

    #[test]
    fn empty_secrets_mark_tagged_values_invalid() {
        let mut map = sample("K");
        let signed = signed_cookies(&mut map, &Secrets::empty());

        assert_eq!(signed["good"], CookieValue::Invalid);
        assert_eq!(signed["bad"], CookieValue::Invalid);
    }

    #[test]
    fn non_string_values_stay_in_place() {
        let mut map = CookieMap::new();
        map.insert("prev".into(), CookieValue::Invalid);
        let signed = signed_cookies(&mut map, &Secrets::from("K"));

        assert!(signed.is_empty());
        assert_eq!(map["prev"], CookieValue::Invalid);
    }
}
