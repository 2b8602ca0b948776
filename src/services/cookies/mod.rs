/*!
 * Cookie header parsing
 *
 * Responsibility:
 * - Cookie ヘッダの分解 (tokenizer)
 * - "s:" 署名付き値の検証 (signature / partition)
 * - "j:" JSON 値の decode (json)
 * - 上記をまとめた per-request の解析 (parser)
 *
 * HTTP / axum には依存しない (middleware 側から呼ぶ)
 */

pub mod json;
pub mod parser;
pub mod partition;
pub mod signature;
pub mod tag;
pub mod tokenizer;
pub mod value;

pub use json::{json_cookie, json_cookies};
pub use parser::{CookieParser, ParsedCookies};
pub use partition::signed_cookies;
pub use signature::{Secrets, Verification, sign, sign_cookie, signed_cookie, unsign};
pub use tag::TaggedValue;
pub use tokenizer::{ParseOptions, ValueDecoder};
pub use value::{CookieMap, CookieValue, RawCookies};
