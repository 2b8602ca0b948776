/*!
 * Parsed cookie extractor
 *
 * Responsibility:
 * - cookie_parser middleware が解析した ParsedCookies を handler に提供する
 *
 * Public API:
 * - CookiesExtractor
 */

mod core;

pub use core::CookiesExtractor;
