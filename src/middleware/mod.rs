/*
 * Responsibility
 * - middleware の公開インターフェース
 * - cookie_parser::apply(...), http::apply(...)
 */
pub mod cookie_parser;
pub mod http;
