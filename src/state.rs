/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: cookie_parser: 起動時に一度だけ組み立てた CookieParser
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::cookies::CookieParser;

#[derive(Clone, Debug)]
pub struct AppState {
    pub cookie_parser: Arc<CookieParser>,
}

impl AppState {
    pub fn new(cookie_parser: Arc<CookieParser>) -> Self {
        Self { cookie_parser }
    }
}
