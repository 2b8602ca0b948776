/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /cookies を nest/merge
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{
    cookies::{list_cookies, sign_value},
    health::health,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/cookies", get(list_cookies))
        .route("/cookies/sign", get(sign_value))
}
