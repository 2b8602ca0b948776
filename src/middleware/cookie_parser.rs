//! Cookie ヘッダを解析 → ParsedCookies を extensions に入れる
//!
//! - 最初の `Cookie` ヘッダだけを読む (UTF-8 でなければヘッダ無しとして扱う)
//! - 既に ParsedCookies が extensions にある場合は何もしない (二重適用しても再解析しない)
//! - 失敗は値として返る (署名 NG は `CookieValue::Invalid`) ので、このレイヤーはリクエストを拒否しない

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::services::cookies::ParsedCookies;
use crate::state::AppState;

/// Router 全体に cookie 解析を掛ける。
///
/// 例：
/// ```ignore
/// let router = middleware::cookie_parser::apply(router, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, cookie_middleware))
}

async fn cookie_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if req.extensions().get::<ParsedCookies>().is_some() {
        return next.run(req).await;
    }

    let header = req.headers().get(header::COOKIE).and_then(|v| match v.to_str() {
        Ok(s) => Some(s),
        Err(err) => {
            tracing::debug!(error = ?err, "ignoring non-utf8 cookie header");
            None
        }
    });

    let parsed = state.cookie_parser.parse(header);

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(parsed);

    next.run(req).await
}
