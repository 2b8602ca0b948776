use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::cookies::ParsedCookies;
use crate::state::AppState;

/// Handler で ParsedCookies を受け取るための extractor
/// middleware が ParsedCookies を request.extensions() に insert 済みである前提
/// 見つからない場合は 500 を返す (cookie_parser middleware 未設定 = 配線ミス)
pub struct CookiesExtractor(pub ParsedCookies);

impl FromRequestParts<AppState> for CookiesExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ParsedCookies>()
            .cloned()
            .map(CookiesExtractor)
            .ok_or_else(|| {
                tracing::error!("ParsedCookies missing; cookie_parser middleware not applied");
                AppError::Internal
            })
    }
}
