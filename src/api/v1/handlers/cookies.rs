/*
 * Responsibility
 * - GET /cookies: middleware が解析した cookie をそのまま JSON で返す
 * - GET /cookies/sign: 先頭の secret で値に署名し、"s:" 付きの cookie 値を返す
 */
use axum::{Json, extract::Query};

use crate::{
    api::v1::{
        dto::cookies::{CookiesResponse, SignQuery, SignResponse},
        extractors::CookiesExtractor,
    },
    error::AppError,
    services::cookies::sign_cookie,
};

pub async fn list_cookies(CookiesExtractor(parsed): CookiesExtractor) -> Json<CookiesResponse> {
    Json(CookiesResponse {
        cookies: parsed.cookies,
        signed_cookies: parsed.signed_cookies,
    })
}

pub async fn sign_value(
    CookiesExtractor(parsed): CookiesExtractor,
    Query(query): Query<SignQuery>,
) -> Result<Json<SignResponse>, AppError> {
    let secret = parsed
        .secret
        .as_deref()
        .ok_or_else(|| AppError::bad_request("NO_SECRET", "no cookie secret configured"))?;

    Ok(Json(SignResponse {
        value: sign_cookie(&query.value, secret),
    }))
}
