use serde::{Deserialize, Serialize};

use crate::services::cookies::CookieMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookiesResponse {
    pub cookies: CookieMap,
    pub signed_cookies: CookieMap,
}

#[derive(Debug, Deserialize)]
pub struct SignQuery {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct SignResponse {
    pub value: String,
}
