use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use crate::{error::AppError, state::AppState};

use super::jwt::{Claims, JwtKeys};

/// Name of the http-only session cookie.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// The gate in front of mutating routes: pulls the access token out of the
/// request cookies and verifies it. Rejected requests never reach a handler.
/// The store is never consulted; the signed claims are trusted until expiry.
#[derive(Debug)]
pub struct AuthUser(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or(AppError::Unauthorized("no token provided"))?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(&token).map_err(|e| {
            warn!(error = %e, "invalid or expired token");
            AppError::Unauthorized("invalid token")
        })?;

        Ok(AuthUser(claims))
    }
}
