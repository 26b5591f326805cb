use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{info, instrument, warn};

use crate::{error::AppError, state::AppState};

use super::{
    dto::{LoginRequest, LoginResponse, MeResponse, MessageResponse},
    extractors::{AuthUser, ACCESS_TOKEN_COOKIE},
    service::login_with_email_and_password,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}

/// Session cookie: http-only and cross-site, lifetime governed solely by
/// the token's embedded expiry (no Max-Age).
fn access_token_cookie(value: String) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, value))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .path("/")
        .build()
}

#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let (user, token) =
        match login_with_email_and_password(&state, &payload.email, &payload.password).await {
            Ok(pair) => pair,
            Err(e) => {
                warn!(email = %payload.email, "login rejected");
                return Err(e);
            }
        };

    info!(user_id = %user.id, email = %user.email, "user logged in");
    let jar = jar.add(access_token_cookie(token.clone()));
    Ok((
        jar,
        Json(LoginResponse {
            user,
            access_token: token,
        }),
    ))
}

#[instrument(skip(jar))]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(access_token_cookie(String::new()));
    (
        jar,
        Json(MessageResponse {
            message: "Logged out successfully".into(),
        }),
    )
}

#[instrument(skip(claims))]
pub async fn me(AuthUser(claims): AuthUser) -> Json<MeResponse> {
    Json(MeResponse { user: claims })
}
