use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{auth::password::hash_password, error::AppError, state::AppState};

use super::{
    dto::{CreateUserRequest, PublicUser},
    repo::{CreateUserError, User},
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users/create-user", post(create_user))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(mut payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<PublicUser>), AppError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AppError::BadRequest("Invalid email".into()));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(AppError::BadRequest("Password too short".into()));
    }

    // Friendly rejection for the common case; the insert below still wins
    // any race on the unique constraint.
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(AppError::Conflict("Email already registered".into()));
    }

    // Hashing is CPU-bound; keep it off the async workers.
    let hashing = state.config.hashing.clone();
    let password = payload.password.clone();
    let hash = tokio::task::spawn_blocking(move || hash_password(&hashing, &password))
        .await
        .map_err(|e| anyhow::anyhow!(e))??;

    let user = User::create(&state.db, &payload.name, &payload.email, &hash).await?;

    info!(user_id = %user.id, email = %user.email, "user created");
    Ok((StatusCode::CREATED, Json(PublicUser::from(user))))
}

impl From<CreateUserError> for AppError {
    fn from(e: CreateUserError) -> Self {
        match e {
            CreateUserError::DuplicateEmail => AppError::Conflict("Email already registered".into()),
            CreateUserError::Database(e) => AppError::Internal(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_maps_to_conflict() {
        let err = AppError::from(CreateUserError::DuplicateEmail);
        assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
        assert_eq!(err.message(), "Email already registered");
    }

    #[test]
    fn other_create_errors_stay_internal() {
        let err = AppError::from(CreateUserError::Database(sqlx::Error::RowNotFound));
        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        // Store detail never reaches the client.
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("admin@gmail.com"));
        assert!(is_valid_email("a.b+c@example.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("spaces in@mail.com"));
    }
}
