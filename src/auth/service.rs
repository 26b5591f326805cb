use axum::extract::FromRef;

use crate::{error::AppError, state::AppState, users::repo::User, users::PublicUser};

use super::{jwt::JwtKeys, password::verify_password};

/// Credential check plus token issuance. Reads the user store once and has
/// no side effects; unknown email and wrong password collapse into the same
/// `InvalidCredentials` rejection so the response does not reveal which
/// half of the pair was wrong.
pub async fn login_with_email_and_password(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<(PublicUser, String), AppError> {
    let email = email.trim().to_lowercase();

    let user = User::find_by_email(&state.db, &email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    // Password verification is CPU-bound; run it on the blocking pool so
    // other in-flight requests keep making progress.
    let stored_hash = user.password_hash.clone();
    let candidate = password.to_string();
    let ok = tokio::task::spawn_blocking(move || verify_password(&candidate, &stored_hash))
        .await
        .map_err(|e| anyhow::anyhow!(e))??;

    if !ok {
        return Err(AppError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(state);
    let token = keys.sign(user.id, &user.email)?;

    Ok((PublicUser::from(user), token))
}
