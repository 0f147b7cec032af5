//! Signup and login handlers.

use axum::{Json, extract::State, http::StatusCode};
use krishibazaar_core::{Credentials, NewUser, UserProfile};

use crate::error::Result;
use crate::state::AppState;

/// Create an account.
///
/// # Errors
///
/// Returns 409 `DuplicateEmail` if the email is already registered.
pub async fn signup(
    State(state): State<AppState>,
    Json(new_user): Json<NewUser>,
) -> Result<(StatusCode, Json<UserProfile>)> {
    let profile = state.store().signup(new_user).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// Verify credentials and return the matching profile.
///
/// # Errors
///
/// Returns 401 `InvalidCredentials` unless the email and password pair is
/// on record.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<UserProfile>> {
    let profile = state.store().login(&credentials).await?;
    Ok(Json(profile))
}
