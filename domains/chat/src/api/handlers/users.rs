//! User API handlers

use axum::{extract::State, Json};
use chatline_common::{Result, ValidatedJson};
use serde::Serialize;

use crate::api::middleware::ChatState;
use crate::domain::entities::User;

/// Response for user registration
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub id: String,
    pub username: String,
}

/// Register a user, or return the existing one with the same username
pub async fn create_user(
    State(state): State<ChatState>,
    ValidatedJson(user): ValidatedJson<User>,
) -> Result<Json<CreateUserResponse>> {
    let repos = state.repos()?;

    if let Some(existing) = repos.users.find_by_username(&user.username).await? {
        tracing::debug!(username = %user.username, "User already exists");
        return Ok(Json(CreateUserResponse {
            id: existing.id.to_hex(),
            username: user.username,
        }));
    }

    let id = repos.users.create(&user).await?;
    tracing::info!(user_id = %id, username = %user.username, "User created");

    Ok(Json(CreateUserResponse {
        id,
        username: user.username,
    }))
}
