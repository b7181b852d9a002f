use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use roster_application::RevokeAccountUseCase;
use roster_core::{AccountId, IdentityProvider, ProfileStore};

use super::error::ApiError;
use crate::http::AppState;

/// Delete-event payload delivered by the document store.
#[derive(Debug, Deserialize)]
pub struct ProfileDeletedEvent {
    /// Path of the deleted document, e.g. `users/u123`.
    pub path: String,
}

/// Profile deletion watcher: whenever a `users/{userId}` document is
/// deleted, delete the matching identity account. A 5xx response tells the
/// delivering system to apply its own redelivery policy.
#[tracing::instrument(name = "ProfileDeleted", skip(state))]
pub async fn profile_deleted<I, P>(
    State(state): State<AppState<I, P>>,
    Json(event): Json<ProfileDeletedEvent>,
) -> Result<impl IntoResponse, ApiError>
where
    I: IdentityProvider + 'static,
    P: ProfileStore + 'static,
{
    let user_id = user_id_from_path(&event.path).ok_or_else(|| {
        ApiError::InvalidArgument(format!(
            "event path {:?} is not a users document",
            event.path
        ))
    })?;

    let use_case = RevokeAccountUseCase::new(state.identity.clone());
    use_case.execute(&AccountId::new(user_id)).await?;

    // No caller consumes a result value.
    Ok(StatusCode::NO_CONTENT)
}

/// The subscription is bound to `users/{userId}`; anything else is a
/// misdelivery.
fn user_id_from_path(path: &str) -> Option<&str> {
    let user_id = path.strip_prefix("users/")?;
    if user_id.is_empty() || user_id.contains('/') {
        return None;
    }
    Some(user_id)
}
