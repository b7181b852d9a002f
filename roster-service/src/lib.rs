//! Router assembly for the roster provisioning service.
//!
//! The two handlers share nothing beyond the collaborator handles in
//! [`AppState`]: `POST /users` is the callable account provisioner and
//! `POST /events/profile-deleted` consumes the document store's delete
//! events.

use std::sync::Arc;

use axum::{Router, routing::post};
use tower_http::trace::TraceLayer;

use roster_adapters::http::{AppState, routes};
use roster_core::{IdentityProvider, ProfileStore};

pub fn router<I, P>(identity: Arc<I>, profiles: Arc<P>) -> Router
where
    I: IdentityProvider + 'static,
    P: ProfileStore + 'static,
{
    let state = AppState::new(identity, profiles);

    Router::new()
        .route("/users", post(routes::create_user::<I, P>))
        .route(
            "/events/profile-deleted",
            post(routes::profile_deleted::<I, P>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
