pub mod routes;

use std::sync::Arc;

use roster_core::{IdentityProvider, ProfileStore};

/// Long-lived collaborator handles shared by every request.
///
/// Constructed once at process start and handed to the router; handlers
/// never reach for ambient globals.
pub struct AppState<I, P>
where
    I: IdentityProvider,
    P: ProfileStore,
{
    pub identity: Arc<I>,
    pub profiles: Arc<P>,
}

impl<I, P> AppState<I, P>
where
    I: IdentityProvider,
    P: ProfileStore,
{
    pub fn new(identity: Arc<I>, profiles: Arc<P>) -> Self {
        Self { identity, profiles }
    }
}

impl<I, P> Clone for AppState<I, P>
where
    I: IdentityProvider,
    P: ProfileStore,
{
    fn clone(&self) -> Self {
        Self {
            identity: self.identity.clone(),
            profiles: self.profiles.clone(),
        }
    }
}
