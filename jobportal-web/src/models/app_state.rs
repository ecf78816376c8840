use crate::session::SessionStore;
use shared::models::Session;
use yewdux::{Context, Store};

/// Global view state: the session snapshot every guard, header, and apply
/// button reads. Writes happen only on login, registration, and logout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    /// Current session, hydrated from durable storage at startup.
    pub session: Session,
}

impl Store for AppState {
    // Hydrating here, before the store hands out its first snapshot, means
    // the route guard never observes a signed-out default while a token is
    // actually held.
    fn new(_cx: &Context) -> Self {
        Self {
            session: SessionStore::browser().snapshot(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}
