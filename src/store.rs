//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! page view's copy of the backend's applications.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Application;

/// Where the application list stands
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Tickets for overlapping loads; a response is applied only if no newer
/// load started after it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSequence {
    latest: u32,
}

impl LoadSequence {
    pub fn start(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u32) -> bool {
        self.latest == ticket
    }

    /// Invalidate whatever is in flight
    pub fn cancel(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Applications as last returned by the backend
    pub applications: Vec<Application>,
    pub load_state: LoadState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Tracked read of the loaded applications
pub fn store_applications(store: &AppStore) -> Vec<Application> {
    store.applications().get()
}

/// Tracked read of the load state
pub fn store_load_state(store: &AppStore) -> LoadState {
    store.load_state().get()
}

/// Replace the applications after a successful load
pub fn store_set_applications(store: &AppStore, applications: Vec<Application>) {
    *store.applications().write() = applications;
    store.load_state().set(LoadState::Loaded);
}

/// Record a failed load; the previous list is kept
pub fn store_set_load_error(store: &AppStore, message: String) {
    store.load_state().set(LoadState::Failed(message));
}

/// Remove an application from the store by ID
pub fn store_remove_application(store: &AppStore, application_id: u32) {
    store.applications().write().retain(|app| app.id != application_id);
}

/// Look up one application by ID
pub fn store_find_application(store: &AppStore, application_id: u32) -> Option<Application> {
    store
        .applications()
        .read()
        .iter()
        .find(|app| app.id == application_id)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_older_load_is_stale_once_a_newer_one_starts() {
        let mut seq = LoadSequence::default();
        let on_mount = seq.start();
        let after_delete = seq.start();

        // the delete-triggered reload answers first, then the mount one
        assert!(seq.is_current(after_delete));
        assert!(!seq.is_current(on_mount));
    }

    #[test]
    fn test_cancel_invalidates_in_flight_load() {
        let mut seq = LoadSequence::default();
        let ticket = seq.start();
        seq.cancel();
        assert!(!seq.is_current(ticket));
    }
}
