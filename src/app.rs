//! Job Tracker Frontend App
//!
//! Router shell: navigation, the four pages and the notice area.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api;
use crate::components::{NavBar, NoticeArea};
use crate::config;
use crate::context::AppContext;
use crate::pages::{AnalyticsPage, DashboardPage, NotesPage, SettingsPage};
use crate::store::{store_set_applications, store_set_load_error, AppState, LoadSequence};

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(set_reload_trigger, config::load()));
    let store = Store::new(AppState::default());
    provide_context(store);
    // Only the newest load may write the store
    let load_seq = StoredValue::new(LoadSequence::default());

    // Load applications whenever a page asks for fresh data
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        if trigger == 0 {
            return;
        }
        let mut ticket = 0;
        load_seq.update_value(|seq| ticket = seq.start());
        log::debug!("[app] loading applications, trigger={}", trigger);
        spawn_local(async move {
            let result = api::list_applications().await;
            if !load_seq.with_value(|seq| seq.is_current(ticket)) {
                log::debug!("[app] dropping stale application list #{}", ticket);
                return;
            }
            match result {
                Ok(loaded) => store_set_applications(&store, loaded),
                Err(e) => store_set_load_error(&store, e.to_string()),
            }
        });
    });

    view! {
        <Router>
            <NavBar />
            <main class="main-content">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/notes") view=NotesPage />
                    <Route path=path!("/analytics") view=AnalyticsPage />
                    <Route path=path!("/settings") view=SettingsPage />
                </Routes>
            </main>
            <NoticeArea />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <a href="/">"Back to the dashboard"</a>
        </div>
    }
}
