//! Dashboard Page
//!
//! Calendar, application cards and the add-application modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{empty_slots, ApplicationCard, ApplicationForm, CalendarView, EmptyCard, Modal};
use crate::context::use_app_context;
use crate::store::{store_applications, store_load_state, store_remove_application, use_app_store, LoadState};

/// Cards shown before the row stops padding with placeholders
const MIN_CARD_SLOTS: usize = 3;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (form_open, set_form_open) = signal(false);

    // Fresh list whenever the page is entered
    Effect::new(move |_| ctx.reload());

    let delete_application = move |id: u32| {
        spawn_local(async move {
            match api::delete_application(id).await {
                Ok(()) => {
                    store_remove_application(&store, id);
                    ctx.reload();
                }
                Err(e) => ctx.notify_error(format!("Error deleting application: {}", e)),
            }
        });
    };

    let close_form = Callback::new(move |_| set_form_open.set(false));

    view! {
        <div class="dashboard">
            <CalendarView />

            <div class="applications-header">
                <h2>"Applications"</h2>
                <button class="add-application-btn" on:click=move |_| set_form_open.set(true)>
                    "+ Add application"
                </button>
            </div>

            {move || match store_load_state(&store) {
                LoadState::Failed(msg) => Some(view! {
                    <p class="load-error">{format!("Could not load applications: {}", msg)}</p>
                }),
                _ => None,
            }}

            <div class="app-cards">
                <For
                    each=move || store_applications(&store)
                    key=|app| (app.id, app.status.clone(), app.company_name.clone())
                    children=move |app| view! {
                        <ApplicationCard app=app on_delete=delete_application />
                    }
                />
                {move || {
                    let padding = empty_slots(store_applications(&store).len(), MIN_CARD_SLOTS);
                    (0..padding).map(|_| view! { <EmptyCard /> }).collect_view()
                }}
            </div>

            <Modal
                open=form_open
                title="Add Application".to_string()
                on_close=close_form
                modal_id="application-modal"
            >
                <ApplicationForm
                    on_saved=move |_| {
                        ctx.reload();
                        set_form_open.set(false);
                    }
                    on_cancel=close_form
                />
            </Modal>
        </div>
    }
}
