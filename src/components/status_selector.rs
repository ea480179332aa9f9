//! Status Selector Component
//!
//! Reusable application status selector buttons.

use leptos::prelude::*;

use crate::models::Status;

/// Status selector buttons for the application form
#[component]
pub fn StatusSelector(
    current_status: ReadSignal<Status>,
    on_change: impl Fn(Status) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="status-selector">
            {Status::ALL.into_iter().map(|status| {
                let label = status.to_string();
                let for_check = status.clone();
                let is_selected = move || current_status.get() == for_check;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "status-btn active" } else { "status-btn" }
                        on:click=move |_| on_change(status.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
