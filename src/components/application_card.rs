//! Application Card Component
//!
//! Dashboard card; clicking it opens the application's notes.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::DeleteConfirmButton;
use crate::models::Application;

#[component]
pub fn ApplicationCard(
    app: Application,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let navigate = use_navigate();
    let id = app.id;
    let status_class = format!("app-status status-{}", app.status.as_str().to_lowercase());

    view! {
        <div
            class="app-card"
            on:click=move |_| navigate(&format!("/notes?app={}", id), Default::default())
        >
            <DeleteConfirmButton
                button_class="delete-card"
                on_confirm=move |_| on_delete.run(id)
            />
            <h3 class="company-name">{app.company_name.clone()}</h3>
            <p class="job-title">{app.job_title.clone()}</p>
            <p class=status_class>{app.status.to_string()}</p>
            <p class="app-type">{app.method_label().to_string()}</p>
        </div>
    }
}

/// Placeholder keeping the card row from collapsing
#[component]
pub fn EmptyCard() -> impl IntoView {
    view! { <div class="app-card empty-card"></div> }
}

/// Placeholders needed to show at least `min_slots` cards
pub fn empty_slots(card_count: usize, min_slots: usize) -> usize {
    min_slots.saturating_sub(card_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slots() {
        assert_eq!(empty_slots(0, 3), 3);
        assert_eq!(empty_slots(2, 3), 1);
        assert_eq!(empty_slots(5, 3), 0);
    }
}
