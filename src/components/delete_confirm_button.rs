//! Delete Confirm Button Component
//!
//! Two-step delete control for cards.

use leptos::prelude::*;

/// Inline delete confirmation
///
/// Starts as a × button; the first click swaps it for "Delete?" with
/// ✓/✗ buttons. None of its clicks bubble up to the card it sits on, so
/// deleting never also opens the card.
///
/// # Arguments
/// * `button_class` - CSS class for the × button ("delete-card" or "delete-note")
/// * `on_confirm` - Runs once the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    let answer = move |ev: web_sys::MouseEvent, confirmed: bool| {
        ev.stop_propagation();
        armed.set(false);
        if confirmed {
            on_confirm.run(());
        }
    };

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm" on:click=|ev| ev.stop_propagation()>
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button class="confirm-btn" on:click=move |ev| answer(ev, true)>"✓"</button>
                    <button class="cancel-btn" on:click=move |ev| answer(ev, false)>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    title="Delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
