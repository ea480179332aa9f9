//! Modal Component
//!
//! Overlay dialog. Closes on the × button, a backdrop click or Escape, and
//! locks page scrolling while open.

use leptos::prelude::*;

fn set_body_overflow(value: &str) {
    if let Some(body) = document().body() {
        let _ = body.style().set_property("overflow", value);
    }
}

#[component]
pub fn Modal(
    /// Whether the modal is shown
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    /// Element id, so pages can style individual modals
    #[prop(optional, into)] modal_id: String,
    children: Children,
) -> impl IntoView {
    Effect::new(move |_| {
        set_body_overflow(if open.get() { "hidden" } else { "auto" });
    });

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || {
        escape.remove();
        set_body_overflow("auto");
    });

    view! {
        <div
            id=modal_id
            class="modal"
            style:display=move || if open.get() { "flex" } else { "none" }
            on:click=move |_| on_close.run(())
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{move || title.get()}</h2>
                    <button type="button" class="close-modal" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
