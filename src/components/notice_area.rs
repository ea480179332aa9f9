//! Notice Area Component
//!
//! Auto-dismissing success and error messages.

use leptos::prelude::*;

use crate::context::{use_app_context, NoticeKind};

#[component]
pub fn NoticeArea() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="notice-area">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let (icon, class) = match notice.kind {
                        NoticeKind::Success => ("✓", "notice notice-success"),
                        NoticeKind::Error => ("✕", "notice notice-error"),
                    };
                    let id = notice.id;
                    view! {
                        <div class=class role="alert">
                            <span class="notice-icon">{icon}</span>
                            <span class="notice-message">{notice.message}</span>
                            <button class="notice-close" on:click=move |_| ctx.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
