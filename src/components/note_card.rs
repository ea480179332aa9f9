//! Note Card Component

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::markdown::{excerpt, render_note};
use crate::models::NoteCard;

/// Plain-text length of the hover hint
const HOVER_CHARS: usize = 160;

#[component]
pub fn NoteCardView(
    card: NoteCard,
    #[prop(into)] on_open: Callback<NoteCard>,
    #[prop(into)] on_delete: Callback<NoteCard>,
) -> impl IntoView {
    let body_html = render_note(&card.note.body);
    let hover = excerpt(&card.note.body, HOVER_CHARS);
    let subtitle = card.subtitle();
    let title = card.note.title.clone();
    let note_id = card.note.id.to_string();
    let for_open = card.clone();

    view! {
        <div
            class="individual-note"
            data-note-id=note_id
            title=hover
            on:click=move |_| on_open.run(for_open.clone())
        >
            <DeleteConfirmButton
                button_class="delete-note"
                on_confirm=move |_| on_delete.run(card.clone())
            />
            <h3 class="note-title-text">{title}</h3>
            {subtitle.map(|s| view! { <div class="note-subtitle">{s}</div> })}
            <div class="note-body-text" inner_html=body_html></div>
        </div>
    }
}
