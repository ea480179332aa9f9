//! Note Editor Component
//!
//! Body of the notes modal: application selector for new notes, title,
//! and a markdown body with live preview.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::NoteEditTarget;
use crate::context::use_app_context;
use crate::error::ValidationError;
use crate::markdown::render_note;
use crate::models::{Application, NoteInput};

/// What a validated save will do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSave {
    Create { application_id: u32, title: String, body: String },
    Update { application_id: u32, note_id: u32, title: String, body: String },
}

/// Check the modal's fields and work out the request to send.
///
/// `selected_application` is the selector's raw value ("" when nothing is chosen).
pub fn prepare_save(
    target: &NoteEditTarget,
    title: &str,
    body: &str,
    selected_application: &str,
) -> Result<NoteSave, ValidationError> {
    let title = title.trim().to_string();
    let body = body.trim().to_string();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    match target {
        NoteEditTarget::Edit(card) => Ok(NoteSave::Update {
            application_id: card.application_id,
            note_id: card.note.id,
            title,
            body,
        }),
        NoteEditTarget::Create { .. } if !target.shows_application_selector() => {
            Err(ValidationError::NoApplicationSelected)
        }
        NoteEditTarget::Create { .. } => {
            let application_id = selected_application
                .trim()
                .parse::<u32>()
                .map_err(|_| ValidationError::NoApplicationSelected)?;
            Ok(NoteSave::Create { application_id, title, body })
        }
    }
}

/// Note editor form
#[component]
pub fn NoteEditor(
    target: ReadSignal<Option<NoteEditTarget>>,
    /// Applications offered by the selector when creating
    #[prop(into)] applications: Signal<Vec<Application>>,
    /// Called after a successful save
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (selected_app, set_selected_app) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Reset fields whenever a different target is opened
    Effect::new(move |_| match target.get() {
        Some(NoteEditTarget::Edit(card)) => {
            set_title.set(card.note.title.clone());
            set_body.set(card.note.body.clone());
            set_selected_app.set(card.application_id.to_string());
        }
        Some(NoteEditTarget::Create { application_id: preselected, .. }) => {
            set_title.set(String::new());
            set_body.set(String::new());
            set_selected_app.set(preselected.map(|id| id.to_string()).unwrap_or_default());
        }
        None => set_selected_app.set(String::new()),
    });

    let shows_selector = move || target.get().is_some_and(|t| t.shows_application_selector());

    let save = move |_| {
        let Some(current) = target.get_untracked() else { return };
        if saving.get_untracked() {
            return;
        }
        let plan = match prepare_save(
            &current,
            &title.get_untracked(),
            &body.get_untracked(),
            &selected_app.get_untracked(),
        ) {
            Ok(plan) => plan,
            Err(e) => {
                ctx.notify_error(e.to_string());
                return;
            }
        };

        set_saving.set(true);
        spawn_local(async move {
            let result = match &plan {
                NoteSave::Create { application_id, title, body } => {
                    api::add_note(*application_id, &NoteInput { title: title.as_str(), body: body.as_str() }).await
                }
                NoteSave::Update { application_id, note_id, title, body } => {
                    api::update_note(*application_id, *note_id, &NoteInput { title: title.as_str(), body: body.as_str() })
                        .await
                }
            };
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => ctx.notify_error(format!("Error saving note: {}", e)),
            }
            set_saving.set(false);
        });
    };

    let preview = move || render_note(&body.get());

    view! {
        <Show when=shows_selector>
            <div class="form-group" id="applicationSelector">
                <label for="selectApplication">"Select Application"</label>
                <select
                    id="selectApplication"
                    prop:value=move || selected_app.get()
                    on:change=move |ev| set_selected_app.set(event_target_value(&ev))
                >
                    <option value="">"Choose an application..."</option>
                    <For
                        each=move || applications.get()
                        key=|app| app.id
                        children=move |app| {
                            let value = app.id.to_string();
                            let selected = {
                                let value = value.clone();
                                move || selected_app.get() == value
                            };
                            view! {
                                <option value=value selected=selected>{app.display_name()}</option>
                            }
                        }
                    />
                </select>
            </div>
        </Show>
        <div class="form-group">
            <label for="noteTitle">"Title"</label>
            <input
                id="noteTitle"
                type="text"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
        </div>
        <div class="note-editor-body">
            <div class="note-edit-pane">
                <label for="noteBody">"Note"</label>
                <textarea
                    id="noteBody"
                    rows="8"
                    placeholder="Markdown supported..."
                    prop:value=move || body.get()
                    on:input=move |ev| set_body.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="note-preview-pane">
                <div class="pane-header">"Preview"</div>
                <div class="note-preview-content" inner_html=preview></div>
            </div>
        </div>
        <div class="modal-footer">
            <button type="button" class="btn-cancel" on:click=move |_| on_cancel.run(())>"Cancel"</button>
            <button
                type="button"
                id="saveNoteBtn"
                class="btn-save"
                disabled=move || saving.get()
                on:click=save
            >
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Folder;
    use crate::models::{Note, NoteCard};

    fn existing() -> NoteEditTarget {
        NoteEditTarget::Edit(NoteCard {
            note: Note { id: 9, title: "Old".into(), body: "x".into(), created_at: None },
            application_id: 4,
            company_name: "Acme".into(),
            job_title: "Dev".into(),
        })
    }

    #[test]
    fn test_title_is_required() {
        let err = prepare_save(&existing(), "   ", "body", "").unwrap_err();
        assert_eq!(err, ValidationError::EmptyTitle);
    }

    #[test]
    fn test_update_uses_note_owner_and_trims() {
        let plan = prepare_save(&existing(), "  New title ", " text \n", "").unwrap();
        assert_eq!(
            plan,
            NoteSave::Update { application_id: 4, note_id: 9, title: "New title".into(), body: "text".into() }
        );
    }

    #[test]
    fn test_create_needs_selected_application() {
        let target = NoteEditTarget::Create { folder: Folder::Application, application_id: None };
        assert_eq!(
            prepare_save(&target, "Call", "", "").unwrap_err(),
            ValidationError::NoApplicationSelected
        );

        let plan = prepare_save(&target, "Call", "", "12").unwrap();
        assert_eq!(plan, NoteSave::Create { application_id: 12, title: "Call".into(), body: String::new() });
    }

    #[test]
    fn test_create_outside_application_folder_is_refused() {
        for folder in [Folder::Work, Folder::Personal] {
            let target = NoteEditTarget::Create { folder, application_id: None };
            // a stale selector value must not attach the note to an application
            assert_eq!(
                prepare_save(&target, "Call", "", "12").unwrap_err(),
                ValidationError::NoApplicationSelected
            );
        }
    }
}
