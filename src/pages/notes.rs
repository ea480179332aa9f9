//! Notes Page
//!
//! Folder tiles, the notes of the opened folder and the note modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::api;
use crate::components::{Folder, Modal, NoteCardView, NoteEditTarget, NoteEditor};
use crate::context::use_app_context;
use crate::models::{Application, NoteCard};
use crate::store::{store_applications, store_find_application, use_app_store, LoadSequence};

const NO_APPLICATIONS: &str = "No applications found. Please add an application first.";

/// Applications whose notes a folder shows, narrowed by the `?app=` filter
pub fn folder_applications(folder: Folder, apps: &[Application], only: Option<u32>) -> Vec<Application> {
    if folder != Folder::Application {
        return Vec::new();
    }
    apps.iter()
        .filter(|app| only.map_or(true, |id| app.id == id))
        .cloned()
        .collect()
}

#[component]
pub fn NotesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let query = use_query_map();

    let app_filter = Memo::new(move |_| {
        query.with(|q| q.get("app")).and_then(|raw| raw.parse::<u32>().ok())
    });

    let (open_folder, set_open_folder) = signal::<Option<Folder>>(None);
    let (folder_version, set_folder_version) = signal(0u32);
    let notes = RwSignal::new(Vec::<NoteCard>::new());
    let (loading, set_loading) = signal(false);
    let (edit_target, set_edit_target) = signal::<Option<NoteEditTarget>>(None);
    // Only the newest load may write its result
    let load_seq = StoredValue::new(LoadSequence::default());

    Effect::new(move |_| ctx.reload());

    // A filtered link jumps straight into the Application folder
    Effect::new(move |_| {
        if app_filter.get().is_some() {
            set_open_folder.set(Some(Folder::Application));
        }
    });

    Effect::new(move |_| {
        let _ = folder_version.get();
        let Some(folder) = open_folder.get() else {
            return;
        };
        let apps = folder_applications(folder, &store_applications(&store), app_filter.get());

        let mut ticket = 0;
        load_seq.update_value(|seq| ticket = seq.start());
        set_loading.set(true);
        spawn_local(async move {
            let result = api::load_all_notes(&apps).await;
            if !load_seq.with_value(|seq| seq.is_current(ticket)) {
                return;
            }
            match result {
                Ok(cards) => {
                    log::info!("[notes] loaded {} notes", cards.len());
                    notes.set(cards);
                }
                Err(e) => {
                    notes.set(Vec::new());
                    ctx.notify_error(format!("Error loading notes: {}", e));
                }
            }
            set_loading.set(false);
        });
    });

    let reload_folder = move || set_folder_version.update(|v| *v += 1);

    let go_back = move |_| {
        load_seq.update_value(LoadSequence::cancel);
        set_open_folder.set(None);
        notes.set(Vec::new());
        set_loading.set(false);
    };

    let open_create = move |_| {
        let Some(folder) = open_folder.get_untracked() else { return };
        let application_id = if folder == Folder::Application {
            if store_applications(&store).is_empty() {
                ctx.notify_error(NO_APPLICATIONS);
                return;
            }
            app_filter.get_untracked()
        } else {
            None
        };
        set_edit_target.set(Some(NoteEditTarget::Create { folder, application_id }));
    };

    let delete_note = move |card: NoteCard| {
        spawn_local(async move {
            match api::delete_note(card.application_id, card.note.id).await {
                Ok(()) => reload_folder(),
                Err(e) => ctx.notify_error(format!("Error deleting note: {}", e)),
            }
        });
    };

    let close_modal = Callback::new(move |_| set_edit_target.set(None));
    let modal_title = Signal::derive(move || {
        edit_target.get().map(|t| t.heading().to_string()).unwrap_or_default()
    });

    view! {
        <div class="notes-page">
            <Show
                when=move || open_folder.get().is_some()
                fallback=move || view! {
                    <div class="folders">
                        {Folder::ALL
                            .into_iter()
                            .map(|folder| view! {
                                <div
                                    class=format!("folder {}", folder.color_class())
                                    on:click=move |_| set_open_folder.set(Some(folder))
                                >
                                    <i class="fas fa-folder"></i>
                                    <span class="folder-name">{folder.label()}</span>
                                </div>
                            })
                            .collect_view()}
                        <div class="folder add-folder" title="Add folder">
                            <i class="fas fa-plus"></i>
                        </div>
                    </div>
                }
            >
                <div class="notes-detail">
                    <div class="notes-detail-header">
                        <button class="back-btn" on:click=go_back>
                            <i class="fas fa-arrow-left"></i>
                            " Back"
                        </button>
                        <h2>{move || open_folder.get().map(Folder::label).unwrap_or_default()}</h2>
                        {move || app_filter
                            .get()
                            .and_then(|id| store_find_application(&store, id))
                            .map(|app| view! { <span class="notes-filter">{app.display_name()}</span> })}
                    </div>
                    <Show when=move || loading.get()>
                        <p class="loading">"Loading notes..."</p>
                    </Show>
                    <div class="notes-grid">
                        <div class="individual-note add-note" on:click=open_create>
                            <i class="fas fa-plus"></i>
                        </div>
                        <For
                            each=move || notes.get()
                            key=|card| (card.note.id, card.note.title.clone(), card.note.body.clone())
                            children=move |card| view! {
                                <NoteCardView
                                    card=card
                                    on_open=move |card: NoteCard| set_edit_target.set(Some(NoteEditTarget::Edit(card)))
                                    on_delete=delete_note
                                />
                            }
                        />
                    </div>
                </div>
            </Show>

            <Modal open=Signal::derive(move || edit_target.get().is_some()) title=modal_title on_close=close_modal modal_id="note-modal">
                <NoteEditor
                    target=edit_target
                    applications=Signal::derive(move || store_applications(&store))
                    on_saved=move |_| {
                        set_edit_target.set(None);
                        reload_folder();
                    }
                    on_cancel=close_modal
                />
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    fn app(id: u32) -> Application {
        Application {
            id,
            company_name: format!("Company {}", id),
            job_title: "Engineer".into(),
            status: Status::Applied,
            method: String::new(),
            application_date: None,
            contact_info: None,
            email: None,
            notes: None,
        }
    }

    #[test]
    fn test_only_application_folder_has_notes() {
        let apps = vec![app(1), app(2)];
        assert_eq!(folder_applications(Folder::Application, &apps, None).len(), 2);
        assert!(folder_applications(Folder::Work, &apps, None).is_empty());
        assert!(folder_applications(Folder::Personal, &apps, Some(1)).is_empty());
    }

    #[test]
    fn test_query_filter_narrows_to_one_application() {
        let apps = vec![app(1), app(2), app(3)];
        let only = folder_applications(Folder::Application, &apps, Some(2));
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].id, 2);

        assert!(folder_applications(Folder::Application, &apps, Some(9)).is_empty());
    }

    #[test]
    fn test_folder_labels() {
        let labels: Vec<&str> = Folder::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Application", "Work", "Personal"]);
    }
}
