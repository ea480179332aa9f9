//! Note Endpoints

use serde::Deserialize;

use super::{add_note_path, delete_note_path, get_json, mutate, notes_path, update_note_path, Ack, Method};
use crate::error::ApiError;
use crate::models::{Application, Note, NoteCard, NoteInput};

#[derive(Deserialize)]
struct NoteList {
    #[serde(default)]
    notes: Vec<Note>,
}

#[derive(Deserialize)]
struct SavedNote {
    note: Note,
}

pub async fn list_notes(application_id: u32) -> Result<Vec<Note>, ApiError> {
    let list: NoteList = get_json(&notes_path(application_id)).await?;
    Ok(list.notes)
}

pub async fn add_note(application_id: u32, input: &NoteInput<'_>) -> Result<Note, ApiError> {
    let saved: SavedNote = mutate(Method::Post, &add_note_path(application_id), Some(input)).await?;
    log::info!("[api] added note #{} to application #{}", saved.note.id, application_id);
    Ok(saved.note)
}

pub async fn update_note(application_id: u32, note_id: u32, input: &NoteInput<'_>) -> Result<Note, ApiError> {
    let saved: SavedNote = mutate(Method::Put, &update_note_path(application_id, note_id), Some(input)).await?;
    log::info!("[api] updated note #{}", note_id);
    Ok(saved.note)
}

pub async fn delete_note(application_id: u32, note_id: u32) -> Result<(), ApiError> {
    let _: Ack = mutate(Method::Delete, &delete_note_path(application_id, note_id), None::<&()>).await?;
    log::info!("[api] deleted note #{}", note_id);
    Ok(())
}

/// Fetch the notes of each application in turn, tagged with their owner.
/// The first failure aborts the whole load.
pub async fn load_all_notes(apps: &[Application]) -> Result<Vec<NoteCard>, ApiError> {
    let mut cards = Vec::new();
    for app in apps {
        let notes = list_notes(app.id).await?;
        cards.extend(notes.into_iter().map(|note| NoteCard::new(note, app)));
    }
    log::debug!("[api] loaded {} notes across {} applications", cards.len(), apps.len());
    Ok(cards)
}
