//! Application Endpoints

use serde::Deserialize;

use super::{add_application_path, applications_path, delete_application_path, get_json, mutate, Ack, Method};
use crate::error::ApiError;
use crate::models::{Application, NewApplication, NoteInput};

/// Title of the note mirrored from the application form's notes field
pub const APPLICATION_NOTES_TITLE: &str = "Application Notes";

#[derive(Deserialize)]
struct ApplicationList {
    #[serde(default)]
    applications: Vec<Application>,
}

#[derive(Deserialize)]
struct Created {
    application_id: u32,
}

pub async fn list_applications() -> Result<Vec<Application>, ApiError> {
    let list: ApplicationList = get_json(&applications_path()).await?;
    log::debug!("[api] loaded {} applications", list.applications.len());
    Ok(list.applications)
}

/// Create an application, returning the new id
pub async fn add_application(new_app: &NewApplication) -> Result<u32, ApiError> {
    let created: Created = mutate(Method::Post, &add_application_path(), Some(new_app)).await?;
    log::info!("[api] created application #{} ({})", created.application_id, new_app.company_name);
    Ok(created.application_id)
}

pub async fn delete_application(id: u32) -> Result<(), ApiError> {
    let _: Ack = mutate(Method::Delete, &delete_application_path(id), None::<&()>).await?;
    log::info!("[api] deleted application #{}", id);
    Ok(())
}

/// Create an application and, when asked to, copy its notes into a note.
///
/// A failure creating the note is logged and ignored since the application
/// itself was saved.
pub async fn submit_application(new_app: &NewApplication, mirror_notes: bool) -> Result<u32, ApiError> {
    let id = add_application(new_app).await?;

    let notes = new_app.notes.trim();
    if mirror_notes && !notes.is_empty() {
        let input = NoteInput { title: APPLICATION_NOTES_TITLE, body: notes };
        if let Err(e) = super::add_note(id, &input).await {
            log::warn!("[api] application #{} saved but its note was not: {}", id, e);
        }
    }
    Ok(id)
}
