//! Note Edit Target Type
//!
//! What the note modal is currently working on.

use crate::models::NoteCard;

/// Folder tiles on the notes page; only `Application` holds notes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Folder {
    Application,
    Work,
    Personal,
}

impl Folder {
    pub const ALL: [Folder; 3] = [Folder::Application, Folder::Work, Folder::Personal];

    pub fn label(self) -> &'static str {
        match self {
            Folder::Application => "Application",
            Folder::Work => "Work",
            Folder::Personal => "Personal",
        }
    }

    pub fn color_class(self) -> &'static str {
        match self {
            Folder::Application => "folder-blue",
            Folder::Work => "folder-yellow",
            Folder::Personal => "folder-gray",
        }
    }
}

/// Edit target type - a fresh note or an existing one
#[derive(Clone, Debug, PartialEq)]
pub enum NoteEditTarget {
    /// New note in `folder`, optionally preselected for an application
    Create { folder: Folder, application_id: Option<u32> },
    /// Existing note being edited
    Edit(NoteCard),
}

impl NoteEditTarget {
    pub fn heading(&self) -> &'static str {
        match self {
            NoteEditTarget::Create { .. } => "Create Note",
            NoteEditTarget::Edit(_) => "Edit Note",
        }
    }

    /// Only new notes in the Application folder pick their application
    pub fn shows_application_selector(&self) -> bool {
        matches!(self, NoteEditTarget::Create { folder: Folder::Application, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_only_for_application_folder() {
        let create = |folder| NoteEditTarget::Create { folder, application_id: None };
        assert!(create(Folder::Application).shows_application_selector());
        assert!(!create(Folder::Work).shows_application_selector());
        assert!(!create(Folder::Personal).shows_application_selector());
        assert_eq!(create(Folder::Work).heading(), "Create Note");
    }
}
