//! Frontend Models
//!
//! Data structures matching the tracker backend's JSON.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Application status as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
    /// Anything the backend sends that we don't know about
    Other(String),
}

impl Status {
    /// The four statuses offered in forms and charts, in display order
    pub const ALL: [Status; 4] = [Status::Applied, Status::Interview, Status::Offer, Status::Rejected];

    pub fn as_str(&self) -> &str {
        match self {
            Status::Applied => "Applied",
            Status::Interview => "Interview",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
            Status::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Applied" => Status::Applied,
            "Interview" => Status::Interview,
            "Offer" => Status::Offer,
            "Rejected" => Status::Rejected,
            other => Status::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Status::parse(&s))
    }
}

/// Application data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: u32,
    pub company_name: String,
    pub job_title: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub application_date: Option<NaiveDate>,
    #[serde(default)]
    pub contact_info: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Application {
    /// Method label for cards ("N/A" when the user left it blank)
    pub fn method_label(&self) -> &str {
        if self.method.trim().is_empty() {
            "N/A"
        } else {
            &self.method
        }
    }

    /// "Company - Job Title"
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.company_name, self.job_title)
    }
}

/// Payload for creating an application
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub company_name: String,
    pub job_title: String,
    pub application_date: String,
    pub method: String,
    pub contact_info: String,
    pub status: Status,
    pub email: String,
    pub notes: String,
}

/// Note data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for creating or updating a note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteInput<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

/// A note together with the application it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct NoteCard {
    pub note: Note,
    pub application_id: u32,
    pub company_name: String,
    pub job_title: String,
}

impl NoteCard {
    pub fn new(note: Note, app: &Application) -> Self {
        Self {
            note,
            application_id: app.id,
            company_name: app.company_name.clone(),
            job_title: app.job_title.clone(),
        }
    }

    pub fn subtitle(&self) -> Option<String> {
        if self.company_name.is_empty() {
            None
        } else {
            Some(format!("{} - {}", self.company_name, self.job_title))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_from_listing_json() {
        let json = r#"{"id":7,"companyName":"Acme","jobTitle":"Engineer","status":"Interview","method":""}"#;
        let app: Application = serde_json::from_str(json).unwrap();

        assert_eq!(app.id, 7);
        assert_eq!(app.status, Status::Interview);
        assert_eq!(app.application_date, None);
        assert_eq!(app.method_label(), "N/A");
        assert_eq!(app.display_name(), "Acme - Engineer");
    }

    #[test]
    fn test_application_with_date_and_unknown_status() {
        let json = r#"{"id":1,"companyName":"A","jobTitle":"B","status":"Ghosted","method":"Referral","applicationDate":"2024-03-09"}"#;
        let app: Application = serde_json::from_str(json).unwrap();

        assert_eq!(app.status, Status::Other("Ghosted".to_string()));
        assert_eq!(app.application_date, NaiveDate::from_ymd_opt(2024, 3, 9));
        assert_eq!(app.method_label(), "Referral");
    }

    #[test]
    fn test_new_application_uses_camel_case() {
        let new_app = NewApplication {
            company_name: "Acme".into(),
            job_title: "Dev".into(),
            application_date: "2024-01-02".into(),
            status: Status::Offer,
            ..Default::default()
        };
        let value = serde_json::to_value(&new_app).unwrap();

        assert_eq!(value["companyName"], "Acme");
        assert_eq!(value["applicationDate"], "2024-01-02");
        assert_eq!(value["contactInfo"], "");
        assert_eq!(value["status"], "Offer");
    }

    #[test]
    fn test_note_card_subtitle() {
        let note = Note { id: 3, title: "Call".into(), body: String::new(), created_at: None };
        let mut card = NoteCard {
            note,
            application_id: 1,
            company_name: "Acme".into(),
            job_title: "Dev".into(),
        };
        assert_eq!(card.subtitle().as_deref(), Some("Acme - Dev"));

        card.company_name.clear();
        assert_eq!(card.subtitle(), None);
    }
}
