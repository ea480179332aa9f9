//! REST Client
//!
//! Bindings to the tracker backend's JSON endpoints, organized by domain.
//! Requests are plain sequential fetches; every state-changing one carries
//! the CSRF token.

mod application;
mod note;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::{self, ClientConfig};
use crate::csrf;
use crate::error::ApiError;

// Re-export all public items
pub use application::*;
pub use note::*;

const CSRF_HEADER: &str = "X-CSRFToken";

// ========================
// Paths
// ========================

pub fn applications_path() -> String {
    "/api/applications/".to_string()
}

pub fn add_application_path() -> String {
    "/api/applications/add/".to_string()
}

pub fn delete_application_path(id: u32) -> String {
    format!("/api/applications/{}/delete/", id)
}

pub fn notes_path(application_id: u32) -> String {
    format!("/api/applications/{}/notes/", application_id)
}

pub fn add_note_path(application_id: u32) -> String {
    format!("/api/applications/{}/notes/add/", application_id)
}

pub fn update_note_path(application_id: u32, note_id: u32) -> String {
    format!("/api/applications/{}/notes/{}/update/", application_id, note_id)
}

pub fn delete_note_path(application_id: u32, note_id: u32) -> String {
    format!("/api/applications/{}/notes/{}/delete/", application_id, note_id)
}

// ========================
// Response decoding
// ========================

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Best-effort message for a failed response
fn http_error(status: u16, body: &str) -> ApiError {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("error")
            .or_else(|| v.get("detail"))
            .and_then(Value::as_str)
            .map(str::to_string)
    });
    let message = from_json.unwrap_or_else(|| {
        let text: String = body.trim().chars().take(120).collect();
        if text.is_empty() { "no response body".to_string() } else { text }
    });
    ApiError::Http { status, message }
}

/// Decode a read endpoint's body
pub(crate) fn decode_query<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(http_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a `{"success": .., "error": ..}` envelope from a write endpoint
pub(crate) fn decode_mutation<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) if is_success(status) => return Err(ApiError::Decode(e.to_string())),
        Err(_) => return Err(http_error(status, body)),
    };

    match value.get("success").and_then(Value::as_bool) {
        Some(true) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
        Some(false) => Err(ApiError::Rejected(
            value
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
        )),
        None if is_success(status) => Err(ApiError::Decode("missing success flag".to_string())),
        None => Err(http_error(status, body)),
    }
}

// ========================
// Transport
// ========================

async fn read_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

fn with_csrf(builder: RequestBuilder, cfg: &ClientConfig) -> Result<RequestBuilder, ApiError> {
    let token = csrf::csrf_token(&cfg.csrf_cookie).ok_or(ApiError::MissingCsrfToken)?;
    Ok(builder.header(CSRF_HEADER, &token))
}

fn log_failure<T>(method: &str, url: &str, result: &Result<T, ApiError>) {
    match result {
        Err(ApiError::Rejected(msg)) => log::warn!("[api] {} {} rejected: {}", method, url, msg),
        Err(e) => log::error!("[api] {} {} failed: {}", method, url, e),
        Ok(_) => {}
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = config::load().url(path);
    log::debug!("[api] GET {}", url);
    let result = async {
        let response = Request::get(&url).send().await?;
        let (status, body) = read_body(response).await?;
        decode_query(status, &body)
    }
    .await;
    log_failure("GET", &url, &result);
    result
}

#[derive(Clone, Copy)]
pub(crate) enum Method {
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
    }
}

/// Send a state-changing request and decode its envelope
pub(crate) async fn mutate<B, T>(method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let cfg = config::load();
    let url = cfg.url(path);
    log::debug!("[api] {} {}", method.as_str(), url);
    let result = async {
        let builder = with_csrf(method.builder(&url), &cfg)?;
        let response = match body {
            // json() also sets Content-Type: application/json
            Some(body) => builder.json(body)?.send().await?,
            None => builder.send().await?,
        };
        let (status, text) = read_body(response).await?;
        decode_mutation(status, &text)
    }
    .await;
    log_failure(method.as_str(), &url, &result);
    result
}

/// Body of endpoints that only report success
#[derive(Debug, serde::Deserialize)]
pub(crate) struct Ack {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Created {
        application_id: u32,
    }

    #[test]
    fn test_paths() {
        assert_eq!(applications_path(), "/api/applications/");
        assert_eq!(delete_application_path(4), "/api/applications/4/delete/");
        assert_eq!(notes_path(4), "/api/applications/4/notes/");
        assert_eq!(add_note_path(4), "/api/applications/4/notes/add/");
        assert_eq!(update_note_path(4, 9), "/api/applications/4/notes/9/update/");
        assert_eq!(delete_note_path(4, 9), "/api/applications/4/notes/9/delete/");
    }

    #[test]
    fn test_mutation_success() {
        let created: Created = decode_mutation(200, r#"{"success":true,"application_id":12}"#).unwrap();
        assert_eq!(created, Created { application_id: 12 });

        let _: Ack = decode_mutation(200, r#"{"success":true}"#).unwrap();
    }

    #[test]
    fn test_mutation_rejected_keeps_backend_message() {
        let err = decode_mutation::<Ack>(400, r#"{"success":false,"error":"invalid date"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("invalid date".into()));

        let err = decode_mutation::<Ack>(400, r#"{"success":false}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("unknown error".into()));
    }

    #[test]
    fn test_mutation_html_error_page() {
        let err = decode_mutation::<Ack>(404, "<h1>Not Found</h1>").unwrap_err();
        assert_eq!(err, ApiError::Http { status: 404, message: "<h1>Not Found</h1>".into() });

        let err = decode_mutation::<Ack>(403, "").unwrap_err();
        assert_eq!(err, ApiError::Http { status: 403, message: "no response body".into() });
    }

    #[test]
    fn test_mutation_without_flag() {
        assert!(matches!(decode_mutation::<Ack>(200, "{}"), Err(ApiError::Decode(_))));
        assert!(matches!(decode_mutation::<Ack>(500, r#"{"detail":"boom"}"#), Err(ApiError::Http { status: 500, .. })));
        assert!(matches!(decode_mutation::<Ack>(200, "not json"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_query_decoding() {
        let value: serde_json::Value = decode_query(200, r#"{"applications":[]}"#).unwrap();
        assert_eq!(value["applications"], serde_json::json!([]));

        let err = decode_query::<serde_json::Value>(500, r#"{"error":"db down"}"#).unwrap_err();
        assert_eq!(err, ApiError::Http { status: 500, message: "db down".into() });
    }
}
