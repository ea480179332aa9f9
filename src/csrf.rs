//! CSRF Token
//!
//! The backend expects the value of its CSRF cookie echoed back in the
//! `X-CSRFToken` header on every state-changing request.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

/// Find `name` in a `document.cookie` style string and percent-decode its value
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// Read the CSRF token from the live document
pub fn csrf_token(cookie_name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html.cookie().ok()?;
    cookie_value(&cookies, cookie_name).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_cookie_among_others() {
        let header = "sessionid=abc; csrftoken=tok123; theme=dark";
        assert_eq!(cookie_value(header, "csrftoken").as_deref(), Some("tok123"));
        assert_eq!(cookie_value(header, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_requires_exact_name() {
        let header = "xcsrftoken=wrong;csrftokenx=wrong2";
        assert_eq!(cookie_value(header, "csrftoken"), None);
    }

    #[test]
    fn test_first_match_wins_and_value_is_decoded() {
        let header = "csrftoken=a%20b%3D; csrftoken=second";
        assert_eq!(cookie_value(header, "csrftoken").as_deref(), Some("a b="));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(cookie_value("", "csrftoken"), None);
        assert_eq!(cookie_value("a=1", ""), None);
        assert_eq!(cookie_value("csrftoken=", "csrftoken").as_deref(), Some(""));
    }
}
