//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ClientConfig;

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload applications from backend; the app shell reads it
    set_reload_trigger: WriteSignal<u32>,
    /// Client configuration currently in effect
    pub config: RwSignal<ClientConfig>,
    /// Notices waiting to be dismissed
    pub notices: RwSignal<Vec<Notice>>,
    next_notice: StoredValue<u32>,
}

impl AppContext {
    pub fn new(set_reload_trigger: WriteSignal<u32>, config: ClientConfig) -> Self {
        Self {
            set_reload_trigger,
            config: RwSignal::new(config),
            notices: RwSignal::new(Vec::new()),
            next_notice: StoredValue::new(0),
        }
    }

    /// Trigger a reload of applications
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.push_notice(NoticeKind::Error, message.into());
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.push_notice(NoticeKind::Success, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    fn push_notice(&self, kind: NoticeKind, message: String) {
        let id = self.next_notice.get_value();
        self.next_notice.set_value(id.wrapping_add(1));
        self.notices.update(|list| list.push(Notice { id, kind, message }));

        let notices = self.notices;
        gloo_timers::callback::Timeout::new(NOTICE_TIMEOUT_MS, move || {
            notices.try_update(|list| list.retain(|n| n.id != id));
        })
        .forget();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
