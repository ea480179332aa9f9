//! Settings Page
//!
//! Edits the client config stored in `localStorage` and shows the most
//! recent log lines.

use leptos::prelude::*;

use crate::analytics::TimeRange;
use crate::config::{self, ClientConfig};
use crate::context::use_app_context;
use crate::logging;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(ctx.config.get_untracked());
    let (log_lines, set_log_lines) = signal(logging::recent_lines());

    let apply = move |cfg: ClientConfig| {
        logging::set_level(cfg.level_filter());
        ctx.config.set(cfg.clone());
        draft.set(cfg);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let cfg = draft.get_untracked().normalized();
        match config::save(&cfg) {
            Ok(()) => {
                log::info!("[settings] saved");
                apply(cfg);
                ctx.notify_success("Settings saved");
            }
            Err(e) => ctx.notify_error(format!("Error saving settings: {}", e)),
        }
    };

    let reset = move |_| {
        apply(config::reset());
        log::info!("[settings] reset to defaults");
        ctx.notify_success("Settings reset to defaults");
    };

    view! {
        <div class="settings-page">
            <h2>"Settings"</h2>
            <form class="settings-form" on:submit=save>
                <div class="form-group">
                    <label for="apiBase">"API base URL"</label>
                    <input
                        id="apiBase"
                        type="text"
                        placeholder="same origin"
                        prop:value=move || draft.with(|c| c.api_base.clone())
                        on:input=move |ev| draft.update(|c| c.api_base = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="csrfCookie">"CSRF cookie name"</label>
                    <input
                        id="csrfCookie"
                        type="text"
                        prop:value=move || draft.with(|c| c.csrf_cookie.clone())
                        on:input=move |ev| draft.update(|c| c.csrf_cookie = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="logLevel">"Log level"</label>
                        <select
                            id="logLevel"
                            on:change=move |ev| draft.update(|c| c.log_level = event_target_value(&ev))
                        >
                            {LOG_LEVELS
                                .into_iter()
                                .map(|level| view! {
                                    <option
                                        value=level
                                        selected=move || draft.with(|c| c.log_level == level)
                                    >
                                        {level}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="calendarRefresh">"Calendar refresh (seconds)"</label>
                        <input
                            id="calendarRefresh"
                            type="number"
                            min="1"
                            prop:value=move || draft.with(|c| c.calendar_refresh_secs.to_string())
                            on:input=move |ev| {
                                if let Ok(secs) = event_target_value(&ev).parse::<u32>() {
                                    draft.update(|c| c.calendar_refresh_secs = secs);
                                }
                            }
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="defaultRange">"Default analytics range"</label>
                    <select
                        id="defaultRange"
                        on:change=move |ev| {
                            if let Some(r) = TimeRange::parse(&event_target_value(&ev)) {
                                draft.update(|c| c.default_time_range = r);
                            }
                        }
                    >
                        {TimeRange::CHOICES
                            .into_iter()
                            .map(|r| view! {
                                <option
                                    value=r.value()
                                    selected=move || draft.with(|c| c.default_time_range == r)
                                >
                                    {r.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group checkbox">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|c| c.mirror_application_notes)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                draft.update(|c| c.mirror_application_notes = checked);
                            }
                        />
                        " Also save application notes as a note"
                    </label>
                </div>
                <div class="form-actions">
                    <button type="button" class="btn-cancel" on:click=reset>"Reset to defaults"</button>
                    <button type="submit" class="btn-save">"Save"</button>
                </div>
            </form>

            <div class="log-panel">
                <div class="log-panel-header">
                    <h3>"Recent log"</h3>
                    <button on:click=move |_| set_log_lines.set(logging::recent_lines())>"Refresh"</button>
                    <button on:click=move |_| {
                        logging::clear();
                        set_log_lines.set(Vec::new());
                    }>"Clear"</button>
                </div>
                <pre class="log-lines">
                    {move || log_lines.get().join("\n")}
                </pre>
            </div>
        </div>
    }
}
