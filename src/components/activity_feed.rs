//! Activity Feed Component

use leptos::prelude::*;

use crate::analytics::ActivityEntry;

#[component]
pub fn ActivityFeed(#[prop(into)] entries: Signal<Vec<ActivityEntry>>) -> impl IntoView {
    view! {
        <div class="activity-list">
            <Show
                when=move || !entries.get().is_empty()
                fallback=|| view! { <div class="empty-state"><p>"No recent activity"</p></div> }
            >
                <For
                    each=move || entries.get()
                    key=|e| e.application_id
                    children=|e| {
                        let icon_style = format!(
                            "background: {}; color: {};",
                            e.style.background, e.style.color,
                        );
                        view! {
                            <div class="activity-item">
                                <div class="activity-icon" style=icon_style>
                                    <i class=format!("fas {}", e.style.icon)></i>
                                </div>
                                <div class="activity-content">
                                    <div class="activity-title">{e.company.clone()}</div>
                                    <div class="activity-description">{e.description.clone()}</div>
                                </div>
                                <div class="activity-time">{e.time_ago.clone()}</div>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
