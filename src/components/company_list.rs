//! Company List Component
//!
//! Top companies by application count with relative bars.

use leptos::prelude::*;

use crate::analytics::CompanyCount;

#[component]
pub fn CompanyList(#[prop(into)] companies: Signal<Vec<CompanyCount>>) -> impl IntoView {
    view! {
        <div class="company-list">
            <Show
                when=move || !companies.get().is_empty()
                fallback=|| view! { <div class="empty-state"><p>"No data available"</p></div> }
            >
                <For
                    each=move || companies.get()
                    key=|c| (c.company.clone(), c.count)
                    children=|c| view! {
                        <div class="company-item">
                            <div class="company-info">
                                <span class="company-name">{c.company.clone()}</span>
                                <span class="company-count">{c.count}</span>
                            </div>
                            <div class="company-bar">
                                <div
                                    class="company-bar-fill"
                                    style=format!("width: {:.1}%;", c.bar_percent)
                                ></div>
                            </div>
                        </div>
                    }
                />
            </Show>
        </div>
    }
}
