//! Stat Card Component

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    /// Extra class, e.g. "stat-offers"
    #[prop(optional, into)] variant: String,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", variant)>
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
