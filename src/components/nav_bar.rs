//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"Job Tracker"</span>
            <div class="nav-links">
                <A href="/">"Dashboard"</A>
                <A href="/notes">"Notes"</A>
                <A href="/analytics">"Analytics"</A>
                <A href="/settings">"Settings"</A>
            </div>
        </nav>
    }
}
