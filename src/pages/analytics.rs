//! Analytics Page
//!
//! Everything is derived from the stored applications; changing the range
//! only re-filters in memory.

use chrono::Local;
use leptos::prelude::*;

use crate::analytics::{
    filter_by_time_range, recent_activity, success_metrics, summarize, top_companies, Summary, TimeRange,
};
use crate::components::{ActivityFeed, CompanyList, MethodChart, StatCard, StatusChart, TimelineChart};
use crate::context::use_app_context;
use crate::store::{store_applications, store_load_state, use_app_store, LoadState};

const TOP_COMPANY_LIMIT: usize = 5;
const ACTIVITY_LIMIT: usize = 10;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (range, set_range) = signal(ctx.config.get_untracked().default_time_range);

    Effect::new(move |_| ctx.reload());

    let filtered = Memo::new(move |_| {
        let today = Local::now().date_naive();
        filter_by_time_range(&store_applications(&store), range.get(), today)
    });
    let summary = Memo::new(move |_| summarize(&filtered.get()));
    let metrics = Memo::new(move |_| success_metrics(&filtered.get()));
    let companies = Signal::derive(move || top_companies(&filtered.get(), TOP_COMPANY_LIMIT));
    // Recent activity ignores the window
    let activity = Signal::derive(move || {
        recent_activity(&store_applications(&store), ACTIVITY_LIMIT, Local::now().date_naive())
    });

    let stat = move |f: fn(&Summary) -> String| Signal::derive(move || summary.with(f));

    view! {
        <Show
            when=move || !matches!(store_load_state(&store), LoadState::Failed(_))
            fallback=|| view! {
                <div class="analytics-error">
                    <p>"Failed to load analytics data. Please try again later."</p>
                </div>
            }
        >
            <div class="analytics-page">
                <div class="analytics-header">
                    <h2>"Analytics"</h2>
                    <select
                        id="timeRange"
                        on:change=move |ev| {
                            if let Some(r) = TimeRange::parse(&event_target_value(&ev)) {
                                log::debug!("[analytics] range -> {}", r);
                                set_range.set(r);
                            }
                        }
                    >
                        {TimeRange::CHOICES
                            .into_iter()
                            .map(|r| view! {
                                <option value=r.value() selected=move || range.get() == r>{r.label()}</option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="stats-grid">
                    <StatCard label="Total Applications" value=stat(|s| s.total.to_string()) />
                    <StatCard label="Pending" value=stat(|s| s.counts.applied.to_string()) variant="stat-pending" />
                    <StatCard label="Interviews" value=stat(|s| s.counts.interview.to_string()) variant="stat-interviews" />
                    <StatCard label="Offers" value=stat(|s| s.counts.offer.to_string()) variant="stat-offers" />
                    <StatCard label="Rejected" value=stat(|s| s.counts.rejected.to_string()) variant="stat-rejected" />
                    <StatCard label="Response Rate" value=stat(|s| format!("{}%", s.response_rate)) variant="stat-rate" />
                </div>

                <div class="charts-grid">
                    <div class="chart-card">
                        <h3>"Application Status"</h3>
                        <StatusChart counts=Signal::derive(move || summary.get().counts) />
                    </div>
                    <div class="chart-card wide">
                        <h3>"Applications Over Time"</h3>
                        <TimelineChart applications=filtered />
                    </div>
                    <div class="chart-card">
                        <h3>"Application Methods"</h3>
                        <MethodChart applications=filtered />
                    </div>
                    <div class="chart-card">
                        <h3>"Top Companies"</h3>
                        <CompanyList companies=companies />
                    </div>
                </div>

                <div class="analytics-bottom">
                    <div class="chart-card">
                        <h3>"Recent Activity"</h3>
                        <ActivityFeed entries=activity />
                    </div>
                    <div class="chart-card success-metrics">
                        <h3>"Success Metrics"</h3>
                        <div class="metric-item">
                            <span class="metric-label">"Avg. Response Time"</span>
                            <span class="metric-value">{move || metrics.get().avg_response_time}</span>
                        </div>
                        <div class="metric-item">
                            <span class="metric-label">"Interview Rate"</span>
                            <span class="metric-value">{move || format!("{}%", metrics.get().interview_rate)}</span>
                        </div>
                        <div class="metric-item">
                            <span class="metric-label">"Offer Rate"</span>
                            <span class="metric-value">{move || format!("{}%", metrics.get().offer_rate)}</span>
                        </div>
                        <div class="metric-item">
                            <span class="metric-label">"Most Active Day"</span>
                            <span class="metric-value">{move || metrics.get().most_active_day}</span>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
