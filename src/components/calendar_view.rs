//! Calendar View Component
//!
//! Current month grid for the dashboard, re-rendered on a timer so "today"
//! moves at midnight.

use std::time::Duration;

use chrono::Local;
use leptos::prelude::*;

use crate::analytics::counts_in_month;
use crate::calendar::month_grid;
use crate::context::use_app_context;
use crate::store::{store_applications, use_app_store};

#[component]
pub fn CalendarView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (today, set_today) = signal(Local::now().date_naive());

    let refresh_secs = ctx.config.get_untracked().calendar_refresh_secs;
    match set_interval_with_handle(
        move || set_today.set(Local::now().date_naive()),
        Duration::from_secs(u64::from(refresh_secs)),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("[dashboard] calendar refresh timer not started: {:?}", e),
    }

    let grid = Memo::new(move |_| month_grid(today.get()));
    let per_day = Memo::new(move |_| {
        let g = grid.get();
        counts_in_month(&store_applications(&store), g.year, g.month)
    });

    view! {
        <div class="calendar">
            <div class="calendar-header">
                <h2>{move || grid.get().title}</h2>
            </div>
            <div class="calendar-weekdays">
                {["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
                    .into_iter()
                    .map(|d| view! { <div class="calendar-weekday">{d}</div> })
                    .collect_view()}
            </div>
            <div class="calendar-grid">
                {move || {
                    let counts = per_day.get();
                    grid.get()
                        .cells
                        .into_iter()
                        .map(|cell| {
                            let class = if cell.today {
                                format!("{} today", cell.class())
                            } else {
                                cell.class().to_string()
                            };
                            let badge = cell
                                .day
                                .and_then(|d| counts.get(&d).copied())
                                .map(|n| view! {
                                    <span class="calendar-badge" title=format!("{} applied", n)>{n}</span>
                                });
                            view! {
                                <div class=class>
                                    {cell.day.map(|d| view! { <span class="calendar-day">{d}</span> })}
                                    {badge}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
