//! Timeline Chart Component
//!
//! Applications per day as a filled line.

use leptos::prelude::*;

use crate::analytics::{group_by_date, short_date};
use crate::charts::{line_chart, Frame, GRID, PRIMARY, PRIMARY_FILL, SECONDARY};
use crate::models::Application;

const FRAME: Frame = Frame::new(560.0, 280.0);

#[component]
pub fn TimelineChart(#[prop(into)] applications: Signal<Vec<Application>>) -> impl IntoView {
    let chart = Memo::new(move |_| {
        let series: Vec<(String, usize)> = group_by_date(&applications.get())
            .into_iter()
            .map(|(date, count)| (short_date(date), count))
            .collect();
        line_chart(&series, FRAME)
    });

    view! {
        <div class="chart-container timeline-chart">
            <Show
                when=move || !chart.get().points.is_empty()
                fallback=|| view! { <div class="empty-state"><p>"No dated applications"</p></div> }
            >
                <svg viewBox=FRAME.view_box() role="img">
                    {move || chart.get().ticks
                        .into_iter()
                        .map(|(y, value)| view! {
                            <line
                                x1=FRAME.left
                                x2=FRAME.width - FRAME.right
                                y1=y
                                y2=y
                                stroke=GRID
                            ></line>
                            <text x=FRAME.left - 8.0 y=y + 4.0 text-anchor="end" class="axis-label">
                                {value}
                            </text>
                        })
                        .collect_view()}
                    <path d=move || chart.get().area_path fill=PRIMARY_FILL stroke="none"></path>
                    <path d=move || chart.get().line_path fill="none" stroke=PRIMARY stroke-width="3"></path>
                    {move || chart.get().points
                        .into_iter()
                        .map(|p| view! {
                            <circle cx=p.x cy=p.y r="5" fill=SECONDARY stroke="#fff" stroke-width="2">
                                <title>{p.tooltip()}</title>
                            </circle>
                            <text x=p.x y=FRAME.height - 10.0 text-anchor="middle" class="axis-label">
                                {p.label}
                            </text>
                        })
                        .collect_view()}
                </svg>
            </Show>
        </div>
    }
}
