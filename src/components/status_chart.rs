//! Status Chart Component
//!
//! Doughnut of applications per status with a legend on the right.

use leptos::prelude::*;

use crate::analytics::{status_breakdown, StatusCounts};
use crate::charts::{doughnut_arcs, status_color};

const SIZE: f64 = 200.0;
const OUTER: f64 = 90.0;
const INNER: f64 = 55.0;

#[component]
pub fn StatusChart(#[prop(into)] counts: Signal<StatusCounts>) -> impl IntoView {
    let slices = Memo::new(move |_| status_breakdown(&counts.get()));
    let arcs = move || doughnut_arcs(&slices.get(), SIZE / 2.0, SIZE / 2.0, OUTER, INNER);

    view! {
        <div class="chart-container status-chart">
            <svg class="doughnut" viewBox=format!("0 0 {} {}", SIZE, SIZE) role="img">
                <circle
                    cx=SIZE / 2.0
                    cy=SIZE / 2.0
                    r=(OUTER + INNER) / 2.0
                    fill="none"
                    stroke="#eeeeee"
                    stroke-width=OUTER - INNER
                />
                {move || arcs()
                    .into_iter()
                    .map(|arc| view! {
                        <path d=arc.path fill=arc.color stroke="#fff" stroke-width="2">
                            <title>{arc.tooltip}</title>
                        </path>
                    })
                    .collect_view()}
            </svg>
            <ul class="chart-legend">
                {move || slices.get()
                    .into_iter()
                    .map(|slice| view! {
                        <li class="legend-item" title=slice.tooltip()>
                            <span
                                class="legend-dot"
                                style=format!("background-color: {};", status_color(&slice.status))
                            ></span>
                            <span class="legend-label">{slice.tooltip()}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
