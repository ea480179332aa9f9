//! Method Chart Component
//!
//! Horizontal bars of applications per application method.

use leptos::prelude::*;

use crate::analytics::method_counts;
use crate::charts::{horizontal_bars, Frame};
use crate::models::Application;

const FRAME: Frame = Frame { width: 480.0, height: 260.0, left: 120.0, right: 40.0, top: 10.0, bottom: 10.0 };
const MAX_BAR_THICKNESS: f64 = 40.0;

#[component]
pub fn MethodChart(#[prop(into)] applications: Signal<Vec<Application>>) -> impl IntoView {
    let bars = Memo::new(move |_| {
        horizontal_bars(&method_counts(&applications.get()), FRAME, MAX_BAR_THICKNESS)
    });

    view! {
        <div class="chart-container method-chart">
            <Show
                when=move || !bars.get().is_empty()
                fallback=|| view! { <div class="empty-state"><p>"No data available"</p></div> }
            >
                <svg viewBox=FRAME.view_box() role="img">
                    {move || bars.get()
                        .into_iter()
                        .map(|bar| {
                            let mid = bar.y + bar.height / 2.0 + 4.0;
                            view! {
                                <text x=FRAME.left - 8.0 y=mid text-anchor="end" class="axis-label">
                                    {bar.label.clone()}
                                </text>
                                <rect
                                    x=FRAME.left
                                    y=bar.y
                                    width=bar.width
                                    height=bar.height
                                    rx="8"
                                    fill=bar.color
                                ></rect>
                                <text x=FRAME.left + bar.width + 6.0 y=mid class="bar-value">
                                    {bar.tooltip()}
                                </text>
                            }
                        })
                        .collect_view()}
                </svg>
            </Show>
        </div>
    }
}
