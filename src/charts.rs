//! Chart Geometry
//!
//! Turns aggregated counts into SVG path data. Components only render
//! what these functions return.

use std::f64::consts::PI;

use crate::analytics::StatusSlice;
use crate::models::Status;

pub const PRIMARY: &str = "#0d4715";
pub const SECONDARY: &str = "#1b5e20";
pub const PRIMARY_FILL: &str = "rgba(13, 71, 21, 0.1)";
pub const GRID: &str = "rgba(0, 0, 0, 0.05)";

/// Bar colours, cycled in order
pub const GRADIENT: [&str; 6] = ["#0d4715", "#1b5e20", "#2e7d32", "#388e3c", "#43a047", "#4caf50"];

pub fn status_color(status: &Status) -> &'static str {
    match status {
        Status::Applied => "#ff9800",
        Status::Interview => "#2196f3",
        Status::Offer => "#4caf50",
        Status::Rejected => "#f44336",
        Status::Other(_) => "#9e9e9e",
    }
}

/// Drawing area inside an SVG viewBox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, left: 40.0, right: 16.0, top: 16.0, bottom: 32.0 }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    pub fn baseline(&self) -> f64 {
        self.top + self.plot_height()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Integer axis from zero up to at least `max`, with whole-number steps
pub fn integer_ticks(max: usize, max_ticks: usize) -> Vec<usize> {
    let max = max.max(1);
    let step = max.div_ceil(max_ticks.max(1)).max(1);
    let top = max.div_ceil(step) * step;
    (0..=top).step_by(step).collect()
}

// ========================
// Doughnut
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub path: String,
    pub color: &'static str,
    pub tooltip: String,
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

fn ring_segment(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let large = if end - start > PI { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, outer, start);
    let (x1, y1) = polar(cx, cy, outer, end);
    let (x2, y2) = polar(cx, cy, inner, end);
    let (x3, y3) = polar(cx, cy, inner, start);
    format!(
        "M {:.3} {:.3} A {o} {o} 0 {l} 1 {:.3} {:.3} L {:.3} {:.3} A {i} {i} 0 {l} 0 {:.3} {:.3} Z",
        x0, y0, x1, y1, x2, y2, x3, y3,
        o = outer, i = inner, l = large
    )
}

/// Arc paths for each non-empty slice, clockwise from twelve o'clock
pub fn doughnut_arcs(slices: &[StatusSlice], cx: f64, cy: f64, outer: f64, inner: f64) -> Vec<Arc> {
    let total: usize = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut angle = -PI / 2.0;
    let mut arcs = Vec::new();
    for slice in slices.iter().filter(|s| s.value > 0) {
        let sweep = slice.value as f64 / total as f64 * 2.0 * PI;
        // a full circle can't be drawn as one arc
        let sweep = sweep.min(2.0 * PI - 1e-4);
        arcs.push(Arc {
            path: ring_segment(cx, cy, outer, inner, angle, angle + sweep),
            color: status_color(&slice.status),
            tooltip: slice.tooltip(),
        });
        angle += sweep;
    }
    arcs
}

// ========================
// Timeline
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: usize,
}

impl LinePoint {
    /// Hover text, e.g. "Jan 5: 3 applications"
    pub fn tooltip(&self) -> String {
        let noun = if self.value == 1 { "application" } else { "applications" };
        format!("{}: {} {}", self.label, self.value, noun)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub points: Vec<LinePoint>,
    pub line_path: String,
    pub area_path: String,
    /// (y, value) for each horizontal grid line
    pub ticks: Vec<(f64, usize)>,
}

/// Place labelled counts left to right; the y axis starts at zero
pub fn line_chart(series: &[(String, usize)], frame: Frame) -> LineChart {
    let max = series.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let ticks = integer_ticks(max, 5);
    let top_value = ticks.last().copied().unwrap_or(1).max(1) as f64;

    let scale_y = |v: usize| frame.baseline() - v as f64 / top_value * frame.plot_height();
    let n = series.len();
    let points: Vec<LinePoint> = series
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let x = if n <= 1 {
                frame.left + frame.plot_width() / 2.0
            } else {
                frame.left + i as f64 / (n - 1) as f64 * frame.plot_width()
            };
            LinePoint { x, y: scale_y(*value), label: label.clone(), value: *value }
        })
        .collect();

    let line_path = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{} {:.2} {:.2}", if i == 0 { "M" } else { "L" }, p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    let area_path = match (points.first(), points.last()) {
        (Some(first), Some(last)) => format!(
            "{} L {:.2} {:.2} L {:.2} {:.2} Z",
            line_path,
            last.x,
            frame.baseline(),
            first.x,
            frame.baseline()
        ),
        _ => String::new(),
    };

    LineChart {
        points,
        line_path,
        area_path,
        ticks: ticks.iter().map(|&t| (scale_y(t), t)).collect(),
    }
}

// ========================
// Horizontal bars
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: usize,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

impl Bar {
    /// "3 applications"
    pub fn tooltip(&self) -> String {
        format!("{} application{}", self.value, if self.value == 1 { "" } else { "s" })
    }
}

/// One bar per entry, stacked top to bottom
pub fn horizontal_bars(entries: &[(String, usize)], frame: Frame, max_thickness: f64) -> Vec<Bar> {
    if entries.is_empty() {
        return Vec::new();
    }
    let max = entries.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let top_value = integer_ticks(max, 5).last().copied().unwrap_or(1).max(1) as f64;

    let row = frame.plot_height() / entries.len() as f64;
    let thickness = (row * 0.7).min(max_thickness);

    entries
        .iter()
        .enumerate()
        .map(|(i, (label, value))| Bar {
            label: label.clone(),
            value: *value,
            y: frame.top + i as f64 * row + (row - thickness) / 2.0,
            width: *value as f64 / top_value * frame.plot_width(),
            height: thickness,
            color: GRADIENT[i % GRADIENT.len()],
        })
        .collect()
}
