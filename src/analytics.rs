//! Analytics Calculations
//!
//! Pure aggregation over the loaded applications. Everything here takes
//! `today` explicitly so the page and the tests agree on what "now" is.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::{Application, Status};

/// Label used for applications without a method
pub const UNSPECIFIED_METHOD: &str = "Not Specified";

/// Analytics window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    LastDays(u32),
    #[default]
    All,
}

impl TimeRange {
    /// Options offered by the range selector
    pub const CHOICES: [TimeRange; 5] = [
        TimeRange::LastDays(7),
        TimeRange::LastDays(30),
        TimeRange::LastDays(90),
        TimeRange::LastDays(365),
        TimeRange::All,
    ];

    /// Accepts only the selector's own values
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::CHOICES.into_iter().find(|r| r.value() == s)
    }

    pub fn value(&self) -> String {
        match self {
            TimeRange::LastDays(n) => n.to_string(),
            TimeRange::All => "all".to_string(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            TimeRange::LastDays(365) => "Last year".to_string(),
            TimeRange::LastDays(n) => format!("Last {} days", n),
            TimeRange::All => "All time".to_string(),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value())
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TimeRange::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid time range: {}", s)))
    }
}

/// Keep applications inside the window; undated ones only survive `All`
pub fn filter_by_time_range(apps: &[Application], range: TimeRange, today: NaiveDate) -> Vec<Application> {
    match range {
        TimeRange::All => apps.to_vec(),
        TimeRange::LastDays(days) => {
            // a window reaching past the calendar's start keeps every dated application
            let cutoff = today.checked_sub_signed(Duration::days(i64::from(days)));
            apps.iter()
                .filter(|app| app.application_date.is_some_and(|d| cutoff.map_or(true, |c| d >= c)))
                .cloned()
                .collect()
        }
    }
}

/// Per-status counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn get(&self, status: &Status) -> usize {
        match status {
            Status::Applied => self.applied,
            Status::Interview => self.interview,
            Status::Offer => self.offer,
            Status::Rejected => self.rejected,
            Status::Other(_) => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.applied + self.interview + self.offer + self.rejected
    }

    /// Applications that got any answer
    pub fn responded(&self) -> usize {
        self.interview + self.offer + self.rejected
    }
}

pub fn status_counts(apps: &[Application]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for app in apps {
        match app.status {
            Status::Applied => counts.applied += 1,
            Status::Interview => counts.interview += 1,
            Status::Offer => counts.offer += 1,
            Status::Rejected => counts.rejected += 1,
            Status::Other(_) => {}
        }
    }
    counts
}

/// `part / whole` as a rounded percentage, 0 when `whole` is 0
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

pub fn response_rate(counts: &StatusCounts, total: usize) -> u32 {
    percent(counts.responded(), total)
}

/// Headline numbers at the top of the analytics page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub counts: StatusCounts,
    pub response_rate: u32,
}

pub fn summarize(apps: &[Application]) -> Summary {
    let counts = status_counts(apps);
    Summary {
        total: apps.len(),
        counts,
        response_rate: response_rate(&counts, apps.len()),
    }
}

/// One doughnut slice
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSlice {
    pub status: Status,
    pub value: usize,
    pub percent: u32,
}

impl StatusSlice {
    /// Tooltip text, e.g. "Offer: 2 (25%)"
    pub fn tooltip(&self) -> String {
        format!("{}: {} ({}%)", self.status, self.value, self.percent)
    }
}

pub fn status_breakdown(counts: &StatusCounts) -> Vec<StatusSlice> {
    let total = counts.total();
    Status::ALL
        .iter()
        .map(|status| {
            let value = counts.get(status);
            StatusSlice {
                status: status.clone(),
                value,
                percent: percent(value, total),
            }
        })
        .collect()
}

/// Applications per date, oldest first
pub fn group_by_date(apps: &[Application]) -> Vec<(NaiveDate, usize)> {
    let mut groups: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in apps.iter().filter_map(|a| a.application_date) {
        *groups.entry(date).or_default() += 1;
    }
    groups.into_iter().collect()
}

/// Count by key, keeping the order in which keys first appear
fn count_in_order<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key.to_string(), 1)),
        }
    }
    counts
}

pub fn method_counts(apps: &[Application]) -> Vec<(String, usize)> {
    count_in_order(apps.iter().map(|a| {
        if a.method.trim().is_empty() {
            UNSPECIFIED_METHOD
        } else {
            a.method.as_str()
        }
    }))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyCount {
    pub company: String,
    pub count: usize,
    /// Bar width relative to the top company
    pub bar_percent: f64,
}

/// Most applied-to companies, ties in first-seen order
pub fn top_companies(apps: &[Application], limit: usize) -> Vec<CompanyCount> {
    let mut counts = count_in_order(apps.iter().map(|a| a.company_name.as_str()));
    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);

    let max = counts.first().map(|(_, n)| *n).unwrap_or(0);
    counts
        .into_iter()
        .map(|(company, count)| CompanyCount {
            company,
            count,
            bar_percent: if max == 0 { 0.0 } else { count as f64 / max as f64 * 100.0 },
        })
        .collect()
}

/// Icon and colours for a status in the activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub icon: &'static str,
    pub color: &'static str,
    pub background: &'static str,
}

pub fn status_style(status: &Status) -> StatusStyle {
    match status {
        Status::Interview => StatusStyle { icon: "fa-calendar-check", color: "#2196f3", background: "#e3f2fd" },
        Status::Offer => StatusStyle { icon: "fa-trophy", color: "#4caf50", background: "#e8f5e9" },
        Status::Rejected => StatusStyle { icon: "fa-times-circle", color: "#f44336", background: "#ffebee" },
        Status::Applied | Status::Other(_) => StatusStyle { icon: "fa-paper-plane", color: "#ff9800", background: "#fff3e0" },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub application_id: u32,
    pub company: String,
    pub description: String,
    pub time_ago: String,
    pub style: StatusStyle,
}

/// Latest applications first, undated ones last
pub fn recent_activity(apps: &[Application], limit: usize, today: NaiveDate) -> Vec<ActivityEntry> {
    let mut sorted: Vec<&Application> = apps.iter().collect();
    sorted.sort_by(|a, b| b.application_date.cmp(&a.application_date));

    sorted
        .into_iter()
        .take(limit)
        .map(|app| ActivityEntry {
            application_id: app.id,
            company: app.company_name.clone(),
            description: format!("{} - {}", app.job_title, app.status),
            time_ago: app
                .application_date
                .map(|d| time_ago(d, today))
                .unwrap_or_else(|| "-".to_string()),
            style: status_style(&app.status),
        })
        .collect()
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Human-readable distance from `date` to `today`
pub fn time_ago(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();
    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{} days ago", d),
        d if d < 30 => plural(d / 7, "week"),
        d => plural(d / 30, "month"),
    }
}

/// "Jan 5"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessMetrics {
    pub avg_response_time: String,
    pub interview_rate: u32,
    pub offer_rate: u32,
    pub most_active_day: String,
}

pub fn success_metrics(apps: &[Application]) -> SuccessMetrics {
    let interviews = apps
        .iter()
        .filter(|a| matches!(a.status, Status::Interview | Status::Offer))
        .count();
    let offers = apps.iter().filter(|a| a.status == Status::Offer).count();

    let days = count_in_order(
        apps.iter()
            .filter_map(|a| a.application_date)
            .map(|d| weekday_name(d.weekday())),
    );
    let most_active_day = days
        .iter()
        .fold(None::<&(String, usize)>, |best, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(entry),
        })
        .map(|(day, _)| day.clone())
        .unwrap_or_else(|| "-".to_string());

    SuccessMetrics {
        // the backend doesn't record response dates
        avg_response_time: "-".to_string(),
        interview_rate: percent(interviews, apps.len()),
        offer_rate: percent(offers, interviews),
        most_active_day,
    }
}

/// Application counts per day of the given month, for the dashboard calendar
pub fn counts_in_month(apps: &[Application], year: i32, month: u32) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for date in apps.iter().filter_map(|a| a.application_date) {
        if date.year() == year && date.month() == month {
            *counts.entry(date.day()).or_default() += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_app(id: u32, company: &str, status: Status, method: &str, applied: Option<NaiveDate>) -> Application {
        Application {
            id,
            company_name: company.to_string(),
            job_title: format!("Role {}", id),
            status,
            method: method.to_string(),
            application_date: applied,
            contact_info: None,
            email: None,
            notes: None,
        }
    }

    fn sample() -> Vec<Application> {
        vec![
            make_app(1, "Acme", Status::Applied, "LinkedIn", Some(date(2024, 6, 3))),   // Monday
            make_app(2, "Globex", Status::Interview, "", Some(date(2024, 6, 10))),       // Monday
            make_app(3, "Acme", Status::Offer, "Referral", Some(date(2024, 5, 1))),      // Wednesday
            make_app(4, "Initech", Status::Rejected, "LinkedIn", None),
            make_app(5, "Acme", Status::Other("Ghosted".into()), "LinkedIn", Some(date(2024, 6, 12))),
        ]
    }

    #[test]
    fn test_time_range_parse_and_value() {
        assert_eq!(TimeRange::parse("30"), Some(TimeRange::LastDays(30)));
        assert_eq!(TimeRange::parse("all"), Some(TimeRange::All));
        assert_eq!(TimeRange::parse("soon"), None);
        assert_eq!(TimeRange::parse("4000000000"), None);
        assert_eq!(TimeRange::parse("14"), None);
        assert_eq!(TimeRange::LastDays(7).value(), "7");
        assert_eq!(TimeRange::LastDays(365).label(), "Last year");
    }

    #[test]
    fn test_filter_by_time_range() {
        let apps = sample();
        let today = date(2024, 6, 12);

        assert_eq!(filter_by_time_range(&apps, TimeRange::All, today).len(), 5);

        let week: Vec<u32> = filter_by_time_range(&apps, TimeRange::LastDays(7), today)
            .iter()
            .map(|a| a.id)
            .collect();
        // cutoff is June 5; the undated application is dropped
        assert_eq!(week, vec![2, 5]);

        let month = filter_by_time_range(&apps, TimeRange::LastDays(30), today);
        assert_eq!(month.len(), 3);
    }

    #[test]
    fn test_huge_window_keeps_every_dated_application() {
        let apps = sample();
        let dated = apps.iter().filter(|a| a.application_date.is_some()).count();
        let kept = filter_by_time_range(&apps, TimeRange::LastDays(u32::MAX), date(2024, 6, 12));
        assert_eq!(kept.len(), dated);
    }

    #[test]
    fn test_status_counts_ignore_unknown() {
        let counts = status_counts(&sample());
        assert_eq!(counts, StatusCounts { applied: 1, interview: 1, offer: 1, rejected: 1 });
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_response_rate() {
        let apps = sample();
        let summary = summarize(&apps);
        // 3 responses out of 5 applications
        assert_eq!(summary.response_rate, 60);
        assert_eq!(summary.total, 5);
        assert_eq!(response_rate(&StatusCounts::default(), 0), 0);
    }

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
    }

    #[test]
    fn test_status_breakdown_tooltips() {
        let counts = StatusCounts { applied: 2, interview: 1, offer: 1, rejected: 0 };
        let slices = status_breakdown(&counts);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].tooltip(), "Applied: 2 (50%)");
        assert_eq!(slices[3].tooltip(), "Rejected: 0 (0%)");
    }

    #[test]
    fn test_group_by_date_is_chronological() {
        let mut apps = sample();
        apps.push(make_app(6, "Hooli", Status::Applied, "", Some(date(2024, 6, 3))));
        let groups = group_by_date(&apps);
        assert_eq!(
            groups,
            vec![
                (date(2024, 5, 1), 1),
                (date(2024, 6, 3), 2),
                (date(2024, 6, 10), 1),
                (date(2024, 6, 12), 1),
            ]
        );
    }

    #[test]
    fn test_method_counts_in_first_seen_order() {
        let counts = method_counts(&sample());
        assert_eq!(
            counts,
            vec![
                ("LinkedIn".to_string(), 3),
                (UNSPECIFIED_METHOD.to_string(), 1),
                ("Referral".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_companies() {
        let top = top_companies(&sample(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].company, "Acme");
        assert_eq!(top[0].count, 3);
        assert_eq!(top[0].bar_percent, 100.0);
        // Globex and Initech tie; Globex was seen first
        assert_eq!(top[1].company, "Globex");
        assert!((top[1].bar_percent - 100.0 / 3.0).abs() < 1e-9);

        assert!(top_companies(&[], 5).is_empty());
    }

    #[test]
    fn test_recent_activity_order() {
        let today = date(2024, 6, 12);
        let feed = recent_activity(&sample(), 10, today);
        let ids: Vec<u32> = feed.iter().map(|e| e.application_id).collect();
        assert_eq!(ids, vec![5, 2, 1, 3, 4]);

        assert_eq!(feed[0].time_ago, "Today");
        assert_eq!(feed[1].time_ago, "2 days ago");
        assert_eq!(feed[1].description, "Role 2 - Interview");
        assert_eq!(feed[1].style.icon, "fa-calendar-check");
        assert_eq!(feed[4].time_ago, "-");

        assert_eq!(recent_activity(&sample(), 2, today).len(), 2);
    }

    #[test]
    fn test_time_ago_buckets() {
        let today = date(2024, 6, 30);
        assert_eq!(time_ago(date(2024, 6, 30), today), "Today");
        assert_eq!(time_ago(date(2024, 7, 2), today), "Today");
        assert_eq!(time_ago(date(2024, 6, 29), today), "Yesterday");
        assert_eq!(time_ago(date(2024, 6, 24), today), "6 days ago");
        assert_eq!(time_ago(date(2024, 6, 23), today), "1 week ago");
        assert_eq!(time_ago(date(2024, 6, 10), today), "2 weeks ago");
        assert_eq!(time_ago(date(2024, 5, 31), today), "1 month ago");
        assert_eq!(time_ago(date(2024, 1, 1), today), "6 months ago");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(date(2024, 1, 5)), "Jan 5");
        assert_eq!(short_date(date(2024, 11, 23)), "Nov 23");
    }

    #[test]
    fn test_success_metrics() {
        let metrics = success_metrics(&sample());
        // Interview + Offer = 2 of 5
        assert_eq!(metrics.interview_rate, 40);
        // 1 offer out of 2 interviews
        assert_eq!(metrics.offer_rate, 50);
        assert_eq!(metrics.most_active_day, "Monday");
        assert_eq!(metrics.avg_response_time, "-");
    }

    #[test]
    fn test_success_metrics_empty() {
        let metrics = success_metrics(&[]);
        assert_eq!(metrics.interview_rate, 0);
        assert_eq!(metrics.offer_rate, 0);
        assert_eq!(metrics.most_active_day, "-");
    }

    #[test]
    fn test_most_active_day_tie_keeps_first_seen() {
        let apps = vec![
            make_app(1, "A", Status::Applied, "", Some(date(2024, 6, 5))),  // Wednesday
            make_app(2, "B", Status::Applied, "", Some(date(2024, 6, 3))),  // Monday
        ];
        assert_eq!(success_metrics(&apps).most_active_day, "Wednesday");
    }

    #[test]
    fn test_counts_in_month() {
        let counts = counts_in_month(&sample(), 2024, 6);
        assert_eq!(counts.get(&3), Some(&1));
        assert_eq!(counts.get(&10), Some(&1));
        assert_eq!(counts.get(&1), None);
        assert_eq!(counts.len(), 3);
    }
}
