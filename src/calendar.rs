//! Calendar Grid
//!
//! Month layout for the dashboard calendar, Sunday-first.

use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    /// Day of month, `None` for padding cells
    pub day: Option<u32>,
    pub saturday: bool,
    pub today: bool,
}

impl CalendarCell {
    pub fn class(&self) -> &'static str {
        match (self.day.is_none(), self.saturday) {
            (true, true) => "calendar-cell empty saturday",
            (true, false) => "calendar-cell empty",
            (false, true) => "calendar-cell saturday",
            (false, false) => "calendar-cell",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub title: String,
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Cells for the month containing `today`, padded to whole weeks
pub fn month_grid(today: NaiveDate) -> MonthGrid {
    let (year, month) = (today.year(), today.month());
    let first_column = today
        .with_day(1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0);
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity(42);
    for _ in 0..first_column {
        cells.push(CalendarCell { day: None, saturday: false, today: false });
    }
    for day in 1..=days {
        cells.push(CalendarCell {
            day: Some(day),
            saturday: (first_column + day - 1) % 7 == 6,
            today: day == today.day(),
        });
    }
    while cells.len() % 7 != 0 {
        let column = cells.len() % 7;
        cells.push(CalendarCell { day: None, saturday: column == 6, today: false });
    }

    MonthGrid {
        title: format!("{} {}", MONTH_NAMES[(month - 1) as usize], year),
        year,
        month,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_june_2024_grid() {
        // June 1st 2024 is a Saturday
        let grid = month_grid(date(2024, 6, 12));

        assert_eq!(grid.title, "June 2024");
        assert_eq!(grid.cells.len() % 7, 0);
        assert_eq!(grid.cells.iter().take_while(|c| c.day.is_none()).count(), 6);
        assert_eq!(grid.cells[6], CalendarCell { day: Some(1), saturday: true, today: false });
        assert_eq!(grid.cells[7].day, Some(2));
        assert!(!grid.cells[7].saturday);

        let today: Vec<u32> = grid.cells.iter().filter(|c| c.today).filter_map(|c| c.day).collect();
        assert_eq!(today, vec![12]);

        // 6 leading + 30 days = 36, padded to 42; the last cell is an empty Saturday
        assert_eq!(grid.cells.len(), 42);
        let last = grid.cells[41];
        assert_eq!(last.day, None);
        assert!(last.saturday);
        assert_eq!(last.class(), "calendar-cell empty saturday");
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_padding() {
        // September 1st 2024 is a Sunday
        let grid = month_grid(date(2024, 9, 1));
        assert_eq!(grid.cells[0].day, Some(1));
        assert_eq!(grid.cells[0].class(), "calendar-cell");
        assert!(grid.cells[6].saturday);
        assert_eq!(grid.cells[6].day, Some(7));
    }

    #[test]
    fn test_exact_four_weeks() {
        // February 2015 starts on Sunday and has 28 days
        let grid = month_grid(date(2015, 2, 28));
        assert_eq!(grid.cells.len(), 28);
        assert!(grid.cells.iter().all(|c| c.day.is_some()));
        assert!(grid.cells[27].today);
    }
}
