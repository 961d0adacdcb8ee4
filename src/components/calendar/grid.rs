use super::month_name;
use crate::components::events::Event;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// One cell of a month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Day of month, `None` for padding days from the neighbouring months
    pub day: Option<u32>,
    pub events: Vec<Event>,
}

/// A month laid out as Monday-first weeks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub name: &'static str,
    pub weeks: Vec<Vec<DayCell>>,
}

/// Lay out every month of `year` as full Monday..Sunday weeks.
///
/// Unlike month buckets, cells match events on the exact date, year included.
pub fn build_year_grid(year: i32, by_date: &BTreeMap<NaiveDate, Vec<Event>>) -> Vec<MonthGrid> {
    (1..=12)
        .filter_map(|month| build_month_grid(year, month, by_date))
        .collect()
}

fn build_month_grid(
    year: i32,
    month: u32,
    by_date: &BTreeMap<NaiveDate, Vec<Event>>,
) -> Option<MonthGrid> {
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last_day = last_day_of_month(first_day)?;

    let start = first_day - Duration::days(i64::from(first_day.weekday().num_days_from_monday()));
    let end = last_day + Duration::days(i64::from(6 - last_day.weekday().num_days_from_monday()));

    let mut weeks = Vec::new();
    let mut week = Vec::with_capacity(7);
    for current in start.iter_days().take_while(|d| *d <= end) {
        week.push(DayCell {
            date: current,
            day: (current.month() == month).then(|| current.day()),
            events: by_date.get(&current).cloned().unwrap_or_default(),
        });

        if current.weekday() == Weekday::Sun {
            weeks.push(std::mem::take(&mut week));
        }
    }

    Some(MonthGrid {
        year,
        month,
        name: month_name(month),
        weeks,
    })
}

fn last_day_of_month(first_day: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if first_day.month() == 12 {
        (first_day.year() + 1, 1)
    } else {
        (first_day.year(), first_day.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_twelve_months_with_full_weeks() {
        let grid = build_year_grid(2024, &BTreeMap::new());

        assert_eq!(grid.len(), 12);
        for month in &grid {
            assert!(month.weeks.iter().all(|week| week.len() == 7));
            assert_eq!(month.weeks[0][0].date.weekday(), Weekday::Mon);
        }
        assert_eq!(grid[0].name, "January");
        assert_eq!(grid[11].name, "December");
    }

    #[test]
    fn test_trailing_week_kept() {
        // March 2024 starts on a Friday and ends on a Sunday
        let grid = build_year_grid(2024, &BTreeMap::new());
        let march = &grid[2];

        assert_eq!(march.weeks.len(), 5);
        assert_eq!(march.weeks[0][0].date, date(2024, 2, 26));
        assert_eq!(march.weeks[0][0].day, None);
        assert_eq!(march.weeks[0][4].day, Some(1));
        assert_eq!(march.weeks[4][6].date, date(2024, 3, 31));

        // April 2024 ends on a Tuesday; the last week is padded into May
        let april = &grid[3];
        let last_week = april.weeks.last().unwrap();
        assert_eq!(last_week[1].day, Some(30));
        assert_eq!(last_week[6].date, date(2024, 5, 5));
        assert_eq!(last_week[6].day, None);
    }

    #[test]
    fn test_events_placed_on_exact_date() {
        let event = Event {
            date: date(2024, 3, 5),
            summary: "standup".to_string(),
            location: String::new(),
            description: String::new(),
            tags: Vec::new(),
            screenshot_url: None,
        };
        let mut old = event.clone();
        old.date = date(2023, 3, 5);

        let mut by_date = BTreeMap::new();
        by_date.insert(event.date, vec![event.clone()]);
        by_date.insert(old.date, vec![old]);

        let grid = build_year_grid(2024, &by_date);
        let cells: Vec<&DayCell> = grid[2]
            .weeks
            .iter()
            .flatten()
            .filter(|cell| !cell.events.is_empty())
            .collect();

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].date, date(2024, 3, 5));
        assert_eq!(cells[0].events, vec![event]);
    }

    #[test]
    fn test_december_rolls_over() {
        assert_eq!(last_day_of_month(date(2024, 12, 1)), Some(date(2024, 12, 31)));
        assert_eq!(last_day_of_month(date(2024, 2, 1)), Some(date(2024, 2, 29)));
    }
}
