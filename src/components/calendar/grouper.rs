use crate::components::events::Event;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// Events of one month number, across every year in the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub month: u32,
    /// Dates in this month, newest first, each with its events in feed order
    pub dates: Vec<(NaiveDate, Vec<Event>)>,
    pub event_count: usize,
}

/// Events bucketed by date and by month
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarGroups {
    /// Year the page is rendered for; recorded only, never used to filter
    pub year: i32,
    pub by_date: BTreeMap<NaiveDate, Vec<Event>>,
    /// Month buckets ordered 12 -> 1, only months that have events
    pub months: Vec<MonthBucket>,
}

impl CalendarGroups {
    /// Group `events` (already sorted newest first) by date and by month.
    ///
    /// Months are keyed by number alone, so the same month of different
    /// years shares one bucket.
    pub fn build(year: i32, events: &[Event]) -> Self {
        let mut by_date: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        for event in events {
            by_date.entry(event.date).or_default().push(event.clone());
        }

        let mut by_month: BTreeMap<u32, Vec<(NaiveDate, Vec<Event>)>> = BTreeMap::new();
        for (date, day_events) in by_date.iter().rev() {
            by_month
                .entry(date.month())
                .or_default()
                .push((*date, day_events.clone()));
        }

        let months: Vec<MonthBucket> = by_month
            .into_iter()
            .rev()
            .map(|(month, dates)| {
                let event_count = dates.iter().map(|(_, day)| day.len()).sum();
                MonthBucket {
                    month,
                    dates,
                    event_count,
                }
            })
            .collect();

        debug!(
            "Grouped {} events into {} dates and {} months",
            events.len(),
            by_date.len(),
            months.len()
        );

        Self {
            year,
            by_date,
            months,
        }
    }

    /// Total events per month number
    pub fn month_counts(&self) -> BTreeMap<u32, usize> {
        self.months
            .iter()
            .map(|bucket| (bucket.month, bucket.event_count))
            .collect()
    }

    /// Month numbers in presentation order
    pub fn month_numbers(&self) -> Vec<u32> {
        self.months.iter().map(|bucket| bucket.month).collect()
    }

    /// Events on an exact date
    pub fn events_on(&self, date: NaiveDate) -> &[Event] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
