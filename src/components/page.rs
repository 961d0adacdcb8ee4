use super::calendar::{build_year_grid, CalendarGroups, MonthGrid};
use super::events::{extract_events, Event};
use super::feed::FeedSource;
use super::tags::TagStyles;
use crate::error::AppResult;
use chrono::{Datelike, Utc};
use chrono_tz::Tz;
use tracing::info;

/// Everything the index page shows, derived from one feed download
#[derive(Debug, Clone)]
pub struct CalendarPage {
    pub year: i32,
    pub events: Vec<Event>,
    pub groups: CalendarGroups,
    pub tags: TagStyles,
    pub grid: Vec<MonthGrid>,
}

impl CalendarPage {
    /// Run extract, group, style and grid over raw feed content
    pub fn build(content: &str, year: i32, tz: Tz) -> AppResult<Self> {
        let events = extract_events(content, tz)?;
        let groups = CalendarGroups::build(year, &events);
        let tags = TagStyles::compute(&events);
        let grid = build_year_grid(year, &groups.by_date);

        Ok(Self {
            year,
            events,
            groups,
            tags,
            grid,
        })
    }

    /// Fetch the feed and build the page for the current year in `tz`
    pub async fn load(source: &dyn FeedSource, tz: Tz) -> AppResult<Self> {
        let content = source.fetch().await?;
        let year = Utc::now().with_timezone(&tz).year();
        let page = Self::build(&content, year, tz)?;

        info!(
            "Built calendar page for {}: {} events, {} months, {} tags",
            year,
            page.events.len(),
            page.groups.months.len(),
            page.tags.len()
        );
        Ok(page)
    }
}
