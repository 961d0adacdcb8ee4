use crate::components::calendar::month_name;
use crate::components::{CalendarPage, Event, TagStyles};
use askama::Template;

/// Main calendar page
#[derive(Template, Debug)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub year: i32,
    pub event_count: usize,
    pub tags: Vec<TagView>,
    pub months: Vec<MonthView>,
    pub grid: Vec<GridMonthView>,
}

/// Error page shown when the feed cannot be loaded or rendered
#[derive(Template, Debug)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub status: u16,
    pub message: &'a str,
}

#[derive(Debug)]
pub struct TagView {
    pub name: String,
    pub frequency: usize,
    pub class_name: String,
    pub palette_index: u32,
    pub background: String,
    pub foreground: String,
}

#[derive(Debug)]
pub struct TagChip {
    pub name: String,
    pub class_name: String,
    pub palette_index: u32,
}

#[derive(Debug)]
pub struct EventView {
    pub summary: String,
    pub location: String,
    pub description: String,
    pub tags: Vec<TagChip>,
    /// Direct image URL, empty when the event has no screenshot
    pub screenshot_url: String,
}

#[derive(Debug)]
pub struct DateView {
    pub iso: String,
    pub label: String,
    pub events: Vec<EventView>,
}

#[derive(Debug)]
pub struct MonthView {
    pub number: u32,
    pub name: &'static str,
    pub event_count: usize,
    pub dates: Vec<DateView>,
}

#[derive(Debug)]
pub struct GridDayView {
    pub in_month: bool,
    /// Day of month, empty for padding days
    pub day: String,
    pub iso: String,
    pub summaries: Vec<String>,
}

#[derive(Debug)]
pub struct GridMonthView {
    pub name: &'static str,
    pub weeks: Vec<Vec<GridDayView>>,
}

impl IndexTemplate {
    pub fn from_page(page: &CalendarPage, title: &str) -> Self {
        let tags = page
            .tags
            .iter()
            .map(|style| TagView {
                name: style.name.clone(),
                frequency: style.frequency,
                class_name: tag_class(style.rank),
                palette_index: style.palette_index,
                background: style.background.clone(),
                foreground: style.foreground.clone(),
            })
            .collect();

        let months = page
            .groups
            .months
            .iter()
            .map(|bucket| MonthView {
                number: bucket.month,
                name: month_name(bucket.month),
                event_count: bucket.event_count,
                dates: bucket
                    .dates
                    .iter()
                    .map(|(date, events)| DateView {
                        iso: date.format("%Y-%m-%d").to_string(),
                        label: date.format("%a %-d.%-m.%Y").to_string(),
                        events: events.iter().map(|e| event_view(e, &page.tags)).collect(),
                    })
                    .collect(),
            })
            .collect();

        let grid = page
            .grid
            .iter()
            .map(|month| GridMonthView {
                name: month.name,
                weeks: month
                    .weeks
                    .iter()
                    .map(|week| {
                        week.iter()
                            .map(|cell| GridDayView {
                                in_month: cell.day.is_some(),
                                day: cell.day.map(|d| d.to_string()).unwrap_or_default(),
                                iso: cell.date.format("%Y-%m-%d").to_string(),
                                summaries: cell.events.iter().map(|e| e.summary.clone()).collect(),
                            })
                            .collect()
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: title.to_string(),
            year: page.year,
            event_count: page.events.len(),
            tags,
            months,
            grid,
        }
    }
}

fn event_view(event: &Event, styles: &TagStyles) -> EventView {
    EventView {
        summary: event.summary.clone(),
        location: event.location.clone(),
        description: event.description.clone(),
        tags: event
            .tags
            .iter()
            .map(|tag| {
                let style = styles.get(tag);
                TagChip {
                    name: tag.clone(),
                    class_name: style.map(|s| tag_class(s.rank)).unwrap_or_default(),
                    palette_index: style.map(|s| s.palette_index).unwrap_or(1),
                }
            })
            .collect(),
        screenshot_url: event.screenshot_url.clone().unwrap_or_default(),
    }
}

/// Tag names may hold any text, so CSS classes are keyed by rank
fn tag_class(rank: usize) -> String {
    format!("tag-{}", rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    const FEED: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:TEST\r\n\
BEGIN:VEVENT\r\n\
UID:1\r\n\
SUMMARY:Planning <draft>\r\n\
DTSTART;VALUE=DATE:20240305\r\n\
DESCRIPTION:#work\\nBring notes\\n@https://gyazo.com/abc123\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    #[test]
    fn test_index_renders_page_model() {
        let page = CalendarPage::build(FEED, 2024, Tz::UTC).unwrap();
        let html = IndexTemplate::from_page(&page, "My calendar").render().unwrap();

        assert!(html.contains("My calendar"));
        assert!(html.contains("March"));
        assert!(html.contains("Bring notes"));
        assert!(html.contains("i.gyazo.com"));
        assert!(html.contains("abc123.png"));
        assert!(!html.contains("@https"));
        assert!(html.contains(".tag-0"));
        assert!(html.contains("hsl(0, 70%, 85%)"));
        // Summaries are HTML-escaped
        assert!(html.contains("Planning &#60;draft&#62;") || html.contains("Planning &lt;draft&gt;"));
        assert!(!html.contains("<draft>"));
    }

    #[test]
    fn test_error_page_renders() {
        let html = ErrorTemplate {
            status: 502,
            message: "Feed fetch error: HTTP 404",
        }
        .render()
        .unwrap();

        assert!(html.contains("502"));
        assert!(html.contains("HTTP 404"));
    }
}
