//! ICS parsing using the icalendar crate's parser.

use super::description::parse_description;
use super::models::Event;
use crate::error::{parse_error, AppResult};
use chrono::NaiveDate;
use chrono_tz::Tz;
use icalendar::{
    parser::{read_calendar, unfold, Component},
    CalendarDateTime, DatePerhapsTime,
};
use tracing::{debug, info, warn};

/// Parse feed content into events, newest date first.
///
/// Components without a usable DTSTART are skipped. Events sharing a date
/// keep their order from the feed.
pub fn extract_events(content: &str, tz: Tz) -> AppResult<Vec<Event>> {
    let content = content.trim_start_matches('\u{feff}');
    let trimmed = content.trim();
    if !trimmed.starts_with("BEGIN:VCALENDAR") {
        return Err(parse_error("Feed does not start with BEGIN:VCALENDAR"));
    }
    if !trimmed.ends_with("END:VCALENDAR") {
        return Err(parse_error("Feed does not end with END:VCALENDAR"));
    }

    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| parse_error(&e.to_string()))?;

    // The parser stops quietly at the first line it cannot read
    if calendar.properties.is_empty() && calendar.components.is_empty() {
        return Err(parse_error("Feed has no readable calendar body"));
    }

    let mut vevents = Vec::new();
    for component in &calendar.components {
        collect_vevents(component, &mut vevents);
    }

    let mut events: Vec<Event> = vevents
        .into_iter()
        .filter_map(|vevent| to_event(vevent, tz))
        .collect();

    // Stable: same-date events stay in feed order
    events.sort_by(|a, b| b.date.cmp(&a.date));

    info!("Extracted {} events from feed", events.len());
    Ok(events)
}

/// Depth-first walk collecting every VEVENT
fn collect_vevents<'a>(component: &'a Component<'a>, out: &mut Vec<&'a Component<'a>>) {
    if component.name == "VEVENT" {
        out.push(component);
    }
    for child in &component.components {
        collect_vevents(child, out);
    }
}

fn to_event(vevent: &Component<'_>, tz: Tz) -> Option<Event> {
    let date = match vevent
        .find_prop("DTSTART")
        .map(|prop| DatePerhapsTime::try_from(prop))
    {
        Some(Ok(start)) => start_date(start, tz),
        Some(Err(_)) | None => {
            warn!(
                "Skipping event without a usable DTSTART: {}",
                text_prop(vevent, "UID")
            );
            return None;
        }
    };

    let parsed = parse_description(&text_prop(vevent, "DESCRIPTION"));

    Some(Event {
        date,
        summary: text_prop(vevent, "SUMMARY"),
        location: text_prop(vevent, "LOCATION"),
        description: parsed.text,
        tags: parsed.tags,
        screenshot_url: parsed.screenshot_url,
    })
}

/// Calendar date of an event start.
///
/// Zoned and floating times keep the date written in the feed; only UTC
/// times are moved into `tz` first.
fn start_date(start: DatePerhapsTime, tz: Tz) -> NaiveDate {
    match start {
        DatePerhapsTime::Date(date) => date,
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => dt.with_timezone(&tz).date_naive(),
        DatePerhapsTime::DateTime(CalendarDateTime::Floating(naive)) => naive.date(),
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, .. }) => {
            date_time.date()
        }
    }
}

/// Text value of a property; missing properties become an empty string
fn text_prop(component: &Component<'_>, name: &str) -> String {
    match component.find_prop(name) {
        Some(prop) => unescape_text(prop.val.as_ref()),
        None => {
            debug!("Event has no {}, using empty value", name);
            String::new()
        }
    }
}

/// Decode RFC 5545 TEXT escapes (`\n`, `\,`, `\;`, `\\`)
fn unescape_text(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => result.push('\n'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }

    result
}
