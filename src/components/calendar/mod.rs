mod grid;
mod grouper;

pub use grid::{build_year_grid, DayCell, MonthGrid};
pub use grouper::{CalendarGroups, MonthBucket};

/// English month name for a month number (1-12)
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}
