// Pipeline stages
pub mod calendar;
pub mod events;
pub mod feed;
pub mod page;
pub mod tags;

pub use calendar::{CalendarGroups, MonthBucket, MonthGrid};
pub use events::Event;
pub use feed::{FeedSource, HttpFeedFetcher};
pub use page::CalendarPage;
pub use tags::{TagStyle, TagStyles};
