mod description;
mod extractor;
pub mod models;

pub use description::{parse_description, screenshot_image_url, ParsedDescription};
pub use extractor::extract_events;
pub use models::Event;
