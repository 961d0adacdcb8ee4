use chrono::NaiveDate;

/// A calendar event as shown on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub summary: String,
    pub location: String,
    /// Description with tag lines and screenshot lines removed
    pub description: String,
    pub tags: Vec<String>,
    pub screenshot_url: Option<String>,
}
