use askama::Template;
use axum::{extract::State, response::Html};
use tracing::{error, info};

use super::templates::IndexTemplate;
use super::AppState;
use crate::components::CalendarPage;
use crate::error::Error;

/// Handler for the index page: fetch, transform and render on every request
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, Error> {
    info!("Rendering calendar from {}", state.source.describe());

    let page = CalendarPage::load(state.source.as_ref(), state.tz)
        .await
        .inspect_err(|e| error!("Failed to load calendar: {}", e))?;

    let html = IndexTemplate::from_page(&page, &state.page_title).render()?;
    Ok(Html(html))
}

/// Liveness check; does not touch the feed
pub async fn health_handler() -> &'static str {
    "OK"
}
