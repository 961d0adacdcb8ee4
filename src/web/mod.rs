mod handlers;
pub mod templates;

use std::sync::Arc;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use chrono_tz::Tz;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::components::{FeedSource, HttpFeedFetcher};
use crate::config::Config;
use crate::error::{AppResult, Error};
use handlers::{health_handler, index_handler};
use templates::ErrorTemplate;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    /// Where the feed is fetched from on each request
    pub source: Arc<dyn FeedSource>,
    /// Timezone used to turn event start times into dates
    pub tz: Tz,
    pub page_title: String,
}

impl AppState {
    /// State backed by the HTTP fetcher described in `config`
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let fetcher = HttpFeedFetcher::from_config(config)?;
        Ok(Self::new(Arc::new(fetcher), config.tz()?, &config.page_title))
    }

    pub fn new(source: Arc<dyn FeedSource>, tz: Tz, page_title: &str) -> Self {
        Self {
            source,
            tz,
            page_title: page_title.to_string(),
        }
    }
}

/// Register all routes; called once at startup
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Feed problems are the remote side's fault
        let status = if self.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let message = self.to_string();
        let page = ErrorTemplate {
            status: status.as_u16(),
            message: &message,
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!("Failed to render error page: {}", e);
                (status, message).into_response()
            }
        }
    }
}
