use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use dit_contact::SubmissionHandler;

use crate::template::{NotFoundTemplate, Template};

mod assets;
mod contact;
mod health;
mod index;

pub use contact::ActionInput;
pub use index::IndexTemplate;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub handler: SubmissionHandler,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            site: template.site.clone(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/api/contact", post(contact::api))
        .route("/static/{*path}", get(assets::asset))
        .fallback(fallback)
        .with_state(app_state)
}
