use axum::{
    Json,
    extract::{Form, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use dit_contact::{
    ContactSubmission, DIRECT_ENTRY, EmailDomain, Field, FormCollector, HandlerTransport,
    SubmissionResult,
};
use serde::Deserialize;

use crate::{
    routes::{AppState, IndexTemplate},
    template::Template,
};

/// Fields posted by the landing page form.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ActionInput {
    pub name: String,
    pub email_local_part: String,
    pub email_domain: String,
    pub email_domain_custom: String,
    pub phone_part1: String,
    pub phone_part2: String,
    pub phone_part3: String,
    pub message: String,
}

impl ActionInput {
    /// Resolves the domain select against the free-text domain input.
    pub fn into_fields(self) -> [(Field, String); 7] {
        let domain = match self.email_domain.as_str() {
            DIRECT_ENTRY => self.email_domain_custom,
            "" => EmailDomain::default().to_string(),
            _ => self.email_domain,
        };

        [
            (Field::Name, self.name),
            (Field::EmailLocalPart, self.email_local_part),
            (Field::EmailDomain, domain),
            (Field::PhonePart1, self.phone_part1),
            (Field::PhonePart2, self.phone_part2),
            (Field::PhonePart3, self.phone_part3),
            (Field::Message, self.message),
        ]
    }
}

/// POST /contact - Form submit without script
///
/// Runs the collector in-process and re-renders the landing page with its
/// feedback. The draft is cleared on success and kept otherwise.
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let mut collector = FormCollector::new(HandlerTransport(app.handler.clone()));

    for (field, value) in input.into_fields() {
        collector.update_field(field, value);
    }

    let outcome = collector.submit().await;
    tracing::debug!(?outcome, "contact form processed");

    template.render(IndexTemplate::new(
        &template.site,
        collector.draft(),
        collector.feedback(),
    ))
}

/// POST /api/contact - JSON submission endpoint
///
/// The body is always a [`SubmissionResult`]: 200 when stored, 400 when a
/// required field is missing or the body is not a submission, 500 when the
/// record store failed.
pub async fn api(
    State(app): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::info!(err = %rejection, "malformed contact payload");

            return (StatusCode::BAD_REQUEST, Json(SubmissionResult::invalid()));
        }
    };

    let result = app.handler.submit(&payload).await;

    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(dit_shared::Error::Validate(_)) => StatusCode::BAD_REQUEST,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(SubmissionResult::from(result)))
}
