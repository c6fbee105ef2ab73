use std::sync::Arc;

use validator::Validate;

use crate::{
    ContactSubmission, PropertyValue, RecordFields, RecordHandle, RecordStore, SubmissionResult,
};

/// Field names of the contact database in the record store.
pub mod schema {
    pub const NAME: &str = "이름";
    pub const EMAIL: &str = "이메일";
    pub const PHONE: &str = "전화번호";
    pub const CONTENT: &str = "의뢰내용";
}

/// Maps a submission onto the contact database schema.
pub fn record_fields(submission: &ContactSubmission) -> RecordFields {
    RecordFields::new()
        .with(schema::NAME, PropertyValue::Title(submission.name.to_owned()))
        .with(schema::EMAIL, PropertyValue::Email(submission.email.to_owned()))
        .with(
            schema::PHONE,
            PropertyValue::PhoneNumber(submission.phone.to_owned()),
        )
        .with(
            schema::CONTENT,
            PropertyValue::RichText(submission.content.to_owned().unwrap_or_default()),
        )
}

/// Server side of the pipeline: validates a submission and writes it to the
/// record store. Stateless, safe to share between requests.
///
/// There is no idempotency key, a submission sent twice creates two records.
#[derive(Clone)]
pub struct SubmissionHandler {
    store: Arc<dyn RecordStore>,
}

impl SubmissionHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn submit(&self, payload: &ContactSubmission) -> dit_shared::Result<RecordHandle> {
        if let Err(err) = payload.validate() {
            tracing::info!(err = %err, "contact submission rejected: missing required fields");
            return Err(err.into());
        }

        let fields = record_fields(payload);

        match self.store.create_record(&fields).await {
            Ok(handle) => {
                tracing::info!(record_id = %handle.id, "contact submission stored");

                Ok(handle)
            }
            Err(err) => {
                tracing::error!(
                    kind = err.kind(),
                    err = %err,
                    "failed to store contact submission"
                );

                Err(err)
            }
        }
    }

    /// Never fails: every error is folded into the envelope.
    pub async fn handle(&self, payload: &ContactSubmission) -> SubmissionResult {
        self.submit(payload).await.into()
    }
}
