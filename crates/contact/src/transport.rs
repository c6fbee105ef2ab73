use std::time::Duration;

use async_trait::async_trait;

use crate::{ContactSubmission, SubmissionHandler, SubmissionResult};

/// How the collector reaches the submission handler.
///
/// `Ok` carries whatever envelope the handler answered with, successful or
/// not. `Err` means no envelope could be obtained.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> dit_shared::Result<SubmissionResult>;
}

#[async_trait]
impl<T: SubmitTransport + ?Sized> SubmitTransport for std::sync::Arc<T> {
    async fn send(&self, submission: &ContactSubmission) -> dit_shared::Result<SubmissionResult> {
        (**self).send(submission).await
    }
}

/// Calls the handler in the same process.
#[derive(Clone)]
pub struct HandlerTransport(pub SubmissionHandler);

#[async_trait]
impl SubmitTransport for HandlerTransport {
    async fn send(&self, submission: &ContactSubmission) -> dit_shared::Result<SubmissionResult> {
        Ok(self.0.handle(submission).await)
    }
}

/// Posts the submission as JSON to `{base_url}/api/contact`.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> dit_shared::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for HttpTransport {
    async fn send(&self, submission: &ContactSubmission) -> dit_shared::Result<SubmissionResult> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        // Error statuses still carry an envelope when the handler produced them.
        serde_json::from_slice::<SubmissionResult>(&body).map_err(|err| {
            dit_shared::Error::Transport(format!("unexpected response ({status}): {err}"))
        })
    }
}
