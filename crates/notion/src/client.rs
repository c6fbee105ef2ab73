use std::time::Duration;

use async_trait::async_trait;
use dit_contact::{PropertyValue, RecordFields, RecordHandle, RecordStore};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::NotionConfig;

/// Page object returned by `POST /v1/pages`.
#[derive(Debug, Deserialize)]
struct Page {
    id: String,
    #[serde(default)]
    url: Option<String>,
}

/// Error object returned by the Notion API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    message: String,
}

/// HTTP client for the Notion pages API.
#[derive(Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    config: NotionConfig,
}

impl NotionClient {
    pub fn new(config: NotionConfig) -> dit_shared::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &NotionConfig {
        &self.config
    }

    fn pages_url(&self) -> String {
        format!("{}/v1/pages", self.config.base_url.trim_end_matches('/'))
    }

    /// Creates one page in the configured database.
    pub async fn create_page(&self, fields: &RecordFields) -> dit_shared::Result<RecordHandle> {
        self.config.check()?;

        tracing::debug!(
            database_id = %self.config.database_id,
            properties = fields.len(),
            "creating notion page"
        );

        let response = self
            .http
            .post(self.pages_url())
            .bearer_auth(&self.config.api_key)
            .header("Notion-Version", &self.config.version)
            .json(&page_body(&self.config.database_id, fields))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return match serde_json::from_str::<ApiError>(&body) {
                Ok(err) => {
                    tracing::warn!(%status, code = %err.code, "notion rejected page");
                    Err(dit_shared::Error::Store(err.message))
                }
                Err(_) => Err(dit_shared::Error::Store(format!(
                    "Notion API responded with {status}"
                ))),
            };
        }

        let page = response.json::<Page>().await?;

        Ok(RecordHandle {
            id: page.id,
            url: page.url,
        })
    }
}

#[async_trait]
impl RecordStore for NotionClient {
    async fn create_record(&self, fields: &RecordFields) -> dit_shared::Result<RecordHandle> {
        self.create_page(fields).await
    }
}

fn rich_text(content: &str) -> Value {
    json!([{ "text": { "content": content } }])
}

fn property(value: &PropertyValue) -> Value {
    match value {
        PropertyValue::Title(v) => json!({ "title": rich_text(v) }),
        PropertyValue::Email(v) => json!({ "email": v }),
        PropertyValue::PhoneNumber(v) => json!({ "phone_number": v }),
        PropertyValue::RichText(v) => json!({ "rich_text": rich_text(v) }),
    }
}

fn page_body(database_id: &str, fields: &RecordFields) -> Value {
    let properties = fields
        .iter()
        .map(|(name, value)| (name.to_owned(), property(value)))
        .collect::<Map<String, Value>>();

    json!({
        "parent": { "database_id": database_id },
        "properties": properties,
    })
}
