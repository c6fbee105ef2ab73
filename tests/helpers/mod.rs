//! Shared setup for the router tests: an in-memory record store and an
//! application state wired to it.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, Response, header},
};
use dit::{
    AppState,
    config::{Config, ObservabilityConfig, ServerConfig, SiteConfig},
};
use dit_contact::{RecordFields, RecordHandle, RecordStore, SubmissionHandler};
use dit_notion::NotionConfig;
use http_body_util::BodyExt;

/// In-memory record store that keeps every write.
#[derive(Clone, Default)]
pub struct FakeStore {
    pub records: Arc<Mutex<Vec<RecordFields>>>,
    pub fail_with: Option<String>,
}

impl FakeStore {
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Arc::default(),
            fail_with: Some(message.into()),
        }
    }

    pub fn records(&self) -> Vec<RecordFields> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RecordStore for FakeStore {
    async fn create_record(&self, fields: &RecordFields) -> dit_shared::Result<RecordHandle> {
        if let Some(message) = &self.fail_with {
            return Err(dit_shared::Error::Store(message.to_owned()));
        }

        let mut records = self.records.lock().unwrap();
        records.push(fields.clone());

        Ok(RecordHandle {
            id: format!("page-{}", records.len()),
            url: None,
        })
    }
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        notion: NotionConfig::default(),
        observability: ObservabilityConfig::default(),
        site: SiteConfig::default(),
    }
}

pub fn state(store: FakeStore) -> AppState {
    AppState {
        config: config(),
        handler: SubmissionHandler::new(Arc::new(store)),
    }
}

pub fn json_request(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub const COMPLETE_FORM: &[(&str, &str)] = &[
    ("name", "홍길동"),
    ("email_local_part", "hong"),
    ("email_domain", "naver.com"),
    ("email_domain_custom", ""),
    ("phone_part1", "010"),
    ("phone_part2", "1234"),
    ("phone_part3", "5678"),
    ("message", "점검 요청"),
];
