#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use dit_contact::{
    ContactDraft, ContactSubmission, RecordFields, RecordHandle, RecordStore, Status,
    SubmissionResult, SubmitTransport,
};
use tokio::sync::watch;

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

pub enum Reply {
    Envelope(SubmissionResult),
    Error(String),
    Panic,
    Hang,
}

/// Transport returning a canned reply and recording what it was sent, along
/// with the collector status observed during the call.
pub struct ScriptedTransport {
    reply: Reply,
    pub sent: Arc<Mutex<Vec<ContactSubmission>>>,
    pub observed: Arc<Mutex<Vec<Status>>>,
    status: Mutex<Option<watch::Receiver<Status>>>,
}

impl ScriptedTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            sent: Arc::default(),
            observed: Arc::default(),
            status: Mutex::new(None),
        }
    }

    pub fn watch(&self, status: watch::Receiver<Status>) {
        *self.status.lock().unwrap() = Some(status);
    }
}

#[async_trait::async_trait]
impl SubmitTransport for ScriptedTransport {
    async fn send(&self, submission: &ContactSubmission) -> dit_shared::Result<SubmissionResult> {
        self.sent.lock().unwrap().push(submission.clone());

        if let Some(status) = self.status.lock().unwrap().as_ref() {
            self.observed.lock().unwrap().push(*status.borrow());
        }

        match &self.reply {
            Reply::Envelope(result) => Ok(result.clone()),
            Reply::Error(message) => Err(dit_shared::Error::Transport(message.to_owned())),
            Reply::Panic => panic!("transport blew up"),
            Reply::Hang => futures::future::pending().await,
        }
    }
}

pub fn complete_draft() -> ContactDraft {
    ContactDraft {
        name: "홍길동".to_owned(),
        email_local_part: "hong".to_owned(),
        email_domain: "naver.com".to_owned(),
        phone_part1: "010".to_owned(),
        phone_part2: "1234".to_owned(),
        phone_part3: "5678".to_owned(),
        message: "점검 요청".to_owned(),
    }
}
