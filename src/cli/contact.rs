use std::time::Duration;

use anyhow::Result;
use clap::Args;
use dit_contact::{Field, FormCollector, HttpTransport, Outcome};

/// Added to the server's Notion budget so a slow but successful write is not
/// reported as a failure and resubmitted.
pub const TIMEOUT_MARGIN_SECS: u64 = 5;

/// Arguments of `dit contact`. Empty values are sent through the same
/// required-field check as the landing page form.
#[derive(Args, Debug)]
pub struct ContactArgs {
    /// Base URL of a running site (defaults to the configured server address)
    #[arg(long)]
    pub url: Option<String>,

    #[arg(long, default_value = "")]
    pub name: String,

    /// Local part of the email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Email domain, a preset or any custom domain
    #[arg(long, default_value = "naver.com")]
    pub domain: String,

    #[arg(long, default_value = "")]
    pub phone1: String,

    #[arg(long, default_value = "")]
    pub phone2: String,

    #[arg(long, default_value = "")]
    pub phone3: String,

    #[arg(long, default_value = "")]
    pub message: String,

    /// Request timeout in seconds (defaults to the Notion timeout plus a margin)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl ContactArgs {
    pub fn timeout(&self, config: &crate::config::Config) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .unwrap_or(config.notion.timeout_secs + TIMEOUT_MARGIN_SECS),
        )
    }

    fn into_fields(self) -> [(Field, String); 7] {
        [
            (Field::Name, self.name),
            (Field::EmailLocalPart, self.email),
            (Field::EmailDomain, self.domain),
            (Field::PhonePart1, self.phone1),
            (Field::PhonePart2, self.phone2),
            (Field::PhonePart3, self.phone3),
            (Field::Message, self.message),
        ]
    }
}

/// Sends one contact request to a running site over HTTP.
pub async fn submit(config: crate::config::Config, mut args: ContactArgs) -> Result<()> {
    let base_url = args
        .url
        .take()
        .unwrap_or_else(|| config.server.base_url());

    let transport = HttpTransport::new(&base_url, args.timeout(&config))?;
    tracing::info!(endpoint = transport.endpoint(), "Submitting contact request...");

    let mut collector = FormCollector::new(transport);
    for (field, value) in args.into_fields() {
        collector.update_field(field, value);
    }

    let outcome = collector.submit().await;
    let message = collector
        .feedback()
        .map(|feedback| feedback.message.to_owned())
        .unwrap_or_default();

    match outcome {
        Outcome::Accepted => {
            tracing::info!("{message}");
            Ok(())
        }
        _ => anyhow::bail!("{message}"),
    }
}
