use std::time::Duration;

use dit::cli::contact::{ContactArgs, TIMEOUT_MARGIN_SECS, submit};
use dit_contact::{FALLBACK_MESSAGE, PropertyValue, REQUIRED_FIELDS_MESSAGE, schema};
use helpers::FakeStore;

mod helpers;

fn args(url: &str) -> ContactArgs {
    ContactArgs {
        url: Some(url.to_owned()),
        name: "홍길동".to_owned(),
        email: "hong".to_owned(),
        domain: "naver.com".to_owned(),
        phone1: "010".to_owned(),
        phone2: "1234".to_owned(),
        phone3: "5678".to_owned(),
        message: "점검 요청".to_owned(),
        timeout_secs: Some(5),
    }
}

#[tokio::test]
async fn test_unreachable_site_is_an_error() -> anyhow::Result<()> {
    let err = submit(helpers::config(), args("http://127.0.0.1:1"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), FALLBACK_MESSAGE);

    Ok(())
}

#[tokio::test]
async fn test_missing_required_field_is_an_error() -> anyhow::Result<()> {
    let store = FakeStore::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = dit::router(helpers::state(store.clone()));
    tokio::spawn(async move { axum::serve(listener, app).await });

    let err = submit(
        helpers::config(),
        ContactArgs {
            name: String::new(),
            ..args(&format!("http://{addr}"))
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
    assert!(store.records().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_accepted_submission() -> anyhow::Result<()> {
    let store = FakeStore::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = dit::router(helpers::state(store.clone()));
    tokio::spawn(async move { axum::serve(listener, app).await });

    submit(helpers::config(), args(&format!("http://{addr}"))).await?;

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].get(schema::EMAIL).map(PropertyValue::as_str),
        Some("hong@naver.com")
    );
    assert_eq!(
        records[0].get(schema::PHONE).map(PropertyValue::as_str),
        Some("010-1234-5678")
    );

    Ok(())
}

#[test]
fn test_client_timeout_outlasts_the_store_timeout() {
    let config = helpers::config();
    let default = ContactArgs {
        timeout_secs: None,
        ..args("http://127.0.0.1:3000")
    };

    assert_eq!(
        default.timeout(&config),
        Duration::from_secs(config.notion.timeout_secs + TIMEOUT_MARGIN_SECS)
    );
    assert!(default.timeout(&config) > Duration::from_secs(config.notion.timeout_secs));
    assert_eq!(
        args("http://127.0.0.1:3000").timeout(&config),
        Duration::from_secs(5)
    );
}
