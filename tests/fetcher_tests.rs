//! Tests for the download engine: retry behavior, size verification, batch
//! aggregation, and the concurrency cap.

mod common;
use common::helpers::*;

use bulkfetch::fetcher::FetcherBuilder;
use bulkfetch::request::Status;
use std::time::Duration;

#[tokio::test]
async fn test_single_download_succeeds_first_try() {
    let server = TestServer::start(vec![CannedResponse::ok(body_of(262_144))]).await;
    let temp_dir = create_temp_dir();
    let dest = temp_dir.path().join("track.mp3");
    let request = create_test_request(&server.url("/track"), &dest, 0.25);

    let fetcher = create_test_fetcher(3);
    let outcomes = fetcher.fetch_batch(&[request]).await.unwrap();

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].succeeded());
    assert_eq!(outcomes[0].attempts(), 1);
    assert_eq!(outcomes[0].bytes(), 262_144);
    assert_eq!(server.hits(), 1);
    assert_file_size(&dest, 262_144);
}

#[tokio::test]
async fn test_download_without_content_length() {
    // No Content-Length header; the body runs until the connection closes.
    let server = TestServer::start(vec![CannedResponse::ok_unsized(body_of(131_072))]).await;
    let temp_dir = create_temp_dir();
    let dest = temp_dir.path().join("unsized.mp3");
    let request = create_test_request(&server.url("/unsized"), &dest, 0.125);

    let fetcher = create_test_fetcher(3);
    let outcomes = fetcher.fetch_batch(&[request]).await.unwrap();

    assert!(outcomes[0].succeeded());
    assert_eq!(outcomes[0].bytes(), 131_072);
    assert_file_size(&dest, 131_072);
}

#[tokio::test]
async fn test_transfer_retries_until_success() {
    // Two failures, then a good payload: three GETs, success on the third.
    let server = TestServer::start(vec![
        CannedResponse::error(500),
        CannedResponse::error(503),
        CannedResponse::ok(body_of(1024)),
    ])
    .await;
    let temp_dir = create_temp_dir();
    let dest = temp_dir.path().join("retry.mp3");
    let request = create_test_request(&server.url("/retry"), &dest, 0.0);

    let fetcher = create_test_fetcher(3);
    let outcomes = fetcher.fetch_batch(&[request]).await.unwrap();

    assert!(outcomes[0].succeeded());
    assert_eq!(outcomes[0].attempts(), 3);
    assert_eq!(server.hits(), 3);
    assert_file_size(&dest, 1024);
}

#[tokio::test]
async fn test_transfer_exhausts_retries() {
    let server = TestServer::start(vec![CannedResponse::error(500)]).await;
    let temp_dir = create_temp_dir();
    let dest = temp_dir.path().join("gone.mp3");
    let request = create_test_request(&server.url("/gone"), &dest, 0.0);

    let fetcher = create_test_fetcher(4);
    let outcomes = fetcher.fetch_batch(&[request]).await.unwrap();

    assert!(!outcomes[0].succeeded());
    assert_eq!(outcomes[0].attempts(), 4);
    assert_eq!(server.hits(), 4);
    match outcomes[0].status() {
        Status::Fail(_) => {}
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_size_mismatch_fails_after_retries() {
    // The server keeps returning 1 KiB against an expected 1.0 MB.
    let server = TestServer::start(vec![CannedResponse::ok(body_of(1024))]).await;
    let temp_dir = create_temp_dir();
    let dest = temp_dir.path().join("short.mp3");
    let request = create_test_request(&server.url("/short"), &dest, 1.0);

    let fetcher = create_test_fetcher(3);
    let outcomes = fetcher.fetch_batch(&[request]).await.unwrap();

    assert!(!outcomes[0].succeeded());
    assert_eq!(outcomes[0].attempts(), 3);
    assert_eq!(server.hits(), 3);
    // The last attempt still left its truncated payload on disk.
    assert_file_size(&dest, 1024);
}

#[tokio::test]
async fn test_batch_counts_mixed_outcomes() {
    let good = TestServer::start(vec![CannedResponse::ok(body_of(512))]).await;
    let bad = TestServer::start(vec![CannedResponse::error(404)]).await;
    let temp_dir = create_temp_dir();

    let mut requests = Vec::new();
    for i in 0..3 {
        requests.push(create_test_request(
            &good.url(&format!("/f{i}")),
            &temp_dir.path().join(format!("f{i}.mp3")),
            0.0,
        ));
    }
    requests.push(create_test_request(
        &bad.url("/missing"),
        &temp_dir.path().join("missing.mp3"),
        0.0,
    ));

    let fetcher = create_test_fetcher(2);
    let outcomes = fetcher.fetch_batch(&requests).await.unwrap();

    assert_eq!(outcomes.len(), 4);
    let successful = outcomes.iter().filter(|o| o.succeeded()).count();
    assert_eq!(successful, 3);
}

#[tokio::test]
async fn test_concurrency_cap_respected() {
    let server = TestServer::start_with_delay(
        vec![CannedResponse::ok(body_of(64))],
        Duration::from_millis(50),
    )
    .await;
    let temp_dir = create_temp_dir();
    let requests: Vec<_> = (0..6)
        .map(|i| {
            create_test_request(
                &server.url(&format!("/f{i}")),
                &temp_dir.path().join(format!("f{i}.mp3")),
                0.0,
            )
        })
        .collect();

    let fetcher = FetcherBuilder::hidden()
        .max_retries(1)
        .max_concurrent(2)
        .build();
    let outcomes = fetcher.fetch_batch(&requests).await.unwrap();

    assert_eq!(outcomes.iter().filter(|o| o.succeeded()).count(), 6);
    assert_eq!(server.hits(), 6);
    assert!(
        server.peak_concurrency() <= 2,
        "peak concurrency {} exceeds the cap",
        server.peak_concurrency()
    );
}

#[tokio::test]
async fn test_empty_batch_yields_no_outcomes() {
    let fetcher = create_test_fetcher(1);
    let outcomes = fetcher.fetch_batch(&[]).await.unwrap();
    assert!(outcomes.is_empty());
}
