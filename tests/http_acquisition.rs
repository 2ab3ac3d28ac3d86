//! Integration tests for record acquisition over HTTP.
//!
//! A one-shot loopback server stands in for the endpoint so the tests never
//! leave the machine.

use postgrid::model::{FetchError, Record};
use postgrid::source::{detect_record_source, spawn_acquisition, HttpSource, PendingLoad};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

// ===== Test Helpers =====

const POSTS_JSON: &str = r#"[
  {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit\nsuscipit"},
  {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore"},
  {"userId": 2, "id": 11, "title": "et ea vero", "body": "delectus reiciendis"}
]"#;

/// Serve exactly one HTTP response on a loopback port and return its URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");

    thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else {
            return;
        };
        let mut reader = BufReader::new(stream);

        // Drain the request head
        let mut line = String::new();
        while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
            if line == "\r\n" {
                break;
            }
            line.clear();
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = reader.into_inner();
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    format!("http://{addr}/posts")
}

fn wait_for(pending: &mut PendingLoad) -> Result<Vec<Record>, FetchError> {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        if let Some(result) = pending.poll() {
            return result;
        }
        assert!(Instant::now() < deadline, "acquisition did not finish in time");
        thread::sleep(Duration::from_millis(10));
    }
}

// ===== HttpSource::fetch =====

#[tokio::test]
async fn fetch_decodes_camel_case_records() {
    let url = serve_once("200 OK", POSTS_JSON);

    let records = HttpSource::new(url).fetch().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        Record::new(1, 1, "sunt aut facere", "quia et suscipit\nsuscipit")
    );
    assert_eq!(records[2].user_id, 2);
    assert_eq!(records[2].id, 11);
}

#[tokio::test]
async fn fetch_accepts_empty_collection() {
    let url = serve_once("200 OK", "[]");
    let records = HttpSource::new(url).fetch().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let url = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);

    let err = HttpSource::new(url.clone()).fetch().await.unwrap_err();

    match err {
        FetchError::Status { url: failed, status } => {
            assert_eq!(status, 500);
            assert_eq!(failed, url);
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_status_is_reported() {
    let url = serve_once("404 Not Found", "");
    let err = HttpSource::new(url).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let url = serve_once("200 OK", r#"{"posts": []}"#);

    let err = HttpSource::new(url.clone()).fetch().await.unwrap_err();

    match err {
        FetchError::Decode { origin, .. } => assert_eq!(origin, url),
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn record_missing_field_is_decode_error() {
    let url = serve_once("200 OK", r#"[{"userId": 1, "id": 1, "title": "no body"}]"#);
    let err = HttpSource::new(url).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
}

// ===== Background acquisition =====

#[test]
fn spawned_acquisition_delivers_records() {
    let url = serve_once("200 OK", POSTS_JSON);
    let source = detect_record_source(url, None, Some(Duration::from_secs(5)));

    let mut pending = spawn_acquisition(source);
    let records = wait_for(&mut pending).unwrap();

    assert_eq!(records.len(), 3);
    assert!(pending.is_finished());
    assert!(pending.poll().is_none(), "result is delivered once");
}

#[test]
fn spawned_acquisition_delivers_failure() {
    let url = serve_once("503 Service Unavailable", "");
    let source = detect_record_source(url, None, None);

    let mut pending = spawn_acquisition(source);
    let err = wait_for(&mut pending).unwrap_err();

    assert!(err.to_string().contains("HTTP 503"), "got: {err}");
}
