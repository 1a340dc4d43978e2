//! 401 handling against a local stub server.
//!
//! Two sides of the same invariant: a rejected bearer credential tears down
//! the persisted session and fires the unauthorized hook, while a failed
//! re-login — which carries no bearer — leaves an existing session intact.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use sunusms_sdk::prelude::*;

/// Serve exactly one request with the given status and JSON body, handing
/// back the base URL and the raw request head for header assertions.
async fn serve_once(status: u16, reason: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut raw: Vec<u8> = Vec::new();
        let mut buf = [0u8; 4096];

        let head_end = loop {
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "client closed before sending a full request head");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = find_head_end(&raw) {
                break pos;
            }
        };

        let head = String::from_utf8_lossy(&raw[..head_end]).to_string();
        let body_len = content_length(&head);
        while raw.len() < head_end + 4 + body_len {
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "client closed before sending the request body");
            raw.extend_from_slice(&buf[..n]);
        }

        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        head
    });

    (format!("http://{addr}"), handle)
}

fn find_head_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse().ok())?
        })
        .unwrap_or(0)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn failed_relogin_preserves_existing_session() {
    let (url, server) = serve_once(
        401,
        "Unauthorized",
        r#"{"detail":"Incorrect email or password"}"#,
    )
    .await;

    let fired = Arc::new(AtomicBool::new(false));
    let fired_flag = fired.clone();
    let store = Arc::new(MemoryTokenStore::with_session(PersistedSession::new(
        "existing-valid-token",
    )));
    let client = SunuSmsClient::builder()
        .base_url(&url)
        .token_store(store.clone())
        .on_unauthorized(move || fired_flag.store(true, Ordering::SeqCst))
        .build();

    let resp = client
        .auth()
        .login(&LoginRequest::new("user@test.sn", "wrong-password"))
        .await;

    assert!(!resp.success);
    assert_eq!(
        resp.message.as_deref(),
        Some("Email ou mot de passe incorrect")
    );

    let head = server.await.unwrap();
    assert!(
        !head.to_ascii_lowercase().contains("authorization:"),
        "login must not carry a bearer credential, got:\n{head}"
    );

    assert_eq!(
        store.load().map(|s| s.token).as_deref(),
        Some("existing-valid-token"),
        "existing session was cleared by a failed re-login"
    );
    assert!(!fired.load(Ordering::SeqCst));
    assert!(client.auth().is_authenticated());
}

#[tokio::test]
async fn rejected_bearer_clears_session_and_fires_hook() {
    let (url, server) = serve_once(
        401,
        "Unauthorized",
        r#"{"detail":"Could not validate credentials"}"#,
    )
    .await;

    let fired = Arc::new(AtomicBool::new(false));
    let fired_flag = fired.clone();
    let store = Arc::new(MemoryTokenStore::with_session(PersistedSession::new(
        "stale-token",
    )));
    let client = SunuSmsClient::builder()
        .base_url(&url)
        .token_store(store.clone())
        .on_unauthorized(move || fired_flag.store(true, Ordering::SeqCst))
        .build();

    let resp = client.contacts().list().await;
    assert!(!resp.success);
    assert_eq!(
        resp.message.as_deref(),
        Some("Could not validate credentials")
    );

    let head = server.await.unwrap();
    assert!(
        head.to_ascii_lowercase().contains("authorization: bearer stale-token"),
        "request should have carried the stored bearer, got:\n{head}"
    );

    assert!(store.load().is_none(), "rejected bearer should clear the store");
    assert!(fired.load(Ordering::SeqCst), "unauthorized hook should fire");
}
