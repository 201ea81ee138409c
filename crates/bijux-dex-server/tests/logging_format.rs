// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::Request;
use bijux_dex_server::{build_router, AppState, FakeUpstream};
use tower::util::ServiceExt;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn request_logs_are_json_and_carry_request_id() {
    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .json()
        .with_max_level(Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = build_router(AppState::new(Arc::new(FakeUpstream::new())));
    let req = Request::builder()
        .uri("/api/pokemon/notapokemon")
        .header("x-request-id", "req-log-1")
        .body(Body::empty())
        .expect("request");
    let res = app.oneshot(req).await.expect("response");
    assert_eq!(res.status().as_u16(), 404);

    let bytes = sink.0.lock().expect("lock output").clone();
    let text = String::from_utf8(bytes).expect("utf8 log output");
    let lines: Vec<serde_json::Value> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("json log line"))
        .collect();

    let message = |v: &serde_json::Value| {
        v.get("fields")
            .and_then(|f| f.get("message"))
            .and_then(|m| m.as_str())
            .map(ToString::to_string)
    };
    let failed = lines
        .iter()
        .find(|v| message(v).as_deref() == Some("upstream fetch failed"))
        .expect("upstream failure logged");
    assert_eq!(failed.get("level").and_then(|v| v.as_str()), Some("WARN"));
    assert_eq!(
        failed["span"].get("request_id").and_then(|v| v.as_str()),
        Some("req-log-1")
    );

    let complete = lines
        .iter()
        .find(|v| message(v).as_deref() == Some("request complete"))
        .expect("completion logged");
    assert_eq!(
        complete["fields"].get("status").and_then(serde_json::Value::as_u64),
        Some(404)
    );
}
