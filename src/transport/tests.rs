use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread;

use serde_json::json;

use crate::config::DisplayConfig;
use crate::dispatch::Command;
use crate::model::{PaneId, PaneKind};

use super::{HttpTransport, Transport, TransportError, to_wire_json};

struct CapturedRequest {
    head: String,
    body: String,
}

/// Accepts one connection, records the request and answers with `status_line`.
fn serve_once(status_line: &'static str) -> (u16, thread::JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone"));
        let mut head = String::new();
        let mut content_length = 0;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("read line");
            if line == "\r\n" || line.is_empty() {
                break;
            }
            let lower = line.to_ascii_lowercase();
            if let Some(value) = lower.strip_prefix("content-length:") {
                content_length = value.trim().parse::<usize>().expect("length");
            }
            head.push_str(&line);
        }
        let mut body = vec![0_u8; content_length];
        reader.read_exact(&mut body).expect("body");
        let mut stream = stream;
        write!(
            stream,
            "{status_line}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok"
        )
        .expect("respond");
        CapturedRequest {
            head,
            body: String::from_utf8(body).expect("utf8"),
        }
    });
    (port, handle)
}

fn text_command() -> Command {
    Command::pane(
        PaneKind::Text,
        PaneId::new("w1").expect("id"),
        Some("text".into()),
        json!("foo"),
    )
}

#[test]
fn wire_json_uses_spaced_separators_and_ascii_escapes() {
    let value = json!({"a": [1, 2], "b": "caf\u{e9} \u{1F600}"});
    assert_eq!(
        to_wire_json(&value).expect("json"),
        r#"{"a": [1, 2], "b": "caf\u00e9 \ud83d\ude00"}"#
    );
}

#[test]
fn wire_json_of_command_matches_envelope() {
    assert_eq!(
        to_wire_json(&text_command()).expect("json"),
        r#"{"command": "pane", "type": "text", "id": "w1", "title": "text", "content": "foo"}"#
    );
}

#[test]
fn http_transport_posts_command() {
    let (port, handle) = serve_once("HTTP/1.1 200 OK");
    let transport = HttpTransport::new(&DisplayConfig::new("127.0.0.1", port));
    assert_eq!(transport.url(), format!("http://127.0.0.1:{port}/events"));

    let acknowledged = transport.send(&text_command()).expect("send");
    assert!(acknowledged);

    let request = handle.join().expect("server thread");
    assert!(request.head.starts_with("POST /events HTTP/1.1\r\n"));
    assert!(
        request
            .head
            .to_ascii_lowercase()
            .contains("content-type: application/text")
    );
    assert_eq!(request.body, to_wire_json(&text_command()).expect("json"));
}

#[test]
fn http_transport_reports_error_status() {
    let (port, handle) = serve_once("HTTP/1.1 500 Internal Server Error");
    let transport = HttpTransport::new(&DisplayConfig::new("127.0.0.1", port));
    let err = transport.send(&text_command()).expect_err("status");
    assert!(matches!(err, TransportError::Status { code: 500, .. }));
    handle.join().expect("server thread");
}

#[test]
fn http_transport_reports_unreachable_server() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let transport = HttpTransport::new(&DisplayConfig::new("127.0.0.1", port));
    let err = transport.send(&text_command()).expect_err("refused");
    assert!(matches!(err, TransportError::Request { .. }));
    assert!(err.to_string().contains(&port.to_string()));
}
