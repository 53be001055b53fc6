//! Integration tests for the HTTP client against a local stub backend.
//!
//! The stub accepts one connection per canned response, records the request
//! line and body, answers with `Connection: close`, and moves on.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use trivia_browser::sources::TriviaClient;
use trivia_browser::state::{ApiCall, ApiPayload};

/// A request as seen by the stub: `"METHOD /path?query"` plus the raw body.
#[derive(Debug)]
struct Seen {
    line: String,
    body: String,
}

/// What: Read one HTTP/1.1 request (headers plus `Content-Length` body).
async fn read_request(sock: &mut tokio::net::TcpStream) -> Seen {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    let header_end = loop {
        let n = sock.read(&mut chunk).await.expect("read");
        assert!(n > 0, "client closed before sending headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|l| {
            let (k, v) = l.split_once(':')?;
            k.trim()
                .eq_ignore_ascii_case("content-length")
                .then(|| v.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        let n = sock.read(&mut chunk).await.expect("read body");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let line = head
        .lines()
        .next()
        .unwrap_or_default()
        .rsplit_once(' ')
        .map(|(l, _)| l.to_string())
        .unwrap_or_default();
    Seen {
        line,
        body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
    }
}

/// What: Start a stub server that replies with `responses` in order.
///
/// Output:
/// - Base URL of the server and a receiver yielding each request it saw.
async fn stub(responses: Vec<(u16, &'static str)>) -> (String, mpsc::UnboundedReceiver<Seen>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        for (status, body) in responses {
            let (mut sock, _) = listener.accept().await.expect("accept");
            let seen = read_request(&mut sock).await;
            let _ = tx.send(seen);
            let reason = if status < 400 { "OK" } else { "ERROR" };
            let reply = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(reply.as_bytes()).await.expect("write");
            let _ = sock.shutdown().await;
        }
    });
    (format!("http://{addr}"), rx)
}

const LIST_PAGE_2: &str = r#"{
  "success": true,
  "questions": [
    {"id": 11, "question": "What is the largest lake in Africa?", "answer": "Lake Victoria", "category": 3, "difficulty": 2},
    {"id": 12, "question": "In which royal palace would you find the Hall of Mirrors?", "answer": "The Palace of Versailles", "category": 3, "difficulty": 3}
  ],
  "total_questions": 12,
  "categories": [{"id": 1, "type": "Science"}, {"id": 3, "type": "Geography"}],
  "current_category": null
}"#;

#[tokio::test]
/// What: Listing decodes questions and categories and sends the page in the query.
async fn list_questions_decodes_page() {
    let (base, mut seen) = stub(vec![(200, LIST_PAGE_2)]).await;
    let client = TriviaClient::new(&base, Duration::from_secs(5)).expect("client");

    let page = client.list_questions(2).await.expect("list");
    assert_eq!(page.total_questions, 12);
    assert_eq!(page.questions.len(), 2);
    assert_eq!(page.questions[0].answer, "Lake Victoria");
    assert_eq!(
        page.categories.expect("categories")[1].kind,
        "Geography"
    );
    assert_eq!(seen.recv().await.expect("request").line, "GET /questions?page=2");
}

#[tokio::test]
/// What: Search posts the term as JSON and decodes the results.
///
/// Inputs:
/// - `search("title", 1)` against a stub returning one match.
///
/// Output:
/// - `POST /questions?page=1` with body `{"search_term":"title"}`.
async fn search_posts_term() {
    let (base, mut seen) = stub(vec![(
        200,
        r#"{"questions": [{"id": 2, "question": "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "answer": "Apollo 13", "category": 5, "difficulty": 4}], "total_questions": 1, "current_category": null}"#,
    )])
    .await;
    let client = TriviaClient::new(&base, Duration::from_secs(5)).expect("client");

    let page = client.search("title", 1).await.expect("search");
    assert_eq!(page.total_questions, 1);
    assert!(page.categories.is_none());

    let req = seen.recv().await.expect("request");
    assert_eq!(req.line, "POST /questions?page=1");
    let body: serde_json::Value = serde_json::from_str(&req.body).expect("json body");
    assert_eq!(body, serde_json::json!({ "search_term": "title" }));
}

#[tokio::test]
/// What: Category listing and delete hit their routes; delete ignores the body.
async fn category_and_delete_routes() {
    let (base, mut seen) = stub(vec![
        (
            200,
            r#"{"questions": [], "total_questions": 0, "current_category": 4}"#,
        ),
        (200, r#"{"success": true, "deleted": 9}"#),
    ])
    .await;
    let client = TriviaClient::new(&base, Duration::from_secs(5)).expect("client");

    let page = client
        .execute(&ApiCall::CategoryQuestions {
            category: 4,
            page: 1,
        })
        .await
        .expect("category");
    assert!(matches!(page, ApiPayload::Page(p) if p.current_category == Some(4)));
    assert_eq!(
        seen.recv().await.expect("request").line,
        "GET /categories/4/questions?page=1"
    );

    let deleted = client.execute(&ApiCall::Delete { id: 9 }).await.expect("delete");
    assert_eq!(deleted, ApiPayload::Deleted(9));
    assert_eq!(seen.recv().await.expect("request").line, "DELETE /questions/9");
}

#[tokio::test]
/// What: Non-2xx statuses and undecodable bodies surface as errors.
///
/// Inputs:
/// - A 404 for an empty page, a 422 for a delete, and a 200 with a non-JSON body.
///
/// Output:
/// - All three calls return `Err`.
async fn failures_become_errors() {
    let (base, _seen) = stub(vec![
        (404, r#"{"success": false, "error": 404, "message": "resource not found"}"#),
        (422, r#"{"success": false, "error": 422, "message": "unprocessable"}"#),
        (200, "<html>oops</html>"),
    ])
    .await;
    let client = TriviaClient::new(&base, Duration::from_secs(5)).expect("client");

    assert!(client.list_questions(99).await.is_err());
    assert!(client.delete(1000).await.is_err());
    assert!(client.categories().await.is_err());
}

#[tokio::test]
/// What: Categories decode from `GET /categories`.
async fn categories_decode() {
    let (base, mut seen) = stub(vec![(
        200,
        r#"{"success": true, "categories": [{"id": 1, "type": "Science"}, {"id": 2, "type": "Art"}], "total_categories": 2}"#,
    )])
    .await;
    let client = TriviaClient::new(&base, Duration::from_secs(5)).expect("client");

    let cats = client.categories().await.expect("categories");
    assert_eq!(cats.len(), 2);
    assert_eq!(cats[1].kind, "Art");
    assert_eq!(seen.recv().await.expect("request").line, "GET /categories");
}
