use super::*;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

// =========================================================================
// Mock server
// =========================================================================

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn echo_ask(Json(body): Json<Value>) -> Json<Value> {
    let question = body["question"].as_str().unwrap_or_default();
    Json(json!({ "response": format!("echo: {question}\nbye") }))
}

async fn echo_ask_question(Json(body): Json<Value>) -> Json<Value> {
    let file_name = body["file_name"].as_str().unwrap_or_default();
    let question = body["question"].as_str().unwrap_or_default();
    Json(json!({ "answer": format!("{file_name} says {question}") }))
}

async fn describe_upload(mut multipart: Multipart) -> Json<Value> {
    let mut out = serde_json::Map::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let field_name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().unwrap_or_default().to_owned();
        let content_type = field.content_type().unwrap_or_default().to_owned();
        let len = field.bytes().await.unwrap().len();
        out.insert(file_name, json!({ "field": field_name, "content_type": content_type, "len": len }));
    }
    Json(Value::Object(out))
}

async fn mock_backend() -> HttpBackend {
    let app = Router::new()
        .route("/ask", post(echo_ask))
        .route("/ask_question", post(echo_ask_question))
        .route("/upload_pdf", post(describe_upload));
    let base = serve(app).await;
    HttpBackend::new(WidgetConfig::new(&base).unwrap()).unwrap()
}

async fn failing_backend() -> HttpBackend {
    let fail = || async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") };
    let app = Router::new()
        .route("/ask", post(fail))
        .route("/ask_question", post(fail))
        .route("/upload_pdf", post(fail));
    let base = serve(app).await;
    HttpBackend::new(WidgetConfig::new(&base).unwrap()).unwrap()
}

// =========================================================================
// Success paths
// =========================================================================

#[tokio::test]
async fn ask_posts_question_and_reads_response() {
    let backend = mock_backend().await;
    let text = backend.ask("Hello").await.unwrap();
    assert_eq!(text, "echo: Hello\nbye");
}

#[tokio::test]
async fn ask_question_posts_file_name_and_question() {
    let backend = mock_backend().await;
    let text = backend.ask_question("notes.pdf", "what?").await.unwrap();
    assert_eq!(text, "notes.pdf says what?");
}

#[tokio::test]
async fn upload_pdf_sends_multipart_files_field() {
    let backend = mock_backend().await;
    let file = PendingFile::new("notes.pdf", vec![7u8; 32]);
    let summaries = backend.upload_pdf(&file).await.unwrap();
    assert_eq!(
        summaries["notes.pdf"],
        json!({ "field": "files", "content_type": "application/pdf", "len": 32 })
    );
}

#[tokio::test]
async fn send_question_routes_by_request_kind() {
    let backend = mock_backend().await;
    let mentor = QuestionRequest::Mentor { question: "q".into() };
    let doc = QuestionRequest::Document { file_name: "a.pdf".into(), question: "q".into() };
    assert_eq!(send_question(&backend, &mentor).await.unwrap(), "echo: q\nbye");
    assert_eq!(send_question(&backend, &doc).await.unwrap(), "a.pdf says q");
}

// =========================================================================
// Failure paths
// =========================================================================

#[tokio::test]
async fn non_success_status_maps_to_response_error() {
    let backend = failing_backend().await;
    let err = backend.ask("Hello").await.unwrap_err();
    assert!(matches!(err, ApiError::Response { status: 500, ref body } if body == "boom"));

    let err = backend
        .upload_pdf(&PendingFile::new("x.pdf", vec![1]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Response { status: 500, .. }));
}

#[tokio::test]
async fn unreachable_backend_maps_to_request_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(WidgetConfig::new(&format!("http://{addr}")).unwrap()).unwrap();
    let err = backend.ask_question("a.pdf", "q").await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}

#[test]
fn base_url_comes_from_config() {
    let backend = HttpBackend::new(WidgetConfig::default()).unwrap();
    assert_eq!(backend.base_url(), "http://localhost:5000");
}
