//! HTTP client for the chat backend.
//!
//! DESIGN
//! ======
//! `Backend` is the seam the widget talks through; `HttpBackend` is the
//! `reqwest` implementation and tests swap in mocks. Each call makes exactly
//! one attempt. Body parsing lives in the pure `parse_*` helpers in `types`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to `ApiError::Request`, non-2xx statuses to
//! `ApiError::Response` with the body kept for logging.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::types::{
    ASK_PATH, ASK_QUESTION_PATH, ApiError, AskBody, AskQuestionBody, QuestionRequest, UPLOAD_FIELD, UPLOAD_PDF_PATH,
    parse_answer_response, parse_ask_response, parse_upload_response,
};
use crate::config::WidgetConfig;
use crate::state::upload::{DocumentSummaries, PendingFile};

const PDF_MIME: &str = "application/pdf";

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// The three backend calls the widget makes. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// `POST /ask` with `{question}`; returns the `response` text.
    async fn ask(&self, question: &str) -> Result<String, ApiError>;

    /// `POST /ask_question` with `{file_name, question}`; returns the `answer` text.
    async fn ask_question(&self, file_name: &str, question: &str) -> Result<String, ApiError>;

    /// `POST /upload_pdf` as multipart field `files`; returns per-file summaries.
    async fn upload_pdf(&self, file: &PendingFile) -> Result<DocumentSummaries, ApiError>;
}

/// Route a bound question to the matching backend call.
///
/// # Errors
///
/// Propagates whatever the backend call returns.
pub async fn send_question(backend: &dyn Backend, request: &QuestionRequest) -> Result<String, ApiError> {
    match request {
        QuestionRequest::Mentor { question } => backend.ask(question).await,
        QuestionRequest::Document { file_name, question } => backend.ask_question(file_name, question).await,
    }
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

pub struct HttpBackend {
    http: reqwest::Client,
    config: WidgetConfig,
}

impl HttpBackend {
    /// Build a client for `config.base_url` with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the TLS backend fails to
    /// initialize.
    pub fn new(config: WidgetConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn read_success(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Response { status: status.as_u16(), body: text });
        }
        Ok(text)
    }

    async fn post_json<B: serde::Serialize + Sync>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::read_success(response).await
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn ask(&self, question: &str) -> Result<String, ApiError> {
        let text = self.post_json(ASK_PATH, &AskBody { question }).await?;
        parse_ask_response(&text)
    }

    async fn ask_question(&self, file_name: &str, question: &str) -> Result<String, ApiError> {
        let text = self
            .post_json(ASK_QUESTION_PATH, &AskQuestionBody { file_name, question })
            .await?;
        parse_answer_response(&text)
    }

    async fn upload_pdf(&self, file: &PendingFile) -> Result<DocumentSummaries, ApiError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(PDF_MIME)
            .map_err(|e| ApiError::InvalidFile(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .http
            .post(self.config.endpoint(UPLOAD_PDF_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let text = Self::read_success(response).await?;
        parse_upload_response(&text)
    }
}
