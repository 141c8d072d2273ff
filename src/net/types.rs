//! Wire DTOs and errors for the chat backend.
//!
//! DESIGN
//! ======
//! Request bodies borrow from the caller so serialization never clones the
//! question text. Response bodies only declare the one field the widget
//! reads; anything else the backend sends is ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::mode::Mode;

pub const ASK_PATH: &str = "/ask";
pub const ASK_QUESTION_PATH: &str = "/ask_question";
pub const UPLOAD_PDF_PATH: &str = "/upload_pdf";

/// Multipart field name the ingestion endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "files";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success HTTP status.
    #[error("response error: status {status}")]
    Response { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The file could not be packed into a multipart part.
    #[error("invalid upload file: {0}")]
    InvalidFile(String),
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct AskBody<'a> {
    pub question: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AskQuestionBody<'a> {
    pub file_name: &'a str,
    pub question: &'a str,
}

/// A question bound to its route at dispatch time.
///
/// Built by the widget when a submission is accepted; a later mode switch
/// or upload does not change where an in-flight question goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionRequest {
    /// General chat via `POST /ask`.
    Mentor { question: String },
    /// Document QA via `POST /ask_question`.
    Document { file_name: String, question: String },
}

impl QuestionRequest {
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Mentor { .. } => ASK_PATH,
            Self::Document { .. } => ASK_QUESTION_PATH,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Mentor { .. } => Mode::Mentor,
            Self::Document { .. } => Mode::Pdf,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        match self {
            Self::Mentor { question } | Self::Document { question, .. } => question,
        }
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

#[derive(Debug, Deserialize)]
struct AskReply {
    response: String,
}

#[derive(Debug, Deserialize)]
struct AnswerReply {
    answer: String,
}

/// Parse the `POST /ask` body, `{ "response": string }`.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] if the body is not JSON or lacks `response`.
pub fn parse_ask_response(json: &str) -> Result<String, ApiError> {
    let reply: AskReply = serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(reply.response)
}

/// Parse the `POST /ask_question` body, `{ "answer": string }`.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] if the body is not JSON or lacks `answer`.
pub fn parse_answer_response(json: &str) -> Result<String, ApiError> {
    let reply: AnswerReply = serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(reply.answer)
}

/// Parse the `POST /upload_pdf` body: an object mapping file name to summary.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] if the body is not a JSON object.
pub fn parse_upload_response(json: &str) -> Result<crate::state::upload::DocumentSummaries, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))
}
