//! The chat widget: visibility, conversation, mode, uploads, and dispatch.
//!
//! DESIGN
//! ======
//! All UI state lives in one `ChatWidget` built from small orthogonal parts
//! (`Visibility`, `Mode`, `Activity`, ...). Busy-ness is the single `Activity`
//! enum, so a question and an upload can never be in flight together.
//!
//! Each async action has a two-phase form for host event loops:
//! `begin_*` validates and moves to the busy state, the host runs the
//! request, then `complete_*` commits the result. `submit` and `upload` chain
//! the phases and race the request against the widget's lifecycle token.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error to the caller. Refused actions come back as
//! a `Rejection` with no state change; backend failures become a fixed bot
//! message (questions) or a log line (uploads).

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use tokio_util::sync::CancellationToken;

use crate::config::WidgetConfig;
use crate::net::api::{Backend, send_question};
use crate::net::types::{ApiError, QuestionRequest};
use crate::state::activity::Activity;
use crate::state::conversation::{Conversation, Message};
use crate::state::mode::Mode;
use crate::state::scroll::{Autoscroll, Viewport};
use crate::state::upload::{DocumentSummaries, PendingFile, UploadManager};
use crate::state::visibility::Visibility;

/// Bot message appended when a question fails for any reason.
pub const ERROR_REPLY: &str = "Error: Unable to get a response from the server.";

pub const TITLE: &str = "MentorAI";
pub const PLACEHOLDER: &str = "Ask your question here...";
pub const TYPING_TEXT: &str = "Bot is typing...";
const SUBMIT_LABEL: &str = "Ask";
const SUBMIT_LABEL_BUSY: &str = "Loading...";

// =============================================================================
// OUTCOMES
// =============================================================================

/// Why a user action was refused. Refusals leave state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("input is empty")]
    EmptyInput,
    #[error("no document uploaded for pdf mode")]
    NoActiveDocument,
    #[error("no file selected")]
    NoPendingFile,
    #[error("a request is already in flight")]
    Busy,
    #[error("document mode is disabled")]
    DocumentsDisabled,
    #[error("uploads require pdf mode")]
    NotPdfMode,
    #[error("widget has been torn down")]
    TornDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(Rejection),
    /// The backend answered; the reply was appended.
    Answered,
    /// The request failed; [`ERROR_REPLY`] was appended.
    Failed,
    /// The widget was torn down before the reply arrived; nothing was appended.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Rejected(Rejection),
    Uploaded { file_name: String },
    Failed,
    Cancelled,
}

/// Rendering-neutral snapshot of the control surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub input_enabled: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub upload_enabled: bool,
    pub typing_indicator: bool,
}

// =============================================================================
// WIDGET
// =============================================================================

#[derive(Debug)]
pub struct ChatWidget {
    config: WidgetConfig,
    visibility: Visibility,
    conversation: Conversation,
    mode: Mode,
    uploads: UploadManager,
    activity: Activity,
    scroll: Autoscroll,
    input: String,
    lifecycle: CancellationToken,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl Drop for ChatWidget {
    fn drop(&mut self) {
        self.lifecycle.cancel();
    }
}

impl ChatWidget {
    #[must_use]
    pub fn new(config: WidgetConfig) -> Self {
        let mode = if config.documents_enabled { config.initial_mode } else { Mode::Mentor };
        Self {
            config,
            visibility: Visibility::default(),
            conversation: Conversation::default(),
            mode,
            uploads: UploadManager::default(),
            activity: Activity::Idle,
            scroll: Autoscroll::default(),
            input: String::new(),
            lifecycle: CancellationToken::new(),
        }
    }

    /// Attach the view that should follow new messages.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Box<dyn Viewport>) -> Self {
        self.scroll.attach(viewport);
        self
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    pub fn open(&mut self) {
        tracing::debug!("chat panel opened");
        self.visibility.open();
    }

    pub fn close(&mut self) {
        tracing::debug!("chat panel closed");
        self.visibility.close();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.activity.is_busy()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn pending_file(&self) -> Option<&PendingFile> {
        self.uploads.pending()
    }

    #[must_use]
    pub fn active_document(&self) -> Option<&str> {
        self.uploads.active_document()
    }

    #[must_use]
    pub fn summaries(&self) -> &DocumentSummaries {
        self.uploads.summaries()
    }

    // -------------------------------------------------------------------------
    // Input, mode, file selection
    // -------------------------------------------------------------------------

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Switch the question route. Conversation, uploads, and the active
    /// document are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::DocumentsDisabled`] when asked for pdf mode on a
    /// widget built without document support.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Rejection> {
        if mode == Mode::Pdf && !self.config.documents_enabled {
            return Err(Rejection::DocumentsDisabled);
        }
        if self.activity.is_busy() {
            tracing::debug!(%mode, "mode switched while a request is in flight");
        } else {
            tracing::debug!(%mode, "mode switched");
        }
        self.mode = mode;
        Ok(())
    }

    pub fn select_file(&mut self, file: PendingFile) {
        tracing::debug!(file_name = %file.name, len = file.bytes.len(), "file selected");
        self.uploads.select_file(file);
    }

    // -------------------------------------------------------------------------
    // Controls
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn controls(&self) -> Controls {
        let busy = self.activity.is_busy();
        let submitting = self.activity.is_submitting();
        Controls {
            input_enabled: !busy,
            submit_enabled: self.check_submit().is_ok(),
            submit_label: if submitting { SUBMIT_LABEL_BUSY } else { SUBMIT_LABEL },
            upload_enabled: self.check_upload().is_ok(),
            typing_indicator: submitting,
        }
    }

    fn check_live(&self) -> Result<(), Rejection> {
        if self.lifecycle.is_cancelled() {
            return Err(Rejection::TornDown);
        }
        if self.activity.is_busy() {
            return Err(Rejection::Busy);
        }
        Ok(())
    }

    fn check_submit(&self) -> Result<(), Rejection> {
        self.check_live()?;
        if self.input.trim().is_empty() {
            return Err(Rejection::EmptyInput);
        }
        if self.mode.requires_document() && self.uploads.active_document().is_none() {
            return Err(Rejection::NoActiveDocument);
        }
        Ok(())
    }

    fn check_upload(&self) -> Result<(), Rejection> {
        self.check_live()?;
        if !self.config.documents_enabled {
            return Err(Rejection::DocumentsDisabled);
        }
        if self.mode != Mode::Pdf {
            return Err(Rejection::NotPdfMode);
        }
        if self.uploads.pending().is_none() {
            return Err(Rejection::NoPendingFile);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Question dispatch
    // -------------------------------------------------------------------------

    /// Accept the current input as a question.
    ///
    /// On success the user message is appended, the input cleared, and the
    /// widget enters `Submitting`. The returned request is bound to the mode
    /// and active document as they are now.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] without touching state when the input is
    /// blank, pdf mode has no active document, a request is in flight, or
    /// the widget was torn down.
    pub fn begin_submit(&mut self) -> Result<QuestionRequest, Rejection> {
        self.check_submit()?;

        let question = std::mem::take(&mut self.input);
        let request = match (self.mode, self.uploads.active_document()) {
            (Mode::Pdf, Some(file_name)) => {
                QuestionRequest::Document { file_name: file_name.to_owned(), question: question.clone() }
            }
            _ => QuestionRequest::Mentor { question: question.clone() },
        };

        self.conversation.append_user(&question);
        self.scroll.observe(self.conversation.len());
        self.activity = Activity::Submitting;

        tracing::info!(mode = %request.mode(), len = question.len(), "question dispatched");
        Ok(request)
    }

    /// Commit the result of the request returned by [`Self::begin_submit`].
    pub fn complete_submit(&mut self, result: Result<String, ApiError>) -> SubmitOutcome {
        if !self.activity.is_submitting() {
            tracing::warn!(activity = ?self.activity, "stale question completion ignored");
            return SubmitOutcome::Cancelled;
        }
        self.activity = Activity::Idle;

        let outcome = match result {
            Ok(text) => {
                self.conversation.append_bot(&text);
                SubmitOutcome::Answered
            }
            Err(e) => {
                tracing::warn!(error = %e, "question failed");
                self.conversation.append_bot(ERROR_REPLY);
                SubmitOutcome::Failed
            }
        };
        self.scroll.observe(self.conversation.len());
        outcome
    }

    /// Submit the current input and wait for the reply.
    pub async fn submit(&mut self, backend: &dyn Backend) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };

        let lifecycle = self.lifecycle.clone();
        let result = tokio::select! {
            () = lifecycle.cancelled() => None,
            result = send_question(backend, &request) => Some(result),
        };

        match result {
            Some(result) => self.complete_submit(result),
            None => {
                tracing::debug!("question reply dropped after teardown");
                self.activity = Activity::Idle;
                SubmitOutcome::Cancelled
            }
        }
    }

    // -------------------------------------------------------------------------
    // Upload
    // -------------------------------------------------------------------------

    /// Start uploading the pending file.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] without touching state when no file is
    /// pending, the widget is not in pdf mode, a request is in flight, or
    /// the widget was torn down.
    pub fn begin_upload(&mut self) -> Result<PendingFile, Rejection> {
        self.check_upload()?;
        let file = self.uploads.pending().cloned().ok_or(Rejection::NoPendingFile)?;
        self.activity = Activity::Uploading { file_name: file.name.clone() };
        tracing::info!(file_name = %file.name, len = file.bytes.len(), "upload started");
        Ok(file)
    }

    /// Commit the result of the upload returned by [`Self::begin_upload`].
    pub fn complete_upload(&mut self, file_name: &str, result: Result<DocumentSummaries, ApiError>) -> UploadOutcome {
        if self.activity.uploading() != Some(file_name) {
            tracing::warn!(file_name, activity = ?self.activity, "stale upload completion ignored");
            return UploadOutcome::Cancelled;
        }
        self.activity = Activity::Idle;

        match result {
            Ok(summaries) => {
                tracing::info!(file_name, documents = summaries.len(), "upload complete");
                self.uploads.record_upload(file_name, summaries);
                UploadOutcome::Uploaded { file_name: file_name.to_owned() }
            }
            Err(e) => {
                tracing::warn!(file_name, error = %e, "upload failed");
                UploadOutcome::Failed
            }
        }
    }

    /// Upload the pending file and wait for the ingestion reply.
    pub async fn upload(&mut self, backend: &dyn Backend) -> UploadOutcome {
        let file = match self.begin_upload() {
            Ok(file) => file,
            Err(rejection) => return UploadOutcome::Rejected(rejection),
        };

        let lifecycle = self.lifecycle.clone();
        let result = tokio::select! {
            () = lifecycle.cancelled() => None,
            result = backend.upload_pdf(&file) => Some(result),
        };

        match result {
            Some(result) => self.complete_upload(&file.name, result),
            None => {
                tracing::debug!(file_name = %file.name, "upload reply dropped after teardown");
                self.activity = Activity::Idle;
                UploadOutcome::Cancelled
            }
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Token cancelled when the widget is torn down or dropped.
    #[must_use]
    pub fn lifecycle(&self) -> CancellationToken {
        self.lifecycle.clone()
    }

    /// Cancel any in-flight request and refuse further actions.
    pub fn teardown(&self) {
        self.lifecycle.cancel();
    }
}
