//! # mentor-widget
//!
//! Rendering-agnostic core of the MentorAI chat widget.
//!
//! The crate owns the widget's state (open/closed, conversation log, mode,
//! pending upload, busy state) and drives the three backend calls: general
//! chat (`/ask`), document upload (`/upload_pdf`), and document QA
//! (`/ask_question`). A host UI renders from [`ChatWidget`] and feeds user
//! events back into it.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use mentor_widget::{ChatWidget, HttpBackend, WidgetConfig};
//!
//! let config = WidgetConfig::new("http://localhost:5000")?;
//! let backend = HttpBackend::new(config.clone())?;
//! let mut widget = ChatWidget::new(config);
//! widget.open();
//! widget.set_input("Hello");
//! widget.submit(&backend).await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod net;
pub mod render;
pub mod state;
pub mod widget;

pub use config::{ConfigError, HttpTimeouts, WidgetConfig};
pub use net::api::{Backend, HttpBackend};
pub use net::types::{ApiError, QuestionRequest};
pub use state::conversation::{Message, Sender};
pub use state::mode::Mode;
pub use state::upload::{DocumentSummaries, PendingFile};
pub use widget::{ChatWidget, Controls, ERROR_REPLY, Rejection, SubmitOutcome, UploadOutcome};
