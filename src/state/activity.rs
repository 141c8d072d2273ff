#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

/// What the widget is waiting on, if anything.
///
/// Questions and uploads share this single busy state so the two can never
/// interleave: an upload that swaps the active document cannot land while a
/// question about the previous one is still outstanding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Activity {
    #[default]
    Idle,
    /// A question is in flight.
    Submitting,
    /// An upload of `file_name` is in flight.
    Uploading { file_name: String },
}

impl Activity {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Name of the file being uploaded, when an upload is in flight.
    #[must_use]
    pub fn uploading(&self) -> Option<&str> {
        match self {
            Self::Uploading { file_name } => Some(file_name),
            _ => None,
        }
    }
}
