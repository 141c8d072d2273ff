#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which backend path questions are routed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Document-grounded question answering against the active upload.
    Pdf,
    /// Open-domain chat; no document needed.
    #[default]
    Mentor,
}

impl Mode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Mentor => "mentor",
        }
    }

    #[must_use]
    pub fn requires_document(self) -> bool {
        matches!(self, Self::Pdf)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}' (expected 'pdf' or 'mentor')")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pdf" => Ok(Self::Pdf),
            "mentor" => Ok(Self::Mentor),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}
