//! Autoscroll: keep the newest message in view.
//!
//! The rendering side is abstracted behind [`Viewport`]; the observer only
//! tracks the conversation length it last saw and nudges the viewport when
//! that length changes.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scrollable view of the conversation, supplied by the host UI.
pub trait Viewport: Send {
    /// Advance the scroll position to its maximum so `newest` is fully visible.
    fn scroll_to_bottom(&mut self, newest: usize);
}

/// Viewport used when no view is attached. Does nothing.
#[derive(Debug, Default)]
pub struct DetachedViewport;

impl Viewport for DetachedViewport {
    fn scroll_to_bottom(&mut self, _newest: usize) {}
}

pub struct Autoscroll {
    observed_len: usize,
    viewport: Box<dyn Viewport>,
}

impl Default for Autoscroll {
    fn default() -> Self {
        Self::new(Box::new(DetachedViewport))
    }
}

impl std::fmt::Debug for Autoscroll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autoscroll")
            .field("observed_len", &self.observed_len)
            .finish_non_exhaustive()
    }
}

impl Autoscroll {
    #[must_use]
    pub fn new(viewport: Box<dyn Viewport>) -> Self {
        Self { observed_len: 0, viewport }
    }

    /// Swap the attached viewport and bring it up to date.
    pub fn attach(&mut self, viewport: Box<dyn Viewport>) {
        self.viewport = viewport;
        if let Some(newest) = self.observed_len.checked_sub(1) {
            self.viewport.scroll_to_bottom(newest);
        }
    }

    /// React to the conversation now holding `len` messages.
    ///
    /// Returns `true` when the viewport was scrolled.
    pub fn observe(&mut self, len: usize) -> bool {
        if len == self.observed_len {
            return false;
        }
        self.observed_len = len;
        match len.checked_sub(1) {
            Some(newest) => {
                self.viewport.scroll_to_bottom(newest);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn observed_len(&self) -> usize {
        self.observed_len
    }
}
