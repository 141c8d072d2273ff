#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Whether the chat panel is expanded or collapsed to its launcher icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    open: bool,
}

impl Visibility {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }
}
