use std::fmt;

use lifo_core::Stack;

/// Back and forward navigation between visited locations, like a web browser.
pub struct History<T> {
    current: Option<T>,
    back: Stack<T>,
    forward: Stack<T>,
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self { current: None, back: Stack::new(), forward: Stack::new() }
    }

    #[inline]
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    #[inline]
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    #[inline]
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Visiting a new location discards the forward history.
    pub fn visit(&mut self, location: T) {
        if let Some(current) = self.current.replace(location) {
            self.back.push(current);
        }
        self.forward.clear();
    }

    /// Returns the new current location, or `None` if there is nowhere to go back to.
    pub fn back(&mut self) -> Option<&T> {
        let prev = self.back.pop().ok()?;
        if let Some(current) = self.current.replace(prev) {
            self.forward.push(current);
        }
        tracing::debug!(back = self.back.size(), forward = self.forward.size(), "history back");
        self.current.as_ref()
    }

    /// Returns the new current location, or `None` if there is nowhere to go forward to.
    pub fn forward(&mut self) -> Option<&T> {
        let next = self.forward.pop().ok()?;
        if let Some(current) = self.current.replace(next) {
            self.back.push(current);
        }
        tracing::debug!(back = self.back.size(), forward = self.forward.size(), "history forward");
        self.current.as_ref()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("back", &self.back)
            .field("current", &self.current)
            .field("forward", &self.forward)
            .finish()
    }
}
