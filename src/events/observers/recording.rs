//! Recording observer
//!
//! Keeps every message it receives, in order. Useful for assertions and for
//! producing a report of what a list broadcast.

use super::Observer;
use crate::error::ReactionError;
use std::cell::RefCell;

/// Observer that records received messages
#[derive(Debug, Default)]
pub struct RecordingObserver {
    title: String,
    messages: RefCell<Vec<String>>,
}

impl RecordingObserver {
    /// Create an empty recorder
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            messages: RefCell::new(Vec::new()),
        }
    }

    /// Messages received so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Number of messages received
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    /// Whether nothing has been received yet
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// Drain the recorded messages
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.borrow_mut())
    }
}

impl Observer for RecordingObserver {
    fn title(&self) -> &str {
        &self.title
    }

    fn react(&self, message: &str) -> Result<(), ReactionError> {
        self.messages.borrow_mut().push(message.to_string());
        Ok(())
    }
}
