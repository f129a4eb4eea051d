//! GUI propagation observer
//!
//! Stands in for a list widget that must be redrawn whenever the underlying
//! list changes. No toolkit is involved; the observer tracks how many
//! refreshes were requested and refuses further work once its view is closed.

use super::Observer;
use crate::error::ReactionError;
use std::cell::{Cell, RefCell};
use tracing::{debug, info};

/// Observer that requests a refresh of an external list view
#[derive(Debug)]
pub struct GuiRefreshObserver {
    title: String,
    refreshes: Cell<usize>,
    last_message: RefCell<Option<String>>,
    closed: Cell<bool>,
}

impl GuiRefreshObserver {
    /// Create an observer for an open view
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            refreshes: Cell::new(0),
            last_message: RefCell::new(None),
            closed: Cell::new(false),
        }
    }

    /// Number of refreshes requested so far
    pub fn refresh_count(&self) -> usize {
        self.refreshes.get()
    }

    /// The message that triggered the most recent refresh
    pub fn last_message(&self) -> Option<String> {
        self.last_message.borrow().clone()
    }

    /// Close the view; later reactions fail
    pub fn close(&self) {
        debug!(observer = %self.title, "GUI view closed");
        self.closed.set(true);
    }

    /// Whether the view has been closed
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

impl Observer for GuiRefreshObserver {
    fn title(&self) -> &str {
        &self.title
    }

    fn react(&self, message: &str) -> Result<(), ReactionError> {
        if self.closed.get() {
            return Err(ReactionError::new(&self.title, "GUI view is closed"));
        }

        self.refreshes.set(self.refreshes.get() + 1);
        *self.last_message.borrow_mut() = Some(message.to_string());

        info!(
            observer = %self.title,
            refreshes = self.refreshes.get(),
            "My list updated. now update list in GUI {}",
            message
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_view_has_no_refreshes() {
        let gui = GuiRefreshObserver::new("Observer2");
        assert_eq!(gui.refresh_count(), 0);
        assert_eq!(gui.last_message(), None);
        assert!(!gui.is_closed());
    }

    #[test]
    fn test_react_counts_refreshes() {
        let gui = GuiRefreshObserver::new("Observer2");
        gui.react("1 added to list").unwrap();
        gui.react("2 added to list").unwrap();

        assert_eq!(gui.refresh_count(), 2);
        assert_eq!(gui.last_message().as_deref(), Some("2 added to list"));
    }

    #[test]
    fn test_closed_view_rejects_reaction() {
        let gui = GuiRefreshObserver::new("Observer2");
        gui.close();

        let err = gui.react("1 added to list").unwrap_err();
        assert_eq!(err.observer, "Observer2");
        assert_eq!(gui.refresh_count(), 0);
    }
}
