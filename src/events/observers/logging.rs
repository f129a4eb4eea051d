//! Logging observer
//!
//! Reports every change it hears about using the `tracing` crate, naming the
//! list it watches by the observer's title.

use super::Observer;
use crate::error::ReactionError;
use tracing::info;

/// Observer that logs list changes at INFO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListChangeLogger {
    title: String,
}

impl ListChangeLogger {
    /// Create a logger with the given display label
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// The line this observer reports for a message
    pub fn describe(&self, message: &str) -> String {
        format!("from {} list has changed. {}", self.title, message)
    }
}

impl Observer for ListChangeLogger {
    fn title(&self) -> &str {
        &self.title
    }

    fn react(&self, message: &str) -> Result<(), ReactionError> {
        info!(
            observer = %self.title,
            change = %message,
            "{}",
            self.describe(message)
        );
        Ok(())
    }
}
