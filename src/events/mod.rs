//! Change notification for observable lists
//!
//! A mutation on an [`ObservableList`](crate::ObservableList) is described by a
//! [`ChangeEvent`], rendered into a message and broadcast by the list's
//! embedded [`Subject`] to every attached [`Observer`]:
//!
//! ```text
//! ObservableList::append ─► mutate ─► Subject::notify(message)
//!                                         ├─► observer1.react(message)
//!                                         ├─► observer2.react(message)
//!                                         └─► ...
//! ```
//!
//! Delivery is synchronous and in attachment order. By the time a mutating
//! call returns, every observer has already reacted.

pub mod observers;
pub mod subject;

use serde::Serialize;

/// A mutation applied to an observable list
///
/// Values and keys are stored already rendered, so events can be logged,
/// serialized and compared without constraining the list's element type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ChangeEvent {
    /// An item was pushed onto the end of the list
    Appended {
        /// Rendered value of the new item
        value: String,
    },

    /// An index or slice of the list was replaced
    Assigned {
        /// Rendered index or slice descriptor, e.g. `2` or `5:`
        key: String,
        /// Rendered replacement
        value: String,
    },
}

impl ChangeEvent {
    /// Create an Appended event
    pub fn appended(value: impl std::fmt::Display) -> Self {
        Self::Appended {
            value: value.to_string(),
        }
    }

    /// Create an Assigned event
    pub fn assigned(key: impl std::fmt::Display, value: impl std::fmt::Display) -> Self {
        Self::Assigned {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Appended { .. } => "Appended",
            Self::Assigned { .. } => "Assigned",
        }
    }

    /// The notification message delivered to observers
    pub fn message(&self) -> String {
        match self {
            Self::Appended { value } => format!("{} added to list", value),
            Self::Assigned { key, value } => format!("item[{}] changed to {}", key, value),
        }
    }
}

impl std::fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

// Re-exports
pub use observers::{GuiRefreshObserver, ListChangeLogger, Observer, RecordingObserver};
pub use subject::{NotifyPolicy, Subject};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================
    // Message Rendering Tests
    // ==========================================

    #[test]
    fn test_appended_message_names_value() {
        assert_eq!(ChangeEvent::appended(23).message(), "23 added to list");
    }

    #[test]
    fn test_assigned_message_names_key_and_value() {
        let event = ChangeEvent::assigned("5:", "[J, o, h, n, !]");
        assert_eq!(event.message(), "item[5:] changed to [J, o, h, n, !]");
    }

    #[test]
    fn test_display_matches_message() {
        let event = ChangeEvent::assigned(0, "x");
        assert_eq!(event.to_string(), event.message());
    }

    #[test]
    fn test_event_type_name() {
        assert_eq!(ChangeEvent::appended("a").event_type(), "Appended");
        assert_eq!(ChangeEvent::assigned(1, "b").event_type(), "Assigned");
    }

    // ==========================================
    // Serialization Tests
    // ==========================================

    #[test]
    fn test_event_serializes_with_type_tag() {
        let json = serde_json::to_string(&ChangeEvent::assigned(2, 9)).unwrap();
        assert!(json.contains(r#""type":"Assigned""#));
        assert!(json.contains(r#""key":"2""#));
        assert!(json.contains(r#""value":"9""#));
    }
}
