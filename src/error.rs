//! Error types for subjects, observers and observable lists
//!
//! Every failure is reported synchronously to the caller of the triggering
//! operation. Nothing is retried and nothing is swallowed.

/// An observer could not handle a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionError {
    /// Title of the observer that failed
    pub observer: String,
    /// What went wrong
    pub reason: String,
}

impl ReactionError {
    /// Create a reaction error for the named observer
    pub fn new(observer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            observer: observer.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ReactionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "observer '{}' failed to react: {}", self.observer, self.reason)
    }
}

impl std::error::Error for ReactionError {}

/// Error type for observer registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectError {
    /// The observer is not currently attached
    NotAttached {
        /// Title of the observer that was looked up
        title: String,
    },
}

impl std::fmt::Display for SubjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubjectError::NotAttached { title } => {
                write!(f, "observer '{}' is not attached", title)
            }
        }
    }
}

impl std::error::Error for SubjectError {}

/// Error type for a broadcast
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// An observer failed and the broadcast stopped there
    Aborted {
        /// The failure that stopped the broadcast
        failure: ReactionError,
        /// Observers that had already reacted
        delivered: usize,
        /// Observers that were never invoked
        skipped: usize,
    },
    /// Every observer was invoked, but some of them failed
    Isolated {
        /// Failures in attachment order
        failures: Vec<ReactionError>,
    },
}

impl NotifyError {
    /// All reaction failures carried by this error
    pub fn failures(&self) -> Vec<&ReactionError> {
        match self {
            NotifyError::Aborted { failure, .. } => vec![failure],
            NotifyError::Isolated { failures } => failures.iter().collect(),
        }
    }
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifyError::Aborted {
                failure, skipped, ..
            } => write!(
                f,
                "notification aborted: {} ({} observers not notified)",
                failure, skipped
            ),
            NotifyError::Isolated { failures } => {
                write!(f, "{} observer(s) failed to react", failures.len())?;
                for failure in failures {
                    write!(f, "; {}", failure)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for NotifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotifyError::Aborted { failure, .. } => Some(failure),
            NotifyError::Isolated { failures } => failures
                .first()
                .map(|f| f as &(dyn std::error::Error + 'static)),
        }
    }
}

/// Error type for observable list operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Index is outside the list bounds
    IndexOutOfRange {
        /// The index as given by the caller
        index: isize,
        /// Length of the list at the time of the call
        len: usize,
    },
    /// The replacement does not fit the key (single value for a slice or the reverse)
    TypeMismatch {
        /// What the key requires
        expected: &'static str,
        /// What was supplied
        found: &'static str,
    },
    /// Stepped slices must be replaced by exactly as many items as they select
    ExtendedSliceLength {
        /// Number of positions selected by the slice
        expected: usize,
        /// Number of items supplied
        found: usize,
    },
    /// A slice step of zero selects nothing meaningful
    ZeroStep,
    /// The mutation was applied but broadcasting it failed
    Notify(NotifyError),
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for list of length {}", index, len)
            }
            ListError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            }
            ListError::ExtendedSliceLength { expected, found } => write!(
                f,
                "attempt to assign sequence of size {} to extended slice of size {}",
                found, expected
            ),
            ListError::ZeroStep => write!(f, "slice step cannot be zero"),
            ListError::Notify(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListError::Notify(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NotifyError> for ListError {
    fn from(err: NotifyError) -> Self {
        ListError::Notify(err)
    }
}

/// Error type for loading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io(std::io::Error),
    /// The configuration text is not valid JSON for the expected shape
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config: {}", err),
            ConfigError::Parse(err) => write!(f, "invalid config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================
    // Display Tests
    // ==========================================

    #[test]
    fn test_not_attached_display_names_observer() {
        let err = SubjectError::NotAttached {
            title: "Observer1".to_string(),
        };
        assert_eq!(err.to_string(), "observer 'Observer1' is not attached");
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = ListError::IndexOutOfRange { index: 7, len: 5 };
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_extended_slice_display_matches_sequence_wording() {
        let err = ListError::ExtendedSliceLength {
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "attempt to assign sequence of size 2 to extended slice of size 3"
        );
    }

    #[test]
    fn test_isolated_display_lists_every_failure() {
        let err = NotifyError::Isolated {
            failures: vec![
                ReactionError::new("a", "boom"),
                ReactionError::new("b", "bang"),
            ],
        };
        let text = err.to_string();
        assert!(text.starts_with("2 observer(s) failed"));
        assert!(text.contains("'a'"));
        assert!(text.contains("'b'"));
    }

    // ==========================================
    // Source Chain Tests
    // ==========================================

    #[test]
    fn test_list_error_wraps_notify_error() {
        use std::error::Error;

        let notify = NotifyError::Aborted {
            failure: ReactionError::new("gui", "closed"),
            delivered: 1,
            skipped: 2,
        };
        let err: ListError = notify.clone().into();
        assert_eq!(err, ListError::Notify(notify));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_failures_accessor() {
        let aborted = NotifyError::Aborted {
            failure: ReactionError::new("x", "y"),
            delivered: 0,
            skipped: 0,
        };
        assert_eq!(aborted.failures().len(), 1);
        assert_eq!(aborted.failures()[0].observer, "x");
    }
}
