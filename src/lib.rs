//! Observable List - change notification for an ordered container
//!
//! An [`ObservableList`] owns its items and an embedded [`Subject`]. Observers
//! attach to the list and are told, synchronously and in attachment order,
//! about every append and every index or slice assignment.
//!
//! - **Observer**: anything implementing [`Observer::react`]
//! - **Subject**: ordered registrations plus a synchronous broadcast
//! - **ObservableList**: a sequence whose mutations are broadcast through its subject
//!
//! # Quick Start
//!
//! ```rust
//! use observable_list::{ListChangeLogger, ObservableList, RecordingObserver};
//! use std::rc::Rc;
//!
//! let recorder = Rc::new(RecordingObserver::new("Observer1"));
//!
//! let mut letters: ObservableList<char> = "helloWorld!".chars().collect();
//! letters.attach(Rc::new(ListChangeLogger::new("letters")));
//! letters.attach(recorder.clone());
//!
//! letters.set_slice(5usize.., "John!".chars()).unwrap();
//!
//! assert_eq!(letters.iter().collect::<String>(), "helloJohn!");
//! assert_eq!(recorder.messages(), vec!["item[5:] changed to [J, o, h, n, !]"]);
//! ```
//!
//! # Failures
//!
//! Observers may refuse a notification by returning a [`ReactionError`].
//! Whether the broadcast stops there or carries on to the remaining
//! observers is decided by the subject's [`NotifyPolicy`].

pub mod config;
pub mod error;
pub mod events;
pub mod list;

// Re-export commonly used items at crate root
pub use config::SubjectConfig;
pub use error::{ConfigError, ListError, NotifyError, ReactionError, SubjectError};
pub use events::{
    ChangeEvent, GuiRefreshObserver, ListChangeLogger, NotifyPolicy, Observer, RecordingObserver,
    Subject,
};
pub use list::{Key, ObservableList, Replacement, SliceKey};
