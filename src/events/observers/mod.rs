//! Observers react to change notifications broadcast by a [`Subject`](crate::events::Subject)
//!
//! - `logging`: reports which named list changed via tracing
//! - `gui`: requests a refresh of an external list view
//! - `recording`: keeps every message it receives

pub mod gui;
pub mod logging;
pub mod recording;

pub use gui::GuiRefreshObserver;
pub use logging::ListChangeLogger;
pub use recording::RecordingObserver;

use crate::error::ReactionError;

/// Capability to react to a change notification
///
/// Observers are attached as `Rc<dyn Observer>` handles. A subject never owns
/// an observer's lifetime; it only holds a registration. Reactions take
/// `&self`, so observers that accumulate state keep it behind `Cell` or
/// `RefCell`.
///
/// # Example
///
/// ```rust
/// use observable_list::{ObservableList, Observer, ReactionError};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// struct Counter {
///     seen: Cell<usize>,
/// }
///
/// impl Observer for Counter {
///     fn title(&self) -> &str {
///         "counter"
///     }
///
///     fn react(&self, _message: &str) -> Result<(), ReactionError> {
///         self.seen.set(self.seen.get() + 1);
///         Ok(())
///     }
/// }
///
/// let counter = Rc::new(Counter { seen: Cell::new(0) });
/// let mut list = ObservableList::new([1, 2, 3]);
/// list.attach(counter.clone());
/// list.append(4).unwrap();
/// assert_eq!(counter.seen.get(), 1);
/// ```
pub trait Observer {
    /// Display label of this observer
    fn title(&self) -> &str;

    /// Called once per broadcast with a message describing the change
    fn react(&self, message: &str) -> Result<(), ReactionError>;
}
