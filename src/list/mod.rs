//! ObservableList - a sequence that broadcasts its own mutations
//!
//! The list composes a [`Subject`]. Every successful mutation is applied
//! first and then broadcast to all attached observers before the mutating
//! call returns. Reads go through `Deref<Target = [T]>` and never notify.
//!
//! Validation always happens before mutation: a rejected index, key or
//! replacement leaves the list untouched and notifies nobody.

pub mod key;

pub use key::{Key, Replacement, SliceKey};

use crate::config::SubjectConfig;
use crate::error::{ListError, SubjectError};
use crate::events::{ChangeEvent, NotifyPolicy, Observer, Subject};
use key::{SEQUENCE, SINGLE_VALUE};
use std::fmt::Display;
use std::ops::{Deref, Range};
use std::rc::Rc;
use tracing::debug;

/// A validated assignment, ready to apply
enum Assignment<T> {
    Index(usize, T),
    Splice(Range<usize>, Vec<T>),
    Positions(Vec<usize>, Vec<T>),
}

/// Ordered list of `T` with change notification
///
/// # Example
///
/// ```rust
/// use observable_list::{ObservableList, RecordingObserver};
/// use std::rc::Rc;
///
/// let recorder = Rc::new(RecordingObserver::new("rec"));
/// let mut list = ObservableList::new([1, 2, 3, 4, 5]);
/// list.attach(recorder.clone());
///
/// list.append(23).unwrap();
///
/// assert_eq!(list, vec![1, 2, 3, 4, 5, 23]);
/// assert_eq!(recorder.messages(), vec!["23 added to list"]);
/// ```
#[derive(Debug)]
pub struct ObservableList<T> {
    items: Vec<T>,
    subject: Subject,
    last_change: Option<ChangeEvent>,
}

impl<T> ObservableList<T> {
    /// Create a list holding the initial items
    ///
    /// Construction is not a change; nothing is broadcast.
    pub fn new(initial: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: initial.into_iter().collect(),
            subject: Subject::new(),
            last_change: None,
        }
    }

    /// Create a list whose subject is built from configuration
    pub fn with_config(initial: impl IntoIterator<Item = T>, config: &SubjectConfig) -> Self {
        Self {
            items: initial.into_iter().collect(),
            subject: Subject::from_config(config),
            last_change: None,
        }
    }

    /// Register an observer; see [`Subject::attach`]
    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.subject.attach(observer);
    }

    /// Deregister an observer; see [`Subject::detach`]
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) -> Result<(), SubjectError> {
        self.subject.detach(observer)
    }

    /// Number of observer registrations
    pub fn observer_count(&self) -> usize {
        self.subject.len()
    }

    /// The embedded subject
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Change the failure policy used for broadcasts
    pub fn set_policy(&mut self, policy: NotifyPolicy) {
        self.subject.set_policy(policy);
    }

    /// Read one item; negative indices count from the end
    pub fn item(&self, index: isize) -> Result<&T, ListError> {
        let position = self.resolve(index)?;
        Ok(&self.items[position])
    }

    /// The most recent change applied to this list, if any
    pub fn last_change(&self) -> Option<&ChangeEvent> {
        self.last_change.as_ref()
    }

    /// The items as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Discard the observers and return the items
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    fn resolve(&self, index: isize) -> Result<usize, ListError> {
        let len = self.items.len();
        let position = if index < 0 {
            index + len as isize
        } else {
            index
        };

        if position < 0 || position as usize >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        Ok(position as usize)
    }

    fn plan(&self, key: &Key, value: Replacement<T>) -> Result<Assignment<T>, ListError> {
        match (key, value) {
            (Key::Index(index), Replacement::One(value)) => {
                Ok(Assignment::Index(self.resolve(*index)?, value))
            }
            (Key::Slice(slice), Replacement::Many(values)) => {
                let (start, stop, step) = slice.indices(self.items.len())?;
                if step == 1 {
                    let start = start as usize;
                    let stop = (stop as usize).max(start);
                    return Ok(Assignment::Splice(start..stop, values));
                }

                let positions = slice.positions(self.items.len())?;
                if positions.len() != values.len() {
                    return Err(ListError::ExtendedSliceLength {
                        expected: positions.len(),
                        found: values.len(),
                    });
                }
                Ok(Assignment::Positions(positions, values))
            }
            (Key::Index(_), value) => Err(ListError::TypeMismatch {
                expected: SINGLE_VALUE,
                found: value.kind(),
            }),
            (Key::Slice(_), value) => Err(ListError::TypeMismatch {
                expected: SEQUENCE,
                found: value.kind(),
            }),
        }
    }

    fn apply(&mut self, assignment: Assignment<T>) {
        match assignment {
            Assignment::Index(position, value) => self.items[position] = value,
            Assignment::Splice(range, values) => {
                self.items.splice(range, values).for_each(drop);
            }
            Assignment::Positions(positions, values) => {
                for (position, value) in positions.into_iter().zip(values) {
                    self.items[position] = value;
                }
            }
        }
    }

    fn broadcast(&mut self, event: ChangeEvent) -> Result<(), ListError> {
        debug!(
            event = event.event_type(),
            len = self.items.len(),
            "List changed"
        );
        let message = event.message();
        self.last_change = Some(event);
        self.subject.notify(&message)?;
        Ok(())
    }
}

impl<T: Display> ObservableList<T> {
    /// Push an item and broadcast `"<item> added to list"`
    ///
    /// # Errors
    ///
    /// [`ListError::Notify`] if an observer failed; the item stays appended.
    pub fn append(&mut self, item: T) -> Result<(), ListError> {
        let event = ChangeEvent::appended(&item);
        self.items.push(item);
        self.broadcast(event)
    }

    /// Replace an index or slice and broadcast `"item[<key>] changed to <value>"`
    ///
    /// Slices with step 1 may change the list length. Stepped slices must be
    /// given exactly as many values as they select.
    ///
    /// # Errors
    ///
    /// - [`ListError::IndexOutOfRange`] for an index outside the list
    /// - [`ListError::TypeMismatch`] for a single value on a slice or a sequence on an index
    /// - [`ListError::ExtendedSliceLength`] / [`ListError::ZeroStep`] for bad stepped slices
    /// - [`ListError::Notify`] if an observer failed; the assignment stays applied
    ///
    /// All but the last are detected before anything changes.
    pub fn set_item(
        &mut self,
        key: impl Into<Key>,
        value: Replacement<T>,
    ) -> Result<(), ListError> {
        let key = key.into();
        let event = ChangeEvent::assigned(key, &value);
        let assignment = self.plan(&key, value)?;
        self.apply(assignment);
        self.broadcast(event)
    }

    /// Replace a single item
    pub fn set(&mut self, index: isize, value: T) -> Result<(), ListError> {
        self.set_item(Key::Index(index), Replacement::One(value))
    }

    /// Replace a slice with the given values
    pub fn set_slice(
        &mut self,
        slice: impl Into<SliceKey>,
        values: impl IntoIterator<Item = T>,
    ) -> Result<(), ListError> {
        self.set_item(
            Key::Slice(slice.into()),
            Replacement::Many(values.into_iter().collect()),
        )
    }
}

impl<T> Deref for ObservableList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> FromIterator<T> for ObservableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, T> IntoIterator for &'a ObservableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for ObservableList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.items == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ObservableList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items == other[..]
    }
}
