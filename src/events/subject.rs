//! Subject - observer registration and synchronous broadcast
//!
//! # Design
//!
//! - Observers are held as `Rc<dyn Observer>`; the subject holds registrations, not lifetimes
//! - Attachment order is delivery order
//! - No deduplication: attaching the same handle twice delivers twice
//! - `notify` runs every reaction on the caller's thread before returning
//! - Observer failures are handled according to [`NotifyPolicy`]

use super::Observer;
use crate::config::SubjectConfig;
use crate::error::{NotifyError, ReactionError, SubjectError};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::{debug, warn};

/// What a broadcast does when an observer fails to react
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyPolicy {
    /// Stop at the first failure; later observers are not invoked
    #[default]
    Propagate,
    /// Invoke every observer and report all failures afterwards
    Isolate,
}

/// Owner of an ordered observer list
#[derive(Default)]
pub struct Subject {
    observers: Vec<Rc<dyn Observer>>,
    policy: NotifyPolicy,
}

impl Subject {
    /// Create an empty subject with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty subject with the given failure policy
    pub fn with_policy(policy: NotifyPolicy) -> Self {
        Self {
            observers: Vec::new(),
            policy,
        }
    }

    /// Create an empty subject from configuration
    pub fn from_config(config: &SubjectConfig) -> Self {
        Self::with_policy(config.policy)
    }

    /// Failure policy used by [`notify`](Self::notify)
    pub fn policy(&self) -> NotifyPolicy {
        self.policy
    }

    /// Change the failure policy for subsequent broadcasts
    pub fn set_policy(&mut self, policy: NotifyPolicy) {
        self.policy = policy;
    }

    /// Register an observer at the end of the delivery order
    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        debug!(
            observer = %observer.title(),
            attached = self.observers.len() + 1,
            "Observer attached"
        );
        self.observers.push(observer);
    }

    /// Remove the first registration of this observer handle
    ///
    /// Identity is the `Rc` allocation: any clone of the attached handle
    /// matches, a different observer with the same title does not.
    ///
    /// # Errors
    ///
    /// [`SubjectError::NotAttached`] if the observer is not registered. The
    /// observer list is left unchanged in that case.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) -> Result<(), SubjectError> {
        let position = self
            .observers
            .iter()
            .position(|attached| same_observer(attached, observer))
            .ok_or_else(|| SubjectError::NotAttached {
                title: observer.title().to_string(),
            })?;

        self.observers.remove(position);
        debug!(
            observer = %observer.title(),
            attached = self.observers.len(),
            "Observer detached"
        );
        Ok(())
    }

    /// Whether this observer handle is currently registered
    pub fn is_attached(&self, observer: &Rc<dyn Observer>) -> bool {
        self.observers
            .iter()
            .any(|attached| same_observer(attached, observer))
    }

    /// Deliver a message to every attached observer, in attachment order
    ///
    /// # Errors
    ///
    /// With [`NotifyPolicy::Propagate`], returns [`NotifyError::Aborted`] at
    /// the first failing observer. With [`NotifyPolicy::Isolate`], returns
    /// [`NotifyError::Isolated`] after all observers ran if any failed.
    pub fn notify(&self, message: &str) -> Result<(), NotifyError> {
        debug!(
            observers = self.observers.len(),
            policy = ?self.policy,
            change = %message,
            "Notifying observers"
        );

        let mut failures: Vec<ReactionError> = Vec::new();
        for (index, observer) in self.observers.iter().enumerate() {
            let Err(failure) = observer.react(message) else {
                continue;
            };

            warn!(
                observer = %failure.observer,
                reason = %failure.reason,
                "Observer failed to react"
            );

            match self.policy {
                NotifyPolicy::Propagate => {
                    return Err(NotifyError::Aborted {
                        failure,
                        delivered: index,
                        skipped: self.observers.len() - index - 1,
                    });
                }
                NotifyPolicy::Isolate => failures.push(failure),
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(NotifyError::Isolated { failures })
        }
    }

    /// Number of registrations (duplicates counted)
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observer is registered
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Titles of registered observers, in delivery order
    pub fn titles(&self) -> Vec<&str> {
        self.observers.iter().map(|o| o.title()).collect()
    }
}

impl std::fmt::Debug for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("observers", &self.titles())
            .field("policy", &self.policy)
            .finish()
    }
}

/// Pointer identity, ignoring vtable metadata
fn same_observer(a: &Rc<dyn Observer>, b: &Rc<dyn Observer>) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}
