//! Submission state shared by the login and registration forms.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// What a form shows around its submit button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

/// How a form submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Another submission was still pending; nothing happened.
    Busy,
    /// Rejected locally; no request was sent.
    Invalid,
    Failed,
    Completed,
}

/// Shared, lock-protected [`FormStatus`] with a single in-flight slot.
#[derive(Debug, Clone, Default)]
pub(crate) struct FormState {
    inner: Arc<Mutex<FormStatus>>,
}

impl FormState {
    /// Claim the in-flight slot and clear old messages.
    ///
    /// Returns `false` when a submission is already pending.
    pub(crate) fn begin(&self) -> bool {
        let mut status = self.lock();
        if status.is_loading {
            return false;
        }
        *status = FormStatus {
            is_loading: true,
            ..FormStatus::default()
        };
        true
    }

    /// Release the slot with an error.
    pub(crate) fn fail(&self, message: impl Into<String>) {
        let mut status = self.lock();
        status.is_loading = false;
        status.success_message = None;
        status.error_message = Some(message.into());
    }

    /// Release the slot with a confirmation.
    pub(crate) fn succeed(&self, message: impl Into<String>) {
        let mut status = self.lock();
        status.is_loading = false;
        status.error_message = None;
        status.success_message = Some(message.into());
    }

    /// Show an error without a submission having started.
    pub(crate) fn reject(&self, message: impl Into<String>) {
        let mut status = self.lock();
        if !status.is_loading {
            status.success_message = None;
            status.error_message = Some(message.into());
        }
    }

    pub(crate) fn snapshot(&self) -> FormStatus {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, FormStatus> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_refused() {
        let state = FormState::default();
        assert!(state.begin());
        assert!(!state.begin());
        state.fail("Login failed");
        assert!(state.begin());
        assert_eq!(state.snapshot().error_message, None);
    }

    #[test]
    fn test_reject_does_not_touch_pending_submission() {
        let state = FormState::default();
        state.begin();
        state.reject("Please enter your password");
        let status = state.snapshot();
        assert!(status.is_loading);
        assert_eq!(status.error_message, None);
    }

    #[test]
    fn test_succeed_clears_error() {
        let state = FormState::default();
        state.reject("bad");
        state.begin();
        state.succeed("Login successful!");
        assert_eq!(
            state.snapshot(),
            FormStatus {
                is_loading: false,
                error_message: None,
                success_message: Some("Login successful!".to_string()),
            }
        );
    }
}
