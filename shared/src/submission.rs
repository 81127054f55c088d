//! Settlement of an income create call.
//!
//! The frontend awaits `POST /income` and hands the outcome to
//! [`settle_income_submission`], which decides what happens next as an ordered
//! list of effects. Keeping this pure means the ordering (notify, then close
//! after the delay) is checked without a browser.

use log::{debug, warn};
use std::time::Duration;
use thiserror::Error;

use crate::income::IncomeRecord;

/// How long the income form stays open after a successful save.
pub const CLOSE_DELAY: Duration = Duration::from_secs(2);

/// Everything that can go wrong after validation passed. Network failures,
/// server errors and unreadable bodies all end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Request(String),
    #[error("the server returned an empty response")]
    EmptyResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// A step the form has to carry out, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEffect {
    /// Append the created record to the income cache
    AppendRecord(IncomeRecord),
    Notify(Notification),
    /// Close the form once the delay has elapsed
    CloseAfter(Duration),
}

/// Decide what follows a create call.
///
/// `Ok(None)` is an empty body and is treated like a failed request.
pub fn settle_income_submission(
    outcome: Result<Option<IncomeRecord>, SubmissionError>,
) -> Vec<SubmissionEffect> {
    let error = match outcome {
        Ok(Some(record)) => {
            debug!("income {} created", record.id);
            return vec![
                SubmissionEffect::AppendRecord(record),
                SubmissionEffect::Notify(Notification::success(
                    "Income saved",
                    "The income was added to your timeline.",
                )),
                SubmissionEffect::CloseAfter(CLOSE_DELAY),
            ];
        }
        Ok(None) => SubmissionError::EmptyResponse,
        Err(error) => error,
    };

    warn!("income submission failed: {}", error);
    vec![SubmissionEffect::Notify(Notification::error(
        "Could not save income",
        error.to_string(),
    ))]
}

/// Allows one create call at a time for a form instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionSlot {
    in_flight: bool,
}

impl SubmissionSlot {
    /// Claim the slot. `false` when a submission is already pending.
    pub fn try_acquire(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn release(&mut self) {
        self.in_flight = false;
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::IncomeCache;
    use crate::income::IncomeType;
    use chrono::NaiveDate;

    fn record(id: &str) -> IncomeRecord {
        IncomeRecord {
            id: id.to_string(),
            amount: "200".to_string(),
            fund_amount: "20".to_string(),
            income_type: IncomeType::BankTransaction,
            source: "Acme Ltd".to_string(),
            transaction_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            description: None,
        }
    }

    /// Apply the cache effects the way the frontend reducer does.
    fn apply(cache: &mut IncomeCache, effects: &[SubmissionEffect]) {
        for effect in effects {
            if let SubmissionEffect::AppendRecord(record) = effect {
                cache.append_record(record.clone());
            }
        }
    }

    #[test]
    fn test_success_appends_after_existing_records() {
        let mut cache = IncomeCache::new();
        cache.hydrate(vec![record("a"), record("b")]);

        let effects = settle_income_submission(Ok(Some(record("r"))));
        apply(&mut cache, &effects);

        let ids: Vec<&str> = cache.records().unwrap().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "r"]);
    }

    #[test]
    fn test_success_on_unloaded_cache_yields_single_record() {
        let mut cache = IncomeCache::new();
        apply(&mut cache, &settle_income_submission(Ok(Some(record("r")))));
        assert_eq!(cache.records(), Some(&[record("r")][..]));
    }

    #[test]
    fn test_success_notifies_before_delayed_close() {
        let effects = settle_income_submission(Ok(Some(record("r"))));

        let notify_at = effects
            .iter()
            .position(|e| matches!(e, SubmissionEffect::Notify(n) if !n.is_error()))
            .unwrap();
        let close_at = effects
            .iter()
            .position(|e| matches!(e, SubmissionEffect::CloseAfter(_)))
            .unwrap();

        assert!(notify_at < close_at);
        assert_eq!(effects[close_at], SubmissionEffect::CloseAfter(Duration::from_secs(2)));
    }

    #[test]
    fn test_empty_response_is_an_error_and_leaves_cache_alone() {
        let mut cache = IncomeCache::new();
        cache.hydrate(vec![record("a")]);
        let before = cache.clone();

        let effects = settle_income_submission(Ok(None));
        apply(&mut cache, &effects);

        assert_eq!(cache, before);
        assert_eq!(effects.len(), 1);
        match &effects[0] {
            SubmissionEffect::Notify(notification) => {
                assert!(notification.is_error());
                assert_eq!(notification.message, "the server returned an empty response");
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_request_failure_keeps_form_open() {
        let effects =
            settle_income_submission(Err(SubmissionError::Request("Network error".to_string())));

        assert!(!effects.iter().any(|e| matches!(e, SubmissionEffect::CloseAfter(_))));
        assert!(!effects.iter().any(|e| matches!(e, SubmissionEffect::AppendRecord(_))));
        assert!(matches!(&effects[0], SubmissionEffect::Notify(n) if n.message == "Network error"));
    }

    #[test]
    fn test_slot_allows_one_submission_at_a_time() {
        let mut slot = SubmissionSlot::default();
        assert!(slot.try_acquire());
        assert!(slot.is_busy());
        assert!(!slot.try_acquire());

        slot.release();
        assert!(!slot.is_busy());
        assert!(slot.try_acquire());
    }
}
