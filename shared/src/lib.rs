//! Types and client-side rules shared by the income tracker frontend.
//!
//! Everything in here is free of browser APIs so it can be unit-tested natively:
//! wire types for the `/income` endpoints, the money rules, the form controllers,
//! the income cache and the settlement of a create call.

pub mod cache;
pub mod dates;
pub mod forms;
pub mod funding;
pub mod income;
pub mod money;
pub mod submission;
pub mod timeline;

pub use cache::IncomeCache;
pub use forms::{
    FieldErrors, FundingField, FundingForm, IncomeField, IncomeForm, ValidationError,
};
pub use funding::{FundingRecord, TransactionType};
pub use income::{CreateIncomeRequest, IncomeRecord, IncomeType, UnknownOption, UpdateIncomeRequest};
pub use submission::{
    settle_income_submission, Notification, NotificationKind, SubmissionEffect, SubmissionError,
    SubmissionSlot, CLOSE_DELAY,
};
pub use timeline::{TimelineEntry, TimelineKind};
