use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::format_display_date;
use crate::income::IncomeRecord;
use crate::money::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Income,
    Funding,
}

impl TimelineKind {
    /// CSS modifier for the card.
    pub fn css_class(&self) -> &'static str {
        match self {
            TimelineKind::Income => "timeline-card income",
            TimelineKind::Funding => "timeline-card funding",
        }
    }
}

/// One card on the timeline. Display only, never sent to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub description: String,
    pub amount: String,
    pub date: NaiveDate,
    pub kind: TimelineKind,
}

impl TimelineEntry {
    pub fn formatted_amount(&self) -> String {
        format_amount(&self.amount)
    }

    pub fn formatted_date(&self) -> String {
        format_display_date(self.date)
    }
}

impl From<&IncomeRecord> for TimelineEntry {
    fn from(record: &IncomeRecord) -> Self {
        Self {
            title: record.source.clone(),
            description: record
                .description
                .clone()
                .unwrap_or_else(|| record.income_type.label().to_string()),
            amount: record.amount.clone(),
            date: record.transaction_date,
            kind: TimelineKind::Income,
        }
    }
}
