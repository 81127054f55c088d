use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::income::UnknownOption;

/// How a funding allocation was paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    BankTransaction,
    CreditCard,
    Cash,
    Bit,
    Paypal,
    NedarimPlus,
    Other,
    Check,
}

impl TransactionType {
    pub const ALL: [TransactionType; 8] = [
        TransactionType::BankTransaction,
        TransactionType::CreditCard,
        TransactionType::Cash,
        TransactionType::Bit,
        TransactionType::Paypal,
        TransactionType::NedarimPlus,
        TransactionType::Other,
        TransactionType::Check,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TransactionType::BankTransaction => "BANK_TRANSACTION",
            TransactionType::CreditCard => "CREDIT_CARD",
            TransactionType::Cash => "CASH",
            TransactionType::Bit => "BIT",
            TransactionType::Paypal => "PAYPAL",
            TransactionType::NedarimPlus => "NEDARIM_PLUS",
            TransactionType::Other => "OTHER",
            TransactionType::Check => "CHECK",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::BankTransaction => "Bank transaction",
            TransactionType::CreditCard => "Credit card",
            TransactionType::Cash => "Cash",
            TransactionType::Bit => "Bit",
            TransactionType::Paypal => "PayPal",
            TransactionType::NedarimPlus => "Nedarim Plus",
            TransactionType::Other => "Other",
            TransactionType::Check => "Check",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TransactionType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// An allocation to the fund. Validated on the client but there is no
/// endpoint for it yet, so it only ever reaches the diagnostic log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingRecord {
    /// Always >= 1
    pub amount: f64,
    pub beneficiary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub transaction_type: TransactionType,
    #[serde(with = "crate::dates")]
    pub transaction_date: NaiveDate,
}
