use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How an income was received. Codes match the ones the server stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncomeType {
    BankTransaction,
    Salary,
    Cash,
    Bit,
    Paypal,
    Other,
    Check,
}

impl IncomeType {
    pub const ALL: [IncomeType; 7] = [
        IncomeType::BankTransaction,
        IncomeType::Salary,
        IncomeType::Cash,
        IncomeType::Bit,
        IncomeType::Paypal,
        IncomeType::Other,
        IncomeType::Check,
    ];

    /// Wire key, also used as the `<option>` value.
    pub fn key(&self) -> &'static str {
        match self {
            IncomeType::BankTransaction => "BANK_TRANSACTION",
            IncomeType::Salary => "SALARY",
            IncomeType::Cash => "CASH",
            IncomeType::Bit => "BIT",
            IncomeType::Paypal => "PAYPAL",
            IncomeType::Other => "OTHER",
            IncomeType::Check => "CHECK",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncomeType::BankTransaction => "Bank transaction",
            IncomeType::Salary => "Salary",
            IncomeType::Cash => "Cash",
            IncomeType::Bit => "Bit",
            IncomeType::Paypal => "PayPal",
            IncomeType::Other => "Other",
            IncomeType::Check => "Check",
        }
    }
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A select value that is not one of the known keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option: {0}")]
pub struct UnknownOption(pub String);

impl FromStr for IncomeType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IncomeType::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Body of `POST /income`: an income record before the server assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIncomeRequest {
    /// Amount received, a decimal string with at most two fractional digits
    pub amount: String,
    /// Part of the amount set aside for the fund, same format as `amount`
    pub fund_amount: String,
    pub income_type: IncomeType,
    /// Who paid (employer, client, ...)
    pub source: String,
    #[serde(with = "crate::dates")]
    pub transaction_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `PUT /income/{id}`.
pub type UpdateIncomeRequest = CreateIncomeRequest;

/// An income record as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRecord {
    pub id: String,
    pub amount: String,
    pub fund_amount: String,
    pub income_type: IncomeType,
    pub source: String,
    #[serde(with = "crate::dates")]
    pub transaction_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
