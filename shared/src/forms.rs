//! Form controllers for the income and funding modals.
//!
//! A form keeps every field as the raw string the user typed. `validate` turns
//! it into a request or a per-field error map; nothing is sent anywhere until
//! that succeeds.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

use crate::dates::parse_date;
use crate::funding::{FundingRecord, TransactionType};
use crate::income::{CreateIncomeRequest, IncomeType};
use crate::money::{fund_amount_for, is_valid_amount, parse_number};

/// Why a single field was rejected. The display text is shown under the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Enter an amount like 120 or 120.50, without a sign")]
    InvalidAmount,
    #[error("Enter a number")]
    NotANumber,
    #[error("Must be at least {0}")]
    BelowMinimum(u32),
    #[error("Pick one of the listed options")]
    UnknownOption,
    #[error("Enter a date as YYYY-MM-DD")]
    InvalidDate,
}

/// Validation errors keyed by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, ValidationError>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, error: ValidationError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: F) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn clear(&mut self, field: F) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Keep the value of a field check, or record its error.
    fn check<T>(&mut self, field: F, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.insert(field, error);
                None
            }
        }
    }
}

fn required(input: &str) -> Result<&str, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(trimmed)
    }
}

fn amount_field(input: &str) -> Result<String, ValidationError> {
    let value = required(input)?;
    if is_valid_amount(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::InvalidAmount)
    }
}

fn option_field<T: FromStr>(input: &str) -> Result<T, ValidationError> {
    required(input)?
        .parse()
        .map_err(|_| ValidationError::UnknownOption)
}

fn date_field(input: &str) -> Result<NaiveDate, ValidationError> {
    parse_date(required(input)?).ok_or(ValidationError::InvalidDate)
}

fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IncomeField {
    Amount,
    FundAmount,
    IncomeType,
    Source,
    TransactionDate,
    Description,
}

impl IncomeField {
    /// DOM id of the input bound to this field.
    pub fn id(&self) -> &'static str {
        match self {
            IncomeField::Amount => "income-amount",
            IncomeField::FundAmount => "income-fund-amount",
            IncomeField::IncomeType => "income-type",
            IncomeField::Source => "income-source",
            IncomeField::TransactionDate => "income-transaction-date",
            IncomeField::Description => "income-description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncomeField::Amount => "* Amount",
            IncomeField::FundAmount => "* Fund Amount",
            IncomeField::IncomeType => "* Income type",
            IncomeField::Source => "* Source",
            IncomeField::TransactionDate => "* Transaction date",
            IncomeField::Description => "Description",
        }
    }
}

/// State of the income modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomeForm {
    pub amount: String,
    pub fund_amount: String,
    pub income_type: String,
    pub source: String,
    pub transaction_date: String,
    pub description: String,
    errors: FieldErrors<IncomeField>,
}

impl IncomeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: IncomeField) -> &str {
        match field {
            IncomeField::Amount => &self.amount,
            IncomeField::FundAmount => &self.fund_amount,
            IncomeField::IncomeType => &self.income_type,
            IncomeField::Source => &self.source,
            IncomeField::TransactionDate => &self.transaction_date,
            IncomeField::Description => &self.description,
        }
    }

    fn value_mut(&mut self, field: IncomeField) -> &mut String {
        match field {
            IncomeField::Amount => &mut self.amount,
            IncomeField::FundAmount => &mut self.fund_amount,
            IncomeField::IncomeType => &mut self.income_type,
            IncomeField::Source => &mut self.source,
            IncomeField::TransactionDate => &mut self.transaction_date,
            IncomeField::Description => &mut self.description,
        }
    }

    /// Set a field to what the user typed and drop its stale error.
    pub fn edit(&mut self, field: IncomeField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
        self.errors.clear(field);
    }

    /// Set the fund amount to 10% of the amount.
    ///
    /// No-op (returns `false`) while the amount is blank or not a number.
    pub fn autofill_fund_amount(&mut self) -> bool {
        match fund_amount_for(&self.amount) {
            Some(fund_amount) => {
                self.edit(IncomeField::FundAmount, fund_amount);
                true
            }
            None => false,
        }
    }

    pub fn errors(&self) -> &FieldErrors<IncomeField> {
        &self.errors
    }

    pub fn error(&self, field: IncomeField) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn validate(&self) -> Result<CreateIncomeRequest, FieldErrors<IncomeField>> {
        let mut errors = FieldErrors::new();

        let amount = errors.check(IncomeField::Amount, amount_field(&self.amount));
        let fund_amount = errors.check(IncomeField::FundAmount, amount_field(&self.fund_amount));
        let income_type =
            errors.check(IncomeField::IncomeType, option_field::<IncomeType>(&self.income_type));
        let source = errors.check(IncomeField::Source, required(&self.source));
        let transaction_date =
            errors.check(IncomeField::TransactionDate, date_field(&self.transaction_date));

        match (amount, fund_amount, income_type, source, transaction_date) {
            (Some(amount), Some(fund_amount), Some(income_type), Some(source), Some(transaction_date)) => {
                Ok(CreateIncomeRequest {
                    amount,
                    fund_amount,
                    income_type,
                    source: source.to_string(),
                    transaction_date,
                    description: optional_text(&self.description),
                })
            }
            _ => Err(errors),
        }
    }

    /// Validate and remember the outcome for rendering.
    ///
    /// Returns the request only when every field passed.
    pub fn prepare_submission(&mut self) -> Option<CreateIncomeRequest> {
        match self.validate() {
            Ok(request) => {
                self.errors = FieldErrors::new();
                Some(request)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FundingField {
    Amount,
    TransactionType,
    TransactionDate,
    Beneficiary,
    Description,
}

impl FundingField {
    pub fn id(&self) -> &'static str {
        match self {
            FundingField::Amount => "funding-amount",
            FundingField::TransactionType => "funding-transaction-type",
            FundingField::TransactionDate => "funding-transaction-date",
            FundingField::Beneficiary => "funding-beneficiary",
            FundingField::Description => "funding-description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FundingField::Amount => "* Amount",
            FundingField::TransactionType => "* Transaction type",
            FundingField::TransactionDate => "* Transaction date",
            FundingField::Beneficiary => "* Beneficiary",
            FundingField::Description => "Description",
        }
    }
}

fn funding_amount_field(input: &str) -> Result<f64, ValidationError> {
    let value = parse_number(required(input)?).ok_or(ValidationError::NotANumber)?;
    if value < Decimal::ONE {
        return Err(ValidationError::BelowMinimum(1));
    }
    value.to_f64().ok_or(ValidationError::NotANumber)
}

/// State of the funding modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundingForm {
    pub amount: String,
    pub transaction_type: String,
    pub transaction_date: String,
    pub beneficiary: String,
    pub description: String,
    errors: FieldErrors<FundingField>,
}

impl FundingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FundingField) -> &str {
        match field {
            FundingField::Amount => &self.amount,
            FundingField::TransactionType => &self.transaction_type,
            FundingField::TransactionDate => &self.transaction_date,
            FundingField::Beneficiary => &self.beneficiary,
            FundingField::Description => &self.description,
        }
    }

    pub fn edit(&mut self, field: FundingField, value: impl Into<String>) {
        let slot = match field {
            FundingField::Amount => &mut self.amount,
            FundingField::TransactionType => &mut self.transaction_type,
            FundingField::TransactionDate => &mut self.transaction_date,
            FundingField::Beneficiary => &mut self.beneficiary,
            FundingField::Description => &mut self.description,
        };
        *slot = value.into();
        self.errors.clear(field);
    }

    pub fn error(&self, field: FundingField) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn validate(&self) -> Result<FundingRecord, FieldErrors<FundingField>> {
        let mut errors = FieldErrors::new();

        let amount = errors.check(FundingField::Amount, funding_amount_field(&self.amount));
        let transaction_type = errors.check(
            FundingField::TransactionType,
            option_field::<TransactionType>(&self.transaction_type),
        );
        let transaction_date =
            errors.check(FundingField::TransactionDate, date_field(&self.transaction_date));
        let beneficiary = errors.check(FundingField::Beneficiary, required(&self.beneficiary));

        match (amount, transaction_type, transaction_date, beneficiary) {
            (Some(amount), Some(transaction_type), Some(transaction_date), Some(beneficiary)) => {
                Ok(FundingRecord {
                    amount,
                    beneficiary: beneficiary.to_string(),
                    description: optional_text(&self.description),
                    transaction_type,
                    transaction_date,
                })
            }
            _ => Err(errors),
        }
    }

    /// Validate and hand out the record. A valid form is cleared for the next
    /// entry; an invalid one keeps its values and shows the errors.
    pub fn prepare_submission(&mut self) -> Option<FundingRecord> {
        match self.validate() {
            Ok(record) => {
                self.reset();
                Some(record)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_income_form() -> IncomeForm {
        let mut form = IncomeForm::new();
        form.edit(IncomeField::Amount, "200");
        form.edit(IncomeField::FundAmount, "20");
        form.edit(IncomeField::IncomeType, "SALARY");
        form.edit(IncomeField::Source, "  Acme Ltd ");
        form.edit(IncomeField::TransactionDate, "2024-05-01");
        form
    }

    #[test]
    fn test_valid_income_form_builds_request() {
        let request = filled_income_form().validate().unwrap();
        assert_eq!(request.amount, "200");
        assert_eq!(request.fund_amount, "20");
        assert_eq!(request.income_type, IncomeType::Salary);
        assert_eq!(request.source, "Acme Ltd");
        assert_eq!(request.transaction_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_empty_income_form_reports_every_required_field() {
        let errors = IncomeForm::new().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(IncomeField::Amount), Some(&ValidationError::Required));
        assert_eq!(errors.get(IncomeField::Source), Some(&ValidationError::Required));
        assert_eq!(errors.get(IncomeField::Description), None);
    }

    #[test]
    fn test_income_amount_pattern_is_enforced() {
        for bad in ["12.345", "-5", "+5", "1e2"] {
            let mut form = filled_income_form();
            form.edit(IncomeField::Amount, bad);
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get(IncomeField::Amount), Some(&ValidationError::InvalidAmount));
            assert_eq!(errors.len(), 1);
        }

        let mut form = filled_income_form();
        form.edit(IncomeField::FundAmount, "2.001");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(IncomeField::FundAmount), Some(&ValidationError::InvalidAmount));
    }

    #[test]
    fn test_unknown_income_type_is_rejected() {
        let mut form = filled_income_form();
        form.edit(IncomeField::IncomeType, "CREDIT_CARD");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(IncomeField::IncomeType), Some(&ValidationError::UnknownOption));
    }

    #[test]
    fn test_description_is_optional_and_trimmed() {
        let mut form = filled_income_form();
        form.edit(IncomeField::Description, "   ");
        assert_eq!(form.validate().unwrap().description, None);

        form.edit(IncomeField::Description, " bonus ");
        assert_eq!(form.validate().unwrap().description.as_deref(), Some("bonus"));
    }

    #[test]
    fn test_autofill_sets_ten_percent() {
        let mut form = IncomeForm::new();
        form.edit(IncomeField::Amount, "200");
        assert!(form.autofill_fund_amount());
        assert_eq!(form.fund_amount, "20");
    }

    #[test]
    fn test_autofill_without_amount_is_noop() {
        let mut form = IncomeForm::new();
        form.edit(IncomeField::FundAmount, "7");
        assert!(!form.autofill_fund_amount());
        assert_eq!(form.fund_amount, "7");

        form.edit(IncomeField::Amount, "twelve");
        assert!(!form.autofill_fund_amount());
        assert_eq!(form.fund_amount, "7");
    }

    #[test]
    fn test_prepare_submission_stores_errors_and_edit_clears_them() {
        let mut form = filled_income_form();
        form.edit(IncomeField::Amount, "");
        assert!(form.prepare_submission().is_none());
        assert_eq!(form.error(IncomeField::Amount), Some(&ValidationError::Required));

        form.edit(IncomeField::Amount, "150.25");
        assert_eq!(form.error(IncomeField::Amount), None);
        assert!(form.prepare_submission().is_some());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_autofill_clears_fund_amount_error() {
        let mut form = filled_income_form();
        form.edit(IncomeField::FundAmount, "");
        assert!(form.prepare_submission().is_none());
        assert!(form.error(IncomeField::FundAmount).is_some());

        form.autofill_fund_amount();
        assert_eq!(form.error(IncomeField::FundAmount), None);
    }

    #[test]
    fn test_non_ascii_digits_are_not_amounts() {
        let mut form = filled_income_form();
        form.edit(IncomeField::Amount, "١٢٣");
        form.edit(IncomeField::FundAmount, "１２");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(IncomeField::Amount), Some(&ValidationError::InvalidAmount));
        assert_eq!(errors.get(IncomeField::FundAmount), Some(&ValidationError::InvalidAmount));
    }

    #[test]
    fn test_autofill_on_zero_amount_is_noop() {
        let mut form = IncomeForm::new();
        form.edit(IncomeField::Amount, "0");
        form.edit(IncomeField::FundAmount, "3");
        assert!(!form.autofill_fund_amount());
        assert_eq!(form.fund_amount, "3");
    }

    fn filled_funding_form() -> FundingForm {
        let mut form = FundingForm::new();
        form.edit(FundingField::Amount, "25");
        form.edit(FundingField::TransactionType, "NEDARIM_PLUS");
        form.edit(FundingField::TransactionDate, "2024-06-02");
        form.edit(FundingField::Beneficiary, "Food bank");
        form
    }

    #[test]
    fn test_valid_funding_form_builds_record() {
        let record = filled_funding_form().validate().unwrap();
        assert_eq!(record.amount, 25.0);
        assert_eq!(record.transaction_type, TransactionType::NedarimPlus);
        assert_eq!(record.beneficiary, "Food bank");
    }

    #[test]
    fn test_funding_amount_must_be_at_least_one() {
        let mut form = filled_funding_form();
        form.edit(FundingField::Amount, "0.5");
        assert_eq!(
            form.validate().unwrap_err().get(FundingField::Amount),
            Some(&ValidationError::BelowMinimum(1))
        );

        form.edit(FundingField::Amount, "abc");
        assert_eq!(
            form.validate().unwrap_err().get(FundingField::Amount),
            Some(&ValidationError::NotANumber)
        );

        form.edit(FundingField::Amount, "1");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_valid_funding_submission_resets_form() {
        let mut form = filled_funding_form();
        let record = form.prepare_submission().unwrap();
        assert_eq!(record.beneficiary, "Food bank");
        assert_eq!(form, FundingForm::new());
    }

    #[test]
    fn test_invalid_funding_submission_keeps_values() {
        let mut form = filled_funding_form();
        form.edit(FundingField::Beneficiary, "");
        assert!(form.prepare_submission().is_none());
        assert_eq!(form.amount, "25");
        assert_eq!(form.error(FundingField::Beneficiary), Some(&ValidationError::Required));
    }

    #[test]
    fn test_funding_requires_beneficiary_and_date() {
        let mut form = filled_funding_form();
        form.edit(FundingField::Beneficiary, " ");
        form.edit(FundingField::TransactionDate, "tomorrow");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FundingField::Beneficiary), Some(&ValidationError::Required));
        assert_eq!(errors.get(FundingField::TransactionDate), Some(&ValidationError::InvalidDate));
    }

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(ValidationError::Required.to_string(), "This field is required");
        assert_eq!(ValidationError::BelowMinimum(1).to_string(), "Must be at least 1");
    }
}
