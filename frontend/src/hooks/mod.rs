pub mod use_income;
pub mod use_income_form;
