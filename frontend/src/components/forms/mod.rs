pub mod form_field;
pub mod funding_form;
pub mod income_form;
