//! State behind the paycheck form.
//!
//! Holds the four inputs, recomputes the breakdown on demand, and turns a
//! complete form into the `POST /api/employee` body.

use chrono::NaiveDate;
use tracing::error;

use crate::api::employee::{CreateEmployee, EmployeeCreated};
use crate::error::PaycheckError;
use crate::model::pay_period::PayPeriod;
use crate::model::paycheck::{Paycheck, TaxKind, calculate, format_amount, sanitize_gross_pay_input};

pub const INCOMPLETE_FORM: &str = "Please fill in all fields";
pub const SUBMIT_FAILED: &str = "An error occurred while submitting the form";

/// Why a submission did not produce a record.
#[derive(Debug)]
pub enum SubmitError {
    /// The server answered with an `{error}` body
    Rejected(PaycheckError),
    /// No answer came back at all
    Transport(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaycheckForm {
    pub employee_name: String,
    gross_pay: f64,
    pub pay_period_start: Option<NaiveDate>,
    pub pay_period_end: Option<NaiveDate>,
}

impl PaycheckForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_employee_name(&mut self, name: impl Into<String>) {
        self.employee_name = name.into();
    }

    /// Raw text from the gross pay field; anything invalid becomes zero.
    pub fn set_gross_pay_input(&mut self, input: &str) {
        self.gross_pay = sanitize_gross_pay_input(input);
    }

    pub fn gross_pay(&self) -> f64 {
        self.gross_pay
    }

    pub fn set_pay_period(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.pay_period_start = start;
        self.pay_period_end = end;
    }

    pub fn breakdown(&self) -> Paycheck {
        calculate(self.gross_pay)
    }

    /// e.g. `"Tax rate: 1.45%"` / `"Tax amount: $14.50"`
    pub fn tax_lines(&self, kind: TaxKind) -> (String, String) {
        (
            format!("Tax rate: {}", kind.rate_display()),
            format!("Tax amount: {}", format_amount(kind.amount(self.gross_pay))),
        )
    }

    pub fn net_pay_display(&self) -> String {
        format_amount(self.breakdown().net_pay)
    }

    /// Body for `POST /api/employee`, or the message to show the user.
    pub fn submission(&self) -> Result<CreateEmployee, PaycheckError> {
        let (Some(start), Some(end)) = (self.pay_period_start, self.pay_period_end) else {
            return Err(PaycheckError::validation(INCOMPLETE_FORM));
        };
        if self.employee_name.is_empty() || self.gross_pay <= 0.0 {
            return Err(PaycheckError::validation(INCOMPLETE_FORM));
        }

        let period = PayPeriod::new(start, end)?;
        let paycheck = self.breakdown();

        Ok(CreateEmployee {
            name: Some(self.employee_name.clone()),
            pay_period: Some(period.to_string()),
            gross_pay: Some(paycheck.gross_pay),
            medicare: Some(paycheck.medicare_tax),
            social_security: Some(paycheck.social_security_tax),
            net_pay: Some(paycheck.net_pay),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies the server's answer: clears the form on success and returns
    /// the message to show the user either way.
    pub fn complete(&mut self, outcome: Result<EmployeeCreated, SubmitError>) -> String {
        match outcome {
            Ok(created) => {
                self.reset();
                format!("Employee created successfully with ID: {}", created.id)
            }
            Err(SubmitError::Rejected(e)) => format!("Error: {e}"),
            Err(SubmitError::Transport(detail)) => {
                error!(error = %detail, "Error submitting form");
                SUBMIT_FAILED.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PaycheckForm {
        let mut form = PaycheckForm::new();
        form.set_employee_name("Jane Doe");
        form.set_gross_pay_input("1000");
        form.set_pay_period(
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 1, 14),
        );
        form
    }

    #[test]
    fn builds_submission_from_complete_form() {
        let body = filled().submission().unwrap();
        assert_eq!(body.name.as_deref(), Some("Jane Doe"));
        assert_eq!(body.pay_period.as_deref(), Some("2024-01-01 to 2024-01-14"));
        assert!((body.net_pay.unwrap() - 923.5).abs() < 1e-9);
    }

    #[test]
    fn live_display_tracks_gross_pay() {
        let form = filled();
        assert_eq!(
            form.tax_lines(TaxKind::Medicare),
            ("Tax rate: 1.45%".to_string(), "Tax amount: $14.50".to_string())
        );
        assert_eq!(
            form.tax_lines(TaxKind::SocialSecurity).1,
            "Tax amount: $62.00"
        );
        assert_eq!(form.net_pay_display(), "$923.50");
    }

    #[test]
    fn incomplete_forms_are_rejected() {
        let mut form = filled();
        form.set_employee_name("");
        assert_eq!(form.submission().unwrap_err().to_string(), INCOMPLETE_FORM);

        let mut form = filled();
        form.pay_period_end = None;
        assert!(form.submission().is_err());

        let mut form = filled();
        form.set_gross_pay_input("-5");
        assert_eq!(form.gross_pay(), 0.0);
        assert!(form.submission().is_err());
    }

    #[test]
    fn reversed_period_is_rejected() {
        let mut form = filled();
        form.set_pay_period(
            NaiveDate::from_ymd_opt(2024, 1, 14),
            NaiveDate::from_ymd_opt(2024, 1, 1),
        );
        assert!(matches!(form.submission(), Err(PaycheckError::Validation(_))));
    }

    #[test]
    fn success_resets_and_failure_keeps_fields() {
        let mut form = filled();
        let message = form.complete(Err(SubmitError::Rejected(PaycheckError::storage(
            "Data too long for column",
        ))));
        assert_eq!(message, "Error: Data too long for column");
        assert_eq!(form, filled());

        let message = form.complete(Err(SubmitError::Transport("connection refused".into())));
        assert_eq!(message, SUBMIT_FAILED);
        assert_eq!(form, filled());

        let message = form.complete(Ok(EmployeeCreated {
            message: "Employee created successfully".into(),
            id: 7,
        }));
        assert_eq!(message, "Employee created successfully with ID: 7");
        assert_eq!(form, PaycheckForm::default());
    }
}
