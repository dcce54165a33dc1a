use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::error::PaycheckError;
use crate::model::paycheck::{Paycheck, calculate};

/// One persisted paycheck row. Write-once; never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Jane Doe",
        "pay_period": "2024-01-01 to 2024-01-14",
        "gross_pay": 1000.0,
        "medicare_tax": 14.5,
        "social_security_tax": 62.0,
        "net_pay": 923.5
    })
)]
pub struct EmployeeRecord {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = "2024-01-01 to 2024-01-14")]
    pub pay_period: String,

    #[schema(example = 1000.0)]
    pub gross_pay: f64,

    #[schema(example = 14.5)]
    pub medicare_tax: f64,

    #[schema(example = 62.0)]
    pub social_security_tax: f64,

    #[schema(example = 923.5)]
    pub net_pay: f64,
}

impl EmployeeRecord {
    pub fn paycheck(&self) -> Paycheck {
        Paycheck {
            gross_pay: self.gross_pay,
            medicare_tax: self.medicare_tax,
            social_security_tax: self.social_security_tax,
            net_pay: self.net_pay,
        }
    }
}

/// `name VARCHAR(255)`, counted in characters.
pub const MAX_NAME_CHARS: usize = 255;
/// `pay_period TEXT`, counted in bytes.
pub const MAX_PAY_PERIOD_BYTES: usize = 65_535;

/// Row about to be inserted; carries the six fields of a create call.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub pay_period: String,
    pub gross_pay: f64,
    pub medicare_tax: f64,
    pub social_security_tax: f64,
    pub net_pay: f64,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>, pay_period: impl Into<String>, paycheck: Paycheck) -> Self {
        Self {
            name: name.into(),
            pay_period: pay_period.into(),
            gross_pay: paycheck.gross_pay,
            medicare_tax: paycheck.medicare_tax,
            social_security_tax: paycheck.social_security_tax,
            net_pay: paycheck.net_pay,
        }
    }

    /// Rejects an empty name and text the table cannot hold, then pins the
    /// derived amounts to `gross_pay`.
    pub fn validated(self) -> Result<Self, PaycheckError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PaycheckError::validation("Name is required"));
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(PaycheckError::validation(format!(
                "Name must be at most {MAX_NAME_CHARS} characters"
            )));
        }
        if self.pay_period.len() > MAX_PAY_PERIOD_BYTES {
            return Err(PaycheckError::validation(format!(
                "Pay period must be at most {MAX_PAY_PERIOD_BYTES} bytes"
            )));
        }

        let paycheck = calculate(self.gross_pay);
        if !paycheck.matches(self.medicare_tax, self.social_security_tax, self.net_pay) {
            warn!(
                employee = %name,
                gross_pay = paycheck.gross_pay,
                medicare_tax = self.medicare_tax,
                social_security_tax = self.social_security_tax,
                net_pay = self.net_pay,
                "Submitted withholding disagrees with gross pay; recomputing"
            );
        }

        Ok(NewEmployee::new(name, self.pay_period, paycheck))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, gross_pay: f64) -> NewEmployee {
        NewEmployee::new(name, "2024-01-01 to 2024-01-14", calculate(gross_pay))
    }

    #[test]
    fn empty_or_blank_name_is_rejected() {
        assert_eq!(
            draft("", 1000.0).validated(),
            Err(PaycheckError::validation("Name is required"))
        );
        assert!(draft("   ", 1000.0).validated().is_err());
    }

    #[test]
    fn text_longer_than_its_column_is_rejected() {
        let longest = "é".repeat(MAX_NAME_CHARS);
        assert!(draft(&longest, 1000.0).validated().is_ok());

        let too_long = "é".repeat(MAX_NAME_CHARS + 1);
        assert!(matches!(
            draft(&too_long, 1000.0).validated(),
            Err(PaycheckError::Validation(_))
        ));

        let mut employee = draft("Jane", 1000.0);
        employee.pay_period = "2024-01-01 to 2024-01-14, overtime included ".repeat(100);
        assert!(employee.validated().is_ok());

        let mut employee = draft("Jane", 1000.0);
        employee.pay_period = "x".repeat(MAX_PAY_PERIOD_BYTES + 1);
        assert!(matches!(employee.validated(), Err(PaycheckError::Validation(_))));
    }

    #[test]
    fn name_is_trimmed() {
        let employee = draft("  Jane Doe ", 1000.0).validated().unwrap();
        assert_eq!(employee.name, "Jane Doe");
    }

    #[test]
    fn inconsistent_amounts_are_recomputed() {
        let employee = NewEmployee {
            name: "Jane".into(),
            pay_period: String::new(),
            gross_pay: 1000.0,
            medicare_tax: 1.0,
            social_security_tax: 2.0,
            net_pay: 997.0,
        }
        .validated()
        .unwrap();

        assert!((employee.medicare_tax - 14.5).abs() < 1e-9);
        assert!((employee.social_security_tax - 62.0).abs() < 1e-9);
        assert!((employee.net_pay - 923.5).abs() < 1e-9);
    }

    #[test]
    fn negative_gross_pay_is_stored_as_zero() {
        let mut employee = draft("Jane", 0.0);
        employee.gross_pay = -300.0;
        let employee = employee.validated().unwrap();
        assert_eq!(employee.gross_pay, 0.0);
        assert_eq!(employee.net_pay, 0.0);
    }
}
