//! Fixed-rate withholding calculator.
//!
//! Gross pay is always sanitized first: anything that is not a finite,
//! non-negative number becomes `0.0`, so the calculator never fails.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use utoipa::ToSchema;

pub const MEDICARE_TAX_RATE: f64 = 0.0145;
pub const SOCIAL_SECURITY_TAX_RATE: f64 = 0.062;

/// Statutory withholdings taken out of every paycheck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumIter, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaxKind {
    #[strum(serialize = "Medicare Tax")]
    Medicare,
    #[strum(serialize = "Social Security Tax")]
    SocialSecurity,
}

impl TaxKind {
    pub fn rate(self) -> f64 {
        match self {
            TaxKind::Medicare => MEDICARE_TAX_RATE,
            TaxKind::SocialSecurity => SOCIAL_SECURITY_TAX_RATE,
        }
    }

    /// Rate as a percentage with two decimals, e.g. `"1.45%"`.
    pub fn rate_display(self) -> String {
        format!("{:.2}%", self.rate() * 100.0)
    }

    pub fn amount(self, gross_pay: f64) -> f64 {
        sanitize_gross_pay(gross_pay) * self.rate()
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TaxRate {
    #[schema(example = "medicare")]
    pub kind: TaxKind,
    #[schema(example = "Medicare Tax")]
    pub label: String,
    #[schema(example = 0.0145)]
    pub rate: f64,
    #[schema(example = "1.45%")]
    pub rate_display: String,
}

pub fn tax_rates() -> Vec<TaxRate> {
    TaxKind::iter()
        .map(|kind| TaxRate {
            kind,
            label: kind.to_string(),
            rate: kind.rate(),
            rate_display: kind.rate_display(),
        })
        .collect()
}

/// Result of running the calculator over one gross pay figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Paycheck {
    #[schema(example = 1000.0)]
    pub gross_pay: f64,
    #[schema(example = 14.5)]
    pub medicare_tax: f64,
    #[schema(example = 62.0)]
    pub social_security_tax: f64,
    #[schema(example = 923.5)]
    pub net_pay: f64,
}

impl Paycheck {
    pub fn total_tax(&self) -> f64 {
        self.medicare_tax + self.social_security_tax
    }

    /// True when the given derived amounts agree with this paycheck to the cent.
    pub fn matches(&self, medicare_tax: f64, social_security_tax: f64, net_pay: f64) -> bool {
        const TOLERANCE: f64 = 0.005;
        (self.medicare_tax - medicare_tax).abs() < TOLERANCE
            && (self.social_security_tax - social_security_tax).abs() < TOLERANCE
            && (self.net_pay - net_pay).abs() < TOLERANCE
    }
}

impl std::fmt::Display for Paycheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "gross {} medicare {} social security {} net {}",
            format_amount(self.gross_pay),
            format_amount(self.medicare_tax),
            format_amount(self.social_security_tax),
            format_amount(self.net_pay),
        )
    }
}

/// Clamp negatives, NaN and infinities to zero.
pub fn sanitize_gross_pay(gross_pay: f64) -> f64 {
    if gross_pay.is_finite() {
        gross_pay.max(0.0)
    } else {
        0.0
    }
}

/// Parse raw form text; anything that does not parse is zero.
pub fn sanitize_gross_pay_input(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .map(sanitize_gross_pay)
        .unwrap_or(0.0)
}

/// Any JSON value as gross pay: numbers are clamped, strings are parsed,
/// everything else is zero.
pub fn sanitize_gross_pay_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().map(sanitize_gross_pay).unwrap_or(0.0),
        Value::String(s) => sanitize_gross_pay_input(s),
        _ => 0.0,
    }
}

/// `deserialize_with` helper for amounts in request bodies; never fails on a bad amount.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| sanitize_gross_pay_value(&v)))
}

pub fn calculate(gross_pay: f64) -> Paycheck {
    let gross_pay = sanitize_gross_pay(gross_pay);
    let medicare_tax = TaxKind::Medicare.amount(gross_pay);
    let social_security_tax = TaxKind::SocialSecurity.amount(gross_pay);

    Paycheck {
        gross_pay,
        medicare_tax,
        social_security_tax,
        net_pay: gross_pay - medicare_tax - social_security_tax,
    }
}

/// Two-decimal dollar display, e.g. `$923.50`.
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}
