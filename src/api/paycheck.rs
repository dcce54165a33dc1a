use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::model::paycheck::{Paycheck, TaxRate, calculate, deserialize_amount, tax_rates};

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CalculatePaycheck {
    /// Negative, missing or non-numeric values are treated as zero
    #[schema(example = 1000.0, value_type = f64)]
    #[serde(deserialize_with = "deserialize_amount")]
    pub gross_pay: Option<f64>,
}

/// Calculate withholding and net pay
#[utoipa::path(
    post,
    path = "/api/paycheck/calculate",
    request_body = CalculatePaycheck,
    responses(
        (status = 200, description = "Withholding breakdown", body = Paycheck)
    ),
    tag = "Paycheck"
)]
#[instrument(skip(payload))]
pub async fn calculate_paycheck(payload: web::Json<CalculatePaycheck>) -> impl Responder {
    let paycheck = calculate(payload.gross_pay.unwrap_or(0.0));
    debug!(%paycheck, "Calculated paycheck");
    HttpResponse::Ok().json(paycheck)
}

/// List withholding rates
#[utoipa::path(
    get,
    path = "/api/paycheck/rates",
    responses(
        (status = 200, description = "Fixed withholding rates", body = [TaxRate])
    ),
    tag = "Paycheck"
)]
pub async fn list_rates() -> impl Responder {
    HttpResponse::Ok().json(tax_rates())
}
