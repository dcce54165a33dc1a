use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::{
    error::PaycheckError,
    model::employee::{EmployeeRecord, NewEmployee},
    model::paycheck::deserialize_amount,
    store::EmployeeStore,
};

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CreateEmployee {
    #[schema(example = "Jane Doe", value_type = String)]
    pub name: Option<String>,
    #[schema(example = "2024-01-01 to 2024-01-14", value_type = String)]
    pub pay_period: Option<String>,
    #[schema(example = 1000.0, value_type = f64)]
    #[serde(deserialize_with = "deserialize_amount")]
    pub gross_pay: Option<f64>,
    #[schema(example = 14.5, value_type = f64)]
    #[serde(deserialize_with = "deserialize_amount")]
    pub medicare: Option<f64>,
    #[schema(example = 62.0, value_type = f64)]
    #[serde(deserialize_with = "deserialize_amount")]
    pub social_security: Option<f64>,
    #[schema(example = 923.5, value_type = f64)]
    #[serde(deserialize_with = "deserialize_amount")]
    pub net_pay: Option<f64>,
}

impl From<CreateEmployee> for NewEmployee {
    fn from(payload: CreateEmployee) -> Self {
        NewEmployee {
            name: payload.name.unwrap_or_default(),
            pay_period: payload.pay_period.unwrap_or_default(),
            gross_pay: payload.gross_pay.unwrap_or(0.0),
            medicare_tax: payload.medicare.unwrap_or(0.0),
            social_security_tax: payload.social_security.unwrap_or(0.0),
            net_pay: payload.net_pay.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct EmployeeCreated {
    #[schema(example = "Employee created successfully")]
    pub message: String,
    #[schema(example = 1)]
    pub id: u64,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employee",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = EmployeeCreated),
        (status = 400, description = "Name is missing", body = Object, example = json!({
            "error": "Name is required"
        })),
        (status = 500, description = "Storage failure", body = Object, example = json!({
            "error": "pool timed out while waiting for an open connection"
        }))
    ),
    tag = "Employee"
)]
#[instrument(skip(store, payload))]
pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    payload: web::Json<CreateEmployee>,
) -> Result<impl Responder, PaycheckError> {
    let employee = NewEmployee::from(payload.into_inner());
    let id = store.create(employee).await?;

    info!(id, "Employee created");

    Ok(HttpResponse::Created().json(EmployeeCreated {
        message: "Employee created successfully".to_string(),
        id,
    }))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employee",
    responses(
        (status = 200, description = "Every stored paycheck record", body = [EmployeeRecord]),
        (status = 500, description = "Storage failure", body = Object, example = json!({
            "error": "pool timed out while waiting for an open connection"
        }))
    ),
    tag = "Employee"
)]
#[instrument(skip(store))]
pub async fn list_employees(
    store: web::Data<dyn EmployeeStore>,
) -> Result<impl Responder, PaycheckError> {
    let employees = store.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}
