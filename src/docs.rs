use crate::api::employee::{CreateEmployee, EmployeeCreated};
use crate::api::paycheck::CalculatePaycheck;
use crate::model::employee::EmployeeRecord;
use crate::model::paycheck::{Paycheck, TaxKind, TaxRate};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Paycheck Calculator API",
        version = "1.0.0",
        description = r#"
## Paycheck Calculator

Computes Medicare and Social Security withholding and net pay from a gross pay
figure, and stores one record per submitted paycheck.

### Fixed rates
- **Medicare**: 1.45%
- **Social Security**: 6.20%

Negative or non-numeric gross pay is treated as zero.

### Errors
Every failure answers with `{"error": "<message>"}`:
- `400` a required field is missing or the body is malformed
- `500` the database is unavailable
"#
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,

        crate::api::paycheck::calculate_paycheck,
        crate::api::paycheck::list_rates
    ),
    components(
        schemas(
            CreateEmployee,
            EmployeeCreated,
            EmployeeRecord,
            CalculatePaycheck,
            Paycheck,
            TaxKind,
            TaxRate
        )
    ),
    tags(
        (name = "Employee", description = "Stored paycheck records"),
        (name = "Paycheck", description = "Withholding calculator"),
    )
)]
pub struct ApiDoc;
