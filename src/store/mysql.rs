use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::{debug, error};

use super::EmployeeStore;
use crate::error::PaycheckError;
use crate::model::employee::{EmployeeRecord, NewEmployee};

pub struct MySqlEmployeeStore {
    pool: MySqlPool,
}

impl MySqlEmployeeStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for MySqlEmployeeStore {
    async fn list(&self) -> Result<Vec<EmployeeRecord>, PaycheckError> {
        let rows = sqlx::query_as::<_, EmployeeRecord>(
            r#"
            SELECT id, name, pay_period, gross_pay, medicare_tax, social_security_tax, net_pay
            FROM employee
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch employees");
            PaycheckError::from(e)
        })?;

        debug!(count = rows.len(), "Fetched employees");
        Ok(rows)
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<u64, PaycheckError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employee
            (name, pay_period, gross_pay, medicare_tax, social_security_tax, net_pay)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.pay_period)
        .bind(employee.gross_pay)
        .bind(employee.medicare_tax)
        .bind(employee.social_security_tax)
        .bind(employee.net_pay)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, employee = %employee.name, "Failed to create employee");
            PaycheckError::from(e)
        })?;

        Ok(result.last_insert_id())
    }
}
