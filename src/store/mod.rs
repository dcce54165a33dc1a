use async_trait::async_trait;

use crate::error::PaycheckError;
use crate::model::employee::{EmployeeRecord, NewEmployee};

pub mod mysql;

#[cfg(test)]
pub mod memory;

pub use mysql::MySqlEmployeeStore;

/// Create/list access to the employee paycheck table.
///
/// There is no update or delete: rows are write-once.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Every stored record, ordered by id.
    async fn list(&self) -> Result<Vec<EmployeeRecord>, PaycheckError>;

    /// Inserts an already validated row and returns the generated id.
    async fn insert(&self, employee: &NewEmployee) -> Result<u64, PaycheckError>;

    /// Validates the name, pins the derived amounts, then inserts.
    /// Nothing is written when validation fails.
    async fn create(&self, employee: NewEmployee) -> Result<u64, PaycheckError> {
        let employee = employee.validated()?;
        self.insert(&employee).await
    }
}
