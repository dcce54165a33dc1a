use std::sync::Mutex;

use async_trait::async_trait;

use super::EmployeeStore;
use crate::error::PaycheckError;
use crate::model::employee::{EmployeeRecord, NewEmployee};

/// Vec-backed store with MySQL-style auto-increment ids.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    rows: Mutex<Vec<EmployeeRecord>>,
}

impl MemoryEmployeeStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn list(&self) -> Result<Vec<EmployeeRecord>, PaycheckError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<u64, PaycheckError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as u64 + 1;
        rows.push(EmployeeRecord {
            id,
            name: employee.name.clone(),
            pay_period: employee.pay_period.clone(),
            gross_pay: employee.gross_pay,
            medicare_tax: employee.medicare_tax,
            social_security_tax: employee.social_security_tax,
            net_pay: employee.net_pay,
        });
        Ok(id)
    }
}

/// Store whose connection is always gone.
pub struct UnavailableStore;

#[async_trait]
impl EmployeeStore for UnavailableStore {
    async fn list(&self) -> Result<Vec<EmployeeRecord>, PaycheckError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn insert(&self, _employee: &NewEmployee) -> Result<u64, PaycheckError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::paycheck::calculate;

    #[actix_web::test]
    async fn create_then_list_round_trips_derived_values() {
        let store = MemoryEmployeeStore::default();
        let id = store
            .create(NewEmployee::new("Jane Doe", "2024-01-01 to 2024-01-14", calculate(1000.0)))
            .await
            .unwrap();

        let rows = store.list().await.unwrap();
        let row = rows.iter().find(|r| r.id == id).unwrap();
        assert_eq!(row.name, "Jane Doe");
        assert!((row.medicare_tax - 14.5).abs() < 1e-9);
        assert!((row.social_security_tax - 62.0).abs() < 1e-9);
        assert!((row.net_pay - 923.5).abs() < 1e-9);
        assert_eq!(row.paycheck(), calculate(row.gross_pay));
    }

    #[actix_web::test]
    async fn empty_name_inserts_nothing() {
        let store = MemoryEmployeeStore::default();
        let result = store
            .create(NewEmployee::new("", "2024-01-01 to 2024-01-14", calculate(1000.0)))
            .await;

        assert!(matches!(result, Err(PaycheckError::Validation(_))));
        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn ids_are_unique() {
        let store = MemoryEmployeeStore::default();
        let a = store.create(NewEmployee::new("A", "", calculate(1.0))).await.unwrap();
        let b = store.create(NewEmployee::new("B", "", calculate(2.0))).await.unwrap();
        assert_ne!(a, b);
    }

    #[actix_web::test]
    async fn unavailable_store_reports_storage_errors() {
        assert!(matches!(UnavailableStore.list().await, Err(PaycheckError::Storage(_))));
        let result = UnavailableStore
            .create(NewEmployee::new("Jane", "", calculate(10.0)))
            .await;
        assert!(matches!(result, Err(PaycheckError::Storage(_))));
    }
}
