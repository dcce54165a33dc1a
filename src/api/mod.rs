pub mod employee;
pub mod paycheck;
