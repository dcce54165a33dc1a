pub mod employee;
pub mod pay_period;
pub mod paycheck;
