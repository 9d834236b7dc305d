//! HTTP request handlers.

pub mod customers;
pub mod dashboard;
pub mod health;
pub mod restore;
pub mod transactions;
