//! Paid Leave Balance Simulator
//!
//! This crate simulates an employee's paid leave over time: monthly accrual
//! into a three-bucket balance, annual rollover with caps, and consumption of
//! a fixed historical leave schedule measured in South African working days.

#![warn(missing_docs)]

pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod simulation;
