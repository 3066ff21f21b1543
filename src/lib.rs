//! Payroll Ledger
//!
//! This crate records employees (hourly or salaried), tracks the days they
//! worked, calculates their pay with daily overtime, and produces a payroll
//! report. It ships an interactive console front end and a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
