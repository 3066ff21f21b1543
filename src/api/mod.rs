//! HTTP API module for the payroll ledger.
//!
//! This module provides a REST endpoint that builds a payroll report from a
//! roster posted as JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, PayrollRequest, WorkDayRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
