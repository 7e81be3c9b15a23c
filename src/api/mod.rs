//! HTTP API module for the attendance engine.
//!
//! This module provides the REST endpoints that expose the engine
//! operations: punch preflight, day aggregation, monthly payroll, and
//! edited-record validation. It is the engine's own surface, not a proxy
//! for the system-of-record backend.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{AggregateResponse, PunchPreflightResponse, create_router};
pub use request::{
    AggregateRequest, BreakRequest, PayrollRequest, PunchPreflightRequest, RecordRequest,
    SegmentRequest, ValidateRecordRequest,
};
pub use response::ApiError;
pub use state::AppState;
