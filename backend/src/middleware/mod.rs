//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, currently trace
//! identifier assignment.

pub mod trace;

pub use trace::{TRACE_ID_HEADER, Trace};
