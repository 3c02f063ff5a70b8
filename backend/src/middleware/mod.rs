//! Request middleware.
//!
//! Purpose: request lifecycle concerns that cut across handlers, currently
//! trace-id assignment.

pub mod trace;

pub use trace::Trace;
