//! AWS-oriented adapters and handlers for package receiving.
//!
//! This crate owns runtime integration details (the Lambda handler and
//! the record-store adapter seam) and exposes a single runtime module
//! boundary for the package record and validity primitives.

pub mod adapters;
pub mod handlers;
pub mod runtime;
