//! Shared package-receiving domain primitives.
//!
//! This crate owns the package record contract, the status transition
//! model, and the validity predicate seam. It intentionally excludes AWS
//! SDK and Lambda runtime concerns.

pub mod contract;
pub mod validity;
