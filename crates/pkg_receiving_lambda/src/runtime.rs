//! Module boundary for the domain primitives used by the handlers.

pub use pkg_receiving_core::contract;
pub use pkg_receiving_core::validity;
