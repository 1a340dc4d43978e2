//! Shared value types used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod envelope;
pub mod phone;

pub use envelope::{ApiResponse, ErrorResponse};
pub use phone::{PhoneError, PhoneNumber};
