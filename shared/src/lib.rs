//! Shared types and domain logic for LuneStock
//!
//! This crate contains the domain models, the pure aggregation core
//! (dashboard statistics, stock adjustment, sale totals) and validation
//! helpers shared between the backend and the frontend (via WASM).

pub mod models;
pub mod stats;
pub mod types;
pub mod validation;

pub use models::*;
pub use stats::*;
pub use types::*;
pub use validation::*;
