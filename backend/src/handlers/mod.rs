//! HTTP handlers for the LuneStock API

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod product;
pub mod sale;

pub use auth::*;
pub use catalog::*;
pub use dashboard::*;
pub use health::*;
pub use inventory::*;
pub use product::*;
pub use sale::*;
