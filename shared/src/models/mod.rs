//! Domain models for LuneStock

mod catalog;
mod product;
mod sale;
mod user;

pub use catalog::*;
pub use product::*;
pub use sale::*;
pub use user::*;
