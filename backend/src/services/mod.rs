//! Business logic services for the LuneStock backend

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod inventory;
pub mod product;
pub mod sale;

pub use auth::AuthService;
pub use catalog::CatalogService;
pub use dashboard::DashboardService;
pub use inventory::InventoryService;
pub use product::ProductService;
pub use sale::SaleService;
