//! Inventory domain module.
//!
//! Product model, stock status classification, stock movements and the
//! dashboard summary, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod dashboard;
pub mod filter;
pub mod modal;
pub mod movement;
pub mod product;
pub mod status;

pub use dashboard::DashboardData;
pub use filter::{StockFilter, filter_by_status};
pub use modal::ProductModalMode;
pub use movement::{StockChange, StockMovement, StockMovementKind, net_change};
pub use product::{NewProduct, Product};
pub use status::StockStatus;
