//! Inventory domain module.
//!
//! This crate contains the business rules for inventory and loans, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod page;
pub mod store;

pub use item::InventoryItem;
pub use page::{PAGE_SIZE, Pager};
pub use store::InventoryStore;
