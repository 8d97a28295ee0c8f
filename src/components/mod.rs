//! UI Components
//!
//! The two list sections of the page and their delegated event handlers.

mod cart_panel;
mod inventory_list;

pub use cart_panel::CartPanel;
pub use inventory_list::InventoryList;
