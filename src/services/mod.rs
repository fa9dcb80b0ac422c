//! Service layer for the expense manager
//!
//! The service layer provides the expense logic on top of the storage layer:
//! validation, selection, filtering, totals, and the session that ties them
//! together for the presentation layers.

pub mod filter;
pub mod session;
pub mod store;

pub use filter::FilterView;
pub use session::Session;
pub use store::ExpenseStore;
