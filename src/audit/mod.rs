//! Audit logging for the expense manager
//!
//! Records every add, update and delete with before/after values in an
//! append-only JSON-lines log next to the settings file.
//!
//! - `AuditEntry`: one logged operation
//! - `AuditLogger`: appends entries and reads them back
//! - `generate_diff`: field-level summary of an update

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{Action, AuditEntry, EntityType};
pub use logger::AuditLogger;
