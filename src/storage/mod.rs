//! Storage layer for the expense manager
//!
//! Provides the flat-file expense persistence with atomic writes, plus the
//! audit log that records every mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseFile;
pub use file_io::{read_text, write_text_atomic};

use std::path::PathBuf;

use serde::Serialize;

use crate::audit::{Action, AuditEntry, AuditLogger, EntityType};
use crate::error::ExpenseResult;

/// Storage coordinator: the expense file and the audit log next to it
pub struct Storage {
    pub expenses: ExpenseFile,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create storage for the given expense file, with auditing enabled
    pub fn new(expense_file: PathBuf, audit_log: PathBuf) -> Self {
        Self {
            expenses: ExpenseFile::new(expense_file),
            audit: Some(AuditLogger::new(audit_log)),
        }
    }

    /// Create storage that writes only the expense file
    pub fn without_audit(expense_file: PathBuf) -> Self {
        Self {
            expenses: ExpenseFile::new(expense_file),
            audit: None,
        }
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    fn record(&self, entry: AuditEntry) -> ExpenseResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }

    /// Record a newly added entity
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        label: Option<String>,
        entity: &T,
    ) -> ExpenseResult<()> {
        self.record(AuditEntry::new(Action::Added, entity_type, entity_id, label).with_after(entity))
    }

    /// Record a change with both values and a field summary
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        label: Option<String>,
        before: &T,
        after: &T,
        changes: Option<String>,
    ) -> ExpenseResult<()> {
        self.record(
            AuditEntry::new(Action::Updated, entity_type, entity_id, label)
                .with_before(before)
                .with_after(after)
                .with_changes(changes),
        )
    }

    /// Record a removed entity
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        label: Option<String>,
        entity: &T,
    ) -> ExpenseResult<()> {
        self.record(AuditEntry::new(Action::Deleted, entity_type, entity_id, label).with_before(entity))
    }
}
