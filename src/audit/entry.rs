//! One line of the audit log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What happened to the entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Added,
    Updated,
    Deleted,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Self::Added => "added",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        };
        f.write_str(word)
    }
}

/// Kinds of records that end up in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Settings,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expense => f.write_str("Expense"),
            Self::Settings => f.write_str("Settings"),
        }
    }
}

/// A logged change with the values around it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub action: Action,
    pub entity_type: EntityType,
    pub id: String,

    /// Category of an expense, or the settings key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    /// Stamp a new entry with the current time
    pub fn new(
        action: Action,
        entity_type: EntityType,
        id: impl Into<String>,
        label: Option<String>,
    ) -> Self {
        Self {
            at: Utc::now(),
            action,
            entity_type,
            id: id.into(),
            label,
            before: None,
            after: None,
            changes: None,
        }
    }

    pub fn with_before<T: Serialize>(mut self, value: &T) -> Self {
        self.before = serde_json::to_value(value).ok();
        self
    }

    pub fn with_after<T: Serialize>(mut self, value: &T) -> Self {
        self.after = serde_json::to_value(value).ok();
        self
    }

    pub fn with_changes(mut self, changes: Option<String>) -> Self {
        self.changes = changes;
        self
    }

    /// One-line summary for `history`
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{}  {} {} {}",
            self.at.format("%Y-%m-%d %H:%M:%S"),
            self.entity_type,
            self.id,
            self.action
        );
        if let Some(label) = &self.label {
            line.push_str(&format!(" '{}'", label));
        }
        if let Some(changes) = &self.changes {
            line.push_str(&format!(": {}", changes));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_sets_values() {
        let entry = AuditEntry::new(Action::Deleted, EntityType::Expense, "exp-1", None)
            .with_before(&json!({"amount": "5.00", "category": "Travel"}));

        assert_eq!(entry.action, Action::Deleted);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_json_line_omits_missing_values() {
        let entry = AuditEntry::new(Action::Added, EntityType::Expense, "exp-1", None)
            .with_after(&json!({}));
        let line = serde_json::to_string(&entry).unwrap();

        assert!(line.contains("\"action\":\"added\""));
        assert!(!line.contains("label"));
        assert!(!line.contains("before"));
    }

    #[test]
    fn test_summary() {
        let entry = AuditEntry::new(
            Action::Updated,
            EntityType::Expense,
            "exp-12345678",
            Some("Groceries".to_string()),
        )
        .with_changes(Some("category: \"Food\" -> \"Groceries\"".to_string()));

        let summary = entry.summary();
        assert!(summary.contains("Expense exp-12345678 updated 'Groceries'"));
        assert!(summary.ends_with(": category: \"Food\" -> \"Groceries\""));
    }
}
