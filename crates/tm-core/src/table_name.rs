//! Strongly-typed, validated ledger table name.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Strongly-typed wrapper for the ledger table name.
///
/// The name ends up interpolated into `CREATE TABLE` / `SELECT` / `INSERT`
/// statements (identifiers cannot be bound as query parameters), so
/// construction enforces the `[A-Za-z_][A-Za-z0-9_]*` pattern. Anything
/// else, including schema-qualified names, is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableName(String);

impl TableName {
    /// Create a `TableName`, returning `CoreError::InvalidTableName` if the
    /// name is not a safe bare identifier.
    pub fn try_new(name: impl Into<String>) -> CoreResult<Self> {
        let s = name.into();
        if is_safe_identifier(&s) {
            Ok(Self(s))
        } else {
            Err(CoreError::InvalidTableName { name: s })
        }
    }

    /// The default ledger table name, known to be a valid identifier.
    pub fn default_ledger() -> Self {
        Self(crate::config::DEFAULT_LEDGER_TABLE.to_string())
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Bare SQL identifier check: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_safe_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for TableName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TableName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TableName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TableName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for TableName {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_creation() {
        let name = TableName::try_new("migration_tbl").unwrap();
        assert_eq!(name.as_str(), "migration_tbl");
    }

    #[test]
    fn test_table_name_display() {
        let name = TableName::try_new("migration_tbl").unwrap();
        assert_eq!(format!("{}", name), "migration_tbl");
    }

    #[test]
    fn test_table_name_deref() {
        let name = TableName::try_new("migration_tbl").unwrap();
        assert_eq!(&*name, "migration_tbl");
        // Can call str methods via Deref
        assert!(name.starts_with("migration"));
    }

    #[test]
    fn test_table_name_equality() {
        let name = TableName::try_new("migration_tbl").unwrap();
        assert_eq!(name, "migration_tbl");
        assert_eq!(name, "migration_tbl".to_string());
    }

    #[test]
    fn test_table_name_into_inner() {
        let name = TableName::try_new("ledger").unwrap();
        let s: String = name.into_inner();
        assert_eq!(s, "ledger");
    }

    #[test]
    fn test_leading_underscore_and_digits_allowed() {
        assert!(TableName::try_new("_tbl2").is_ok());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(TableName::try_new("").is_err());
    }

    #[test]
    fn test_leading_digit_rejected() {
        assert!(TableName::try_new("1tbl").is_err());
    }

    #[test]
    fn test_schema_qualified_rejected() {
        assert!(TableName::try_new("main.migration_tbl").is_err());
    }

    #[test]
    fn test_injection_rejected() {
        let err = TableName::try_new("x; DROP TABLE users; --").unwrap_err();
        assert!(err.to_string().contains("[C004]"));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(TableName::try_new("migration tbl").is_err());
    }

    #[test]
    fn test_table_name_serde_roundtrip() {
        let name = TableName::try_new("migration_tbl").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#""migration_tbl""#);
        let deserialized: TableName = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, name);
    }

    #[test]
    fn test_table_name_borrow() {
        use std::collections::HashMap;
        let mut map: HashMap<TableName, i32> = HashMap::new();
        map.insert(TableName::try_new("test").unwrap(), 42);
        // Can look up by &str thanks to Borrow<str>
        assert_eq!(map.get("test"), Some(&42));
    }
}
