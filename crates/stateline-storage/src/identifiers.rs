//! Identifier allow-listing for dynamic DDL.
//!
//! State labels become output columns and the run id becomes part of
//! the output table name, and SQLite cannot bind identifiers as
//! parameters. Every identifier that reaches a DDL string must pass the
//! allow-list here first; values are always bound as parameters.

use stateline_core::errors::{BuildError, StateResult};

/// Column names owned by the sparse table itself; a state label may not
/// shadow them.
pub const RESERVED_COLUMNS: &[&str] = &["entity_id", "as_of_date"];

const MAX_IDENTIFIER_LEN: usize = 64;

/// Accepts `[A-Za-z_][A-Za-z0-9_]*`, at most 64 bytes.
pub fn validate_identifier(name: &str) -> StateResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if !valid || name.len() > MAX_IDENTIFIER_LEN {
        return Err(BuildError::InvalidIdentifier {
            name: name.to_string(),
        }
        .into());
    }
    Ok(())
}

/// A state label must be a valid identifier and must not shadow one of
/// the fixed output columns.
pub fn validate_label(label: &str) -> StateResult<()> {
    validate_identifier(label)?;
    if RESERVED_COLUMNS.contains(&label) {
        return Err(BuildError::InvalidIdentifier {
            name: label.to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        for name in ["permitted", "injail", "_private", "exp_hash_01", "A9"] {
            assert!(validate_identifier(name).is_ok(), "rejected {name}");
        }
    }

    #[test]
    fn rejects_injection_shaped_input() {
        for name in [
            "",
            "1starts_with_digit",
            "has space",
            "semi;colon",
            "drop--comment",
            "states; DROP TABLE states",
            "quoted\"name",
            "paren(name)",
        ] {
            assert!(validate_identifier(name).is_err(), "accepted {name:?}");
        }
    }

    #[test]
    fn rejects_overlong_identifiers() {
        let name = "a".repeat(65);
        assert!(validate_identifier(&name).is_err());
        let name = "a".repeat(64);
        assert!(validate_identifier(&name).is_ok());
    }

    #[test]
    fn labels_may_not_shadow_fixed_columns() {
        assert!(validate_label("permitted").is_ok());
        assert!(validate_label("entity_id").is_err());
        assert!(validate_label("as_of_date").is_err());
    }
}
