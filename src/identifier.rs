//! Identifier handling for DDL statements, which cannot bind parameters.

use pg_escape::{quote_identifier, quote_literal};

use crate::error::LifecycleError;

/// NAMEDATALEN - 1; longer names are silently truncated by the server.
pub const MAX_IDENTIFIER_LENGTH: usize = 63;

pub fn validate_database_name(name: &str) -> Result<(), LifecycleError> {
    let reason = if name.is_empty() {
        "name must not be empty"
    } else if name.len() > MAX_IDENTIFIER_LENGTH {
        "name must not exceed 63 bytes"
    } else if name.contains('\0') {
        "name must not contain NUL bytes"
    } else {
        return Ok(());
    };

    Err(LifecycleError::InvalidIdentifier {
        name: name.to_string(),
        reason,
    })
}

/// Quotes `name` only when PostgreSQL would otherwise fold or reject it.
pub fn ident(name: &str) -> String {
    quote_identifier(name).to_string()
}

/// Folds `name` to lowercase before quoting, as PostgreSQL does for unquoted
/// names, so names differing only in case address the same database.
pub fn database_ident(name: &str) -> String {
    ident(&name.to_lowercase())
}

pub fn literal(value: &str) -> String {
    quote_literal(value).to_string()
}
