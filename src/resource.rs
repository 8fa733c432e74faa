use std::fmt;

use serde::{Deserialize, Serialize};

use crate::credentials::Credentials;

/// State of one provisioned database as handed back to the orchestrator.
///
/// `db_username`, `db_password` and `id` are set once by create; only `id` is
/// ever refreshed afterwards.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseResource {
    pub db_name: String,
    pub db_username: String,
    pub db_password: String,
    pub id: i32,
}

impl DatabaseResource {
    pub(crate) fn new(db_name: &str, credentials: Credentials, id: i32) -> Self {
        DatabaseResource {
            db_name: db_name.to_string(),
            db_username: credentials.username,
            db_password: credentials.password,
            id,
        }
    }

    /// The database name is immutable; a different name means a new database.
    pub fn requires_replacement(&self, desired_db_name: &str) -> bool {
        self.db_name != desired_db_name
    }
}

impl fmt::Debug for DatabaseResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseResource")
            .field("db_name", &self.db_name)
            .field("db_username", &self.db_username)
            .field("db_password", &"<redacted>")
            .field("id", &self.id)
            .finish()
    }
}

/// What delete does with the role that owns the dropped database.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerRolePolicy {
    /// Leave the role in place.
    #[default]
    Retain,
    /// Drop the role right after the database.
    Drop,
}
