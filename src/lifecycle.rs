// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::credentials::{CredentialGenerator, Credentials};
use crate::database::{AdminConnection, ConnectionParams, Connector, PostgresConnector};
use crate::error::LifecycleError;
use crate::identifier::{database_ident, ident, literal, validate_database_name};
use crate::resource::{DatabaseResource, OwnerRolePolicy};

/// Creates, refreshes and drops databases on one PostgreSQL server.
///
/// Every operation opens its own administrative connection and releases it
/// before returning.
pub struct DatabaseManager<C = PostgresConnector, R = StdRng> {
    connector: C,
    generator: CredentialGenerator<R>,
    params: ConnectionParams,
    owner_role_policy: OwnerRolePolicy,
}

impl DatabaseManager {
    pub fn for_server(params: ConnectionParams) -> Self {
        DatabaseManager::new(
            PostgresConnector,
            CredentialGenerator::from_os_rng(),
            params,
        )
    }
}

impl<C: Connector, R: Rng> DatabaseManager<C, R> {
    pub fn new(connector: C, generator: CredentialGenerator<R>, params: ConnectionParams) -> Self {
        DatabaseManager {
            connector,
            generator,
            params,
            owner_role_policy: OwnerRolePolicy::default(),
        }
    }

    pub fn with_owner_role_policy(mut self, policy: OwnerRolePolicy) -> Self {
        self.owner_role_policy = policy;
        self
    }

    /// Creates a dedicated owner role and a database owned by it.
    ///
    /// If the database cannot be created the freshly created role is dropped
    /// again before the error is returned.
    pub fn create(&mut self, db_name: &str) -> Result<DatabaseResource, LifecycleError> {
        validate_database_name(db_name)?;

        let mut conn = self.open()?;
        let credentials = self.generator.generate();

        create_user(&mut conn, &credentials)?;

        if let Err(err) = create_database(&mut conn, db_name, &credentials.username) {
            drop_role_after_failed_create(&mut conn, db_name, &credentials.username);
            return Err(err);
        }

        let id = get_oid(&mut conn, db_name)?;
        info!("Database '{db_name}' created with OID {id}");

        Ok(DatabaseResource::new(db_name, credentials, id))
    }

    /// Refreshes the OID of an existing database.
    ///
    /// Returns `Ok(None)` once the database no longer exists.
    pub fn read(
        &self,
        state: &DatabaseResource,
    ) -> Result<Option<DatabaseResource>, LifecycleError> {
        validate_database_name(&state.db_name)?;

        let mut conn = self.open()?;

        match get_oid(&mut conn, &state.db_name) {
            Ok(id) => Ok(Some(DatabaseResource {
                id,
                ..state.clone()
            })),
            Err(LifecycleError::NotFound { db_name }) => {
                info!("Database '{db_name}' no longer exists");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Nothing about a provisioned database can change in place, so this
    /// leaves the server untouched and returns the prior state.
    pub fn update(&self, state: DatabaseResource) -> DatabaseResource {
        debug!("Update of database '{}' has no effect", state.db_name);
        state
    }

    /// Drops the database, and its owner role when the policy asks for it.
    pub fn delete(&self, state: &DatabaseResource) -> Result<(), LifecycleError> {
        validate_database_name(&state.db_name)?;

        let mut conn = self.open()?;

        conn.execute(&format!("DROP DATABASE {}", database_ident(&state.db_name)))
            .map_err(|source| LifecycleError::Delete {
                db_name: state.db_name.clone(),
                source,
            })?;
        info!("Database '{}' dropped", state.db_name);

        match self.owner_role_policy {
            OwnerRolePolicy::Retain => {
                debug!(
                    "Retaining owner role '{}' of database '{}'",
                    state.db_username, state.db_name
                );
            }
            OwnerRolePolicy::Drop => {
                conn.execute(&format!("DROP ROLE {}", ident(&state.db_username)))
                    .map_err(|source| LifecycleError::DropOwner {
                        db_name: state.db_name.clone(),
                        username: state.db_username.clone(),
                        source,
                    })?;
                info!("Owner role '{}' dropped", state.db_username);
            }
        }

        Ok(())
    }

    fn open(&self) -> Result<C::Connection, LifecycleError> {
        self.connector
            .connect(&self.params)
            .map_err(|source| LifecycleError::Connection {
                target: self.params.target(),
                source,
            })
    }
}

/// Looks up the catalog OID of `db_name`, ignoring case.
pub fn get_oid<A: AdminConnection>(conn: &mut A, db_name: &str) -> Result<i32, LifecycleError> {
    match conn.query_database_oid(db_name) {
        Ok(Some(id)) => Ok(id),
        Ok(None) => Err(LifecycleError::NotFound {
            db_name: db_name.to_string(),
        }),
        Err(source) => Err(LifecycleError::Lookup {
            db_name: db_name.to_string(),
            source,
        }),
    }
}

fn create_user<A: AdminConnection>(
    conn: &mut A,
    credentials: &Credentials,
) -> Result<(), LifecycleError> {
    let sql = format!(
        "CREATE USER {} WITH PASSWORD {} CREATEDB",
        ident(&credentials.username),
        literal(&credentials.password)
    );
    conn.execute(&sql)
        .map_err(|source| LifecycleError::CreateUser {
            username: credentials.username.clone(),
            source,
        })?;
    info!("User '{}' successfully created", credentials.username);
    Ok(())
}

fn create_database<A: AdminConnection>(
    conn: &mut A,
    db_name: &str,
    owner: &str,
) -> Result<(), LifecycleError> {
    let sql = format!(
        "CREATE DATABASE {} WITH OWNER = {} ENCODING 'UTF8' LC_COLLATE 'en_US.utf8' \
         LC_CTYPE 'en_US.utf8' TABLESPACE pg_default CONNECTION LIMIT -1",
        database_ident(db_name),
        ident(owner)
    );
    conn.execute(&sql)
        .map_err(|source| LifecycleError::CreateDatabase {
            db_name: db_name.to_string(),
            source,
        })
}

fn drop_role_after_failed_create<A: AdminConnection>(conn: &mut A, db_name: &str, username: &str) {
    match conn.execute(&format!("DROP ROLE {}", ident(username))) {
        Ok(()) => debug!("Dropped role '{username}' after failing to create database '{db_name}'"),
        Err(err) => warn!(
            "Role '{username}' is orphaned after failing to create database '{db_name}', drop it manually: {err}"
        ),
    }
}
