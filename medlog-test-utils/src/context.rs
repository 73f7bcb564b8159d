//! Test context structure and utilities.

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{error::TestError, fixtures::account::SeededAccount};

/// Test context returned by [`TestBuilder::build`](crate::TestBuilder::build)
///
/// ```ignore
/// let test = TestBuilder::new().with_medlog_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixture helpers
/// let alice = test.account().insert_account_with_credential("Home", "alice", "pw").await?;
/// test.resources().insert_medication(alice.account.id, "Ibuprofen").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,
    /// Accounts seeded with [`TestBuilder::with_account`](crate::TestBuilder::with_account)
    pub accounts: Vec<SeededAccount>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            session,
            accounts: Vec::new(),
        })
    }

    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to `AppState` without the test-utils crate depending on the
    /// main medlog crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub(crate) async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
