//! Declarative test builder.
//!
//! The builder queues tables and account fixtures, all of which are created during the final
//! `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// # Example
///
/// ```no_run
/// use medlog_test_utils::TestBuilder;
/// use entity::prelude::*;
///
/// # async fn example() -> Result<(), medlog_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_table(Account)
///     .with_table(Credential)
///     .with_account("Smith household", "alice", "secret1")
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_medlog_tables: bool,

    // (name, username, password)
    accounts: Vec<(String, String, String)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every table of the medlog schema to the test database.
    pub fn with_medlog_tables(mut self) -> Self {
        self.include_medlog_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an account with a single credential.
    ///
    /// Seeded accounts are available in insertion order through [`TestContext::accounts`].
    /// Requires the account & credential tables.
    pub fn with_account(mut self, name: &str, username: &str, password: &str) -> Self {
        self.accounts
            .push((name.to_string(), username.to_string(), password.to_string()));
        self
    }

    /// Build the test context, creating all queued tables & fixtures.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_medlog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Account),
                schema.create_table_from_entity(entity::prelude::Credential),
                schema.create_table_from_entity(entity::prelude::Entry),
                schema.create_table_from_entity(entity::prelude::MedicalContact),
                schema.create_table_from_entity(entity::prelude::Medication),
                schema.create_table_from_entity(entity::prelude::InsuranceCard),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for (name, username, password) in self.accounts {
            let seeded = context
                .account()
                .insert_account_with_credential(&name, &username, &password)
                .await?;

            context.accounts.push(seeded);
        }

        Ok(context)
    }
}
