//! Shared test setup for the medlog workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and fixtures the
//! test needs, then `build()` returns a [`TestContext`] holding an in-memory SQLite database,
//! a session backed by an in-memory store, and fixture helpers for inserting more records.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{account::SeededAccount, resource::factory},
        test_setup_with_medlog_tables, TestBuilder, TestContext, TestError,
    };
}

/// Builds a [`TestContext`] with every medlog table created.
///
/// Additional entities may be passed to create their tables as well.
#[macro_export]
macro_rules! test_setup_with_medlog_tables {
    () => {{
        $crate::TestBuilder::new().with_medlog_tables().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            .with_medlog_tables()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
