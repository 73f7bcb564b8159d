pub mod credential;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new account
    pub async fn create(&self, name: String) -> Result<entity::account::Model, DbErr> {
        let account = entity::account::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    pub async fn get(&self, account_id: i32) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await
    }

    /// Renames an account
    ///
    /// Returns `None` if the account does not exist.
    pub async fn update_name(
        &self,
        account_id: i32,
        name: String,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        let account = match entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await?
        {
            Some(account) => account,
            None => return Ok(None),
        };

        let mut account_am = account.into_active_model();
        account_am.name = ActiveValue::Set(name);

        let account = account_am.update(self.db).await?;

        Ok(Some(account))
    }

    /// Deletes an account
    ///
    /// Only the account row is removed, credentials & owned resources are deleted through
    /// their own repositories. Returns OK regardless of the account existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Account::delete_by_id(account_id)
            .exec(self.db)
            .await
    }
}
