use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

/// An account inserted together with its first credential
#[derive(Clone, Debug)]
pub struct SeededAccount {
    pub account: entity::account::Model,
    pub credential: entity::credential::Model,
}

impl TestContext {
    pub fn account<'a>(&'a self) -> AccountFixtures<'a> {
        AccountFixtures { context: self }
    }
}

pub struct AccountFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> AccountFixtures<'a> {
    pub async fn insert_account(&self, name: &str) -> Result<entity::account::Model, TestError> {
        Ok(
            entity::prelude::Account::insert(entity::account::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_credential(
        &self,
        account_id: i32,
        username: &str,
        password: &str,
    ) -> Result<entity::credential::Model, TestError> {
        Ok(
            entity::prelude::Credential::insert(entity::credential::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                username: ActiveValue::Set(username.to_string()),
                password: ActiveValue::Set(password.to_string()),
                date_joined: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_account_with_credential(
        &self,
        name: &str,
        username: &str,
        password: &str,
    ) -> Result<SeededAccount, TestError> {
        let account = self.insert_account(name).await?;
        let credential = self
            .insert_credential(account.id, username, password)
            .await?;

        Ok(SeededAccount {
            account,
            credential,
        })
    }
}
