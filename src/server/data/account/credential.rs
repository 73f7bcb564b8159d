use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct CredentialRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CredentialRepository<'a, C> {
    /// Creates a new instance of [`CredentialRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a credential which signs in to the provided account
    pub async fn create(
        &self,
        account_id: i32,
        username: String,
        password: String,
    ) -> Result<entity::credential::Model, DbErr> {
        let credential = entity::credential::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            username: ActiveValue::Set(username),
            password: ActiveValue::Set(password),
            date_joined: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        credential.insert(self.db).await
    }

    pub async fn get(&self, credential_id: i32) -> Result<Option<entity::credential::Model>, DbErr> {
        entity::prelude::Credential::find_by_id(credential_id)
            .one(self.db)
            .await
    }

    /// Finds a credential by username, ignoring case
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::credential::Model>, DbErr> {
        use sea_orm::sea_query::ExprTrait;

        entity::prelude::Credential::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::credential::Column::Username)))
                    .eq(username.to_lowercase()),
            )
            .one(self.db)
            .await
    }

    /// Gets every credential of an account in the order they were added
    pub async fn get_many_by_account_id(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::credential::Model>, DbErr> {
        entity::prelude::Credential::find()
            .filter(entity::credential::Column::AccountId.eq(account_id))
            .order_by_asc(entity::credential::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the username and/or password of a credential
    ///
    /// Fields provided as `None` keep their stored value. Returns `None` if the credential
    /// does not exist.
    pub async fn update(
        &self,
        credential_id: i32,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Option<entity::credential::Model>, DbErr> {
        let credential = match entity::prelude::Credential::find_by_id(credential_id)
            .one(self.db)
            .await?
        {
            Some(credential) => credential,
            None => return Ok(None),
        };

        let mut credential_am = credential.into_active_model();
        if let Some(username) = username {
            credential_am.username = ActiveValue::Set(username);
        }
        if let Some(password) = password {
            credential_am.password = ActiveValue::Set(password);
        }

        let credential = credential_am.update(self.db).await?;

        Ok(Some(credential))
    }

    pub async fn delete(&self, credential_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Credential::delete_by_id(credential_id)
            .exec(self.db)
            .await
    }

    /// Deletes every credential of an account
    pub async fn delete_by_account_id(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Credential::delete_many()
            .filter(entity::credential::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await
    }
}
