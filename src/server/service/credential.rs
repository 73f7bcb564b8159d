use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::account::{AccountDto, CredentialDto, DeleteCredentialDto},
    server::{
        data::account::credential::CredentialRepository,
        error::{auth::AuthError, validation::ValidationError, Error},
        model::{db::CredentialModel, session::SessionIdentity},
        service::account::AccountService,
        util::validate,
    },
};

/// Validated request to add a credential
pub struct NewCredential {
    pub username: String,
    pub password: String,
}

impl TryFrom<CredentialDto> for NewCredential {
    type Error = Error;

    fn try_from(dto: CredentialDto) -> Result<Self, Self::Error> {
        validate::username(dto.username.as_deref(), true)?;
        validate::password(dto.password.as_deref(), true)?;

        Ok(Self {
            username: dto.username.unwrap_or_default(),
            password: dto.password.unwrap_or_default(),
        })
    }
}

/// Validated update of the session credential, at least one field is set
pub struct CredentialChanges {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<CredentialDto> for CredentialChanges {
    type Error = Error;

    fn try_from(dto: CredentialDto) -> Result<Self, Self::Error> {
        if dto.username.is_none() && dto.password.is_none() {
            return Err(ValidationError::new("`username` or `password` must be specified").into());
        }

        validate::username(dto.username.as_deref(), false)?;
        validate::password(dto.password.as_deref(), false)?;

        Ok(Self {
            username: dto.username,
            password: dto.password,
        })
    }
}

/// Returns the validated username of a credential to delete
pub fn validate_deleted_username(dto: DeleteCredentialDto) -> Result<String, Error> {
    validate::username(dto.username.as_deref(), true)?;

    Ok(dto.username.unwrap_or_default())
}

/// Fails with 409 when a credential other than `exempt_id` already uses the username
///
/// Usernames are compared ignoring case. The check is not atomic with the following write.
pub async fn ensure_username_available<C: ConnectionTrait>(
    db: &C,
    username: &str,
    exempt_id: Option<i32>,
) -> Result<(), Error> {
    let existing = CredentialRepository::new(db)
        .find_by_username(username)
        .await?;

    match existing {
        Some(credential) if Some(credential.id) != exempt_id => {
            Err(AuthError::UsernameTaken(username.to_string()).into())
        }
        _ => Ok(()),
    }
}

/// Service for the credentials which sign in to an account.
pub struct CredentialService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CredentialService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a credential to the session account
    pub async fn add(
        &self,
        identity: &SessionIdentity,
        credential: NewCredential,
    ) -> Result<(AccountDto, CredentialModel), Error> {
        ensure_username_available(self.db, &credential.username, None).await?;

        let credential = CredentialRepository::new(self.db)
            .create(identity.account_id, credential.username, credential.password)
            .await?;

        let account = AccountService::new(self.db)
            .get_account(identity.account_id)
            .await?;

        Ok((account, credential))
    }

    /// Updates the username and/or password of the session credential
    pub async fn update(
        &self,
        identity: &SessionIdentity,
        changes: CredentialChanges,
    ) -> Result<(AccountDto, CredentialModel), Error> {
        if let Some(username) = &changes.username {
            ensure_username_available(self.db, username, Some(identity.credential_id)).await?;
        }

        let credential = CredentialRepository::new(self.db)
            .update(identity.credential_id, changes.username, changes.password)
            .await?
            .ok_or(AuthError::SessionNotRecognized)?;

        let account = AccountService::new(self.db)
            .get_account(credential.account_id)
            .await?;

        Ok((account, credential))
    }

    /// Deletes a credential of the session account by username
    ///
    /// Fails with 404 when no credential uses the username and with 403 when it belongs to
    /// another account. Returns the deleted credential.
    pub async fn delete_by_username(
        &self,
        identity: &SessionIdentity,
        username: &str,
    ) -> Result<CredentialModel, Error> {
        let credential_repo = CredentialRepository::new(self.db);

        let credential = credential_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AuthError::UsernameNotFound(username.to_string()))?;

        if credential.account_id != identity.account_id {
            return Err(AuthError::CredentialNotInAccount(username.to_string()).into());
        }

        credential_repo.delete(credential.id).await?;

        Ok(credential)
    }
}
