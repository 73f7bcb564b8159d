use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::account::{AccountDto, SignInDto, SignUpDto, UpdateAccountDto},
    server::{
        data::{
            account::{credential::CredentialRepository, AccountRepository},
            entry::EntryRepository,
            insurance_card::InsuranceCardRepository,
            medical_contact::MedicalContactRepository,
            medication::MedicationRepository,
        },
        error::{auth::AuthError, Error},
        model::{
            db::{AccountModel, CredentialModel},
            session::SessionIdentity,
        },
        service::credential::ensure_username_available,
        util::validate,
    },
};

/// Validated sign in request
pub struct SignIn {
    pub username: String,
    pub password: String,
}

impl TryFrom<SignInDto> for SignIn {
    type Error = Error;

    fn try_from(dto: SignInDto) -> Result<Self, Self::Error> {
        validate::username(dto.username.as_deref(), true)?;
        validate::password(dto.password.as_deref(), true)?;

        Ok(Self {
            username: dto.username.unwrap_or_default(),
            password: dto.password.unwrap_or_default(),
        })
    }
}

/// Validated sign up request
pub struct SignUp {
    pub name: String,
    pub username: String,
    pub password: String,
}

impl TryFrom<SignUpDto> for SignUp {
    type Error = Error;

    fn try_from(dto: SignUpDto) -> Result<Self, Self::Error> {
        validate::non_empty(dto.name.as_deref(), "Name", true)?;
        validate::username(dto.username.as_deref(), true)?;
        validate::password(dto.password.as_deref(), true)?;

        Ok(Self {
            name: dto.name.unwrap_or_default(),
            username: dto.username.unwrap_or_default(),
            password: dto.password.unwrap_or_default(),
        })
    }
}

/// Returns the validated new account name
pub fn validate_account_name(dto: UpdateAccountDto) -> Result<String, Error> {
    validate::non_empty(dto.name.as_deref(), "Name", true)?;

    Ok(dto.name.unwrap_or_default())
}

/// Service for shared household accounts.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the account response listing the usernames of every credential
    pub async fn account_dto(&self, account: AccountModel) -> Result<AccountDto, Error> {
        let credentials = CredentialRepository::new(self.db)
            .get_many_by_account_id(account.id)
            .await?;

        Ok(AccountDto {
            id: account.id,
            name: account.name,
            credentials: credentials.into_iter().map(|c| c.username).collect(),
        })
    }

    /// Gets the account of a signed in session
    ///
    /// The session consistency check runs before every handler, so a missing account means it
    /// was deleted mid-request.
    pub async fn get_account(&self, account_id: i32) -> Result<AccountDto, Error> {
        let account = AccountRepository::new(self.db)
            .get(account_id)
            .await?
            .ok_or(AuthError::AccountNotInDatabase(account_id))?;

        self.account_dto(account).await
    }

    /// Returns the account & username of the session, or `None` for anonymous sessions
    pub async fn session_info(
        &self,
        identity: Option<SessionIdentity>,
    ) -> Result<Option<(AccountDto, String)>, Error> {
        let Some(identity) = identity else {
            return Ok(None);
        };

        let Some(credential) = CredentialRepository::new(self.db)
            .get(identity.credential_id)
            .await?
        else {
            return Ok(None);
        };

        let account = self.get_account(identity.account_id).await?;

        Ok(Some((account, credential.username)))
    }

    /// Finds the credential matching a username (ignoring case) and password
    pub async fn sign_in(&self, sign_in: SignIn) -> Result<(AccountDto, CredentialModel), Error> {
        let credential = CredentialRepository::new(self.db)
            .find_by_username(&sign_in.username)
            .await?
            .filter(|credential| credential.password == sign_in.password)
            .ok_or(AuthError::InvalidLogin)?;

        let account = self.get_account(credential.account_id).await?;

        Ok((account, credential))
    }

    /// Creates an account together with its first credential
    ///
    /// The username check and the insert are not atomic, two concurrent sign ups with the same
    /// username can both succeed.
    pub async fn sign_up(&self, sign_up: SignUp) -> Result<(AccountDto, CredentialModel), Error> {
        ensure_username_available(self.db, &sign_up.username, None).await?;

        let txn = self.db.begin().await?;

        let account = AccountRepository::new(&txn).create(sign_up.name).await?;
        let credential = CredentialRepository::new(&txn)
            .create(account.id, sign_up.username, sign_up.password)
            .await?;

        txn.commit().await?;

        let account = self.account_dto(account).await?;

        Ok((account, credential))
    }

    pub async fn rename(&self, account_id: i32, name: String) -> Result<AccountDto, Error> {
        let account = AccountRepository::new(self.db)
            .update_name(account_id, name)
            .await?
            .ok_or(AuthError::AccountNotInDatabase(account_id))?;

        self.account_dto(account).await
    }

    /// Deletes an account along with its credentials and every record it owns
    pub async fn delete(&self, account_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        CredentialRepository::new(&txn)
            .delete_by_account_id(account_id)
            .await?;
        EntryRepository::new(&txn)
            .delete_by_owner_id(account_id)
            .await?;
        InsuranceCardRepository::new(&txn)
            .delete_by_owner_id(account_id)
            .await?;
        MedicalContactRepository::new(&txn)
            .delete_by_owner_id(account_id)
            .await?;
        MedicationRepository::new(&txn)
            .delete_by_owner_id(account_id)
            .await?;
        AccountRepository::new(&txn).delete(account_id).await?;

        txn.commit().await?;

        Ok(())
    }
}
