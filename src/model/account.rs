use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A shared household account as shown to the client
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountDto {
    pub id: i32,
    pub name: String,
    /// Usernames of every credential that can sign in to this account
    pub credentials: Vec<String>,
}

/// Response for `GET /api/accounts/session`
///
/// Both `account` and `username` are null when nobody is signed in.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionInfoDto {
    pub message: String,
    pub account: Option<AccountDto>,
    pub username: Option<String>,
}

/// Response for operations which (re-)establish the signed in identity
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountSessionDto {
    pub message: String,
    pub account: AccountDto,
    pub username: String,
}

/// Response for account & credential mutations
///
/// `account` is null when the operation signed the caller out.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountMessageDto {
    pub message: String,
    pub account: Option<AccountDto>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SignInDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SignUpDto {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateAccountDto {
    pub name: Option<String>,
}

/// Body for adding a credential or updating the signed in credential
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CredentialDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteCredentialDto {
    pub username: Option<String>,
}
