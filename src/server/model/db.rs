//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate so that services and
//! controllers don't need to spell out the entity module paths.

/// A shared household account. Owns credentials and every medical resource.
pub type AccountModel = entity::account::Model;

/// A username & password pair which signs in to an account.
///
/// # Fields (from `entity::credential::Model`)
/// - `id` - Primary key
/// - `account_id` - The account this credential signs in to
/// - `username` - Unique case-insensitively across all accounts
/// - `password` - Stored as provided
/// - `date_joined` - Timestamp when the credential was created
pub type CredentialModel = entity::credential::Model;

/// A medical log entry.
///
/// `entry_type` & `condition` are stored as their lowercase names, see
/// [`EntryType`](crate::model::entry::EntryType) & [`Condition`](crate::model::entry::Condition).
pub type EntryModel = entity::entry::Model;

pub type MedicalContactModel = entity::medical_contact::Model;

pub type MedicationModel = entity::medication::Model;

pub type InsuranceCardModel = entity::insurance_card::Model;
