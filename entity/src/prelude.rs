pub use super::account::Entity as Account;
pub use super::credential::Entity as Credential;
pub use super::entry::Entity as Entry;
pub use super::insurance_card::Entity as InsuranceCard;
pub use super::medical_contact::Entity as MedicalContact;
pub use super::medication::Entity as Medication;
