pub mod prelude;

pub mod account;
pub mod credential;
pub mod entry;
pub mod insurance_card;
pub mod medical_contact;
pub mod medication;
