//! Request field validators.
//!
//! A validator checks a field when it is required or present. A required field which is
//! missing fails the same way as a present field in the wrong format. Every failure is a
//! [`ValidationError`] carrying a field-specific message.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::{
    model::entry::{Condition, EntryType},
    server::{error::validation::ValidationError, util::time::parse_date},
};

// First character is not a line break and some character is not whitespace
static NON_EMPTY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?:\S|[^\n\r\x{2028}\x{2029}].*\S)").expect("non-empty regex is valid")
});
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username regex is valid"));
static PASSWORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+$").expect("password regex is valid"));
// ASCII digits and whitespace only
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+[0-9]{1,2}[\t\n\x0B\x0C\r ])?\(?[0-9]{3}\)?[\t\n\x0B\x0C\r .-][0-9]{3}[\t\n\x0B\x0C\r .-][0-9]{4}$")
        .expect("phone regex is valid")
});
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-(1[0-2]|0[1-9])-(3[01]|[12][0-9]|0[1-9])$").expect("date regex is valid")
});

pub const MIN_SCALE: i32 = 1;
pub const MAX_SCALE: i32 = 5;

/// Checks a field against a regex when it is required or present
fn validate_against_regex(
    field: Option<&str>,
    required: bool,
    regex: &Regex,
    error: &str,
) -> Result<(), ValidationError> {
    match field {
        None if required => Err(ValidationError::new(error)),
        Some(value) if !regex.is_match(value) => Err(ValidationError::new(error)),
        _ => Ok(()),
    }
}

/// Field must contain a non-whitespace character and must not start with a line break
pub fn non_empty(field: Option<&str>, name: &str, required: bool) -> Result<(), ValidationError> {
    validate_against_regex(
        field,
        required,
        &NON_EMPTY_REGEX,
        &format!("{} must be a nonempty string.", name),
    )
}

/// Field must be a single word of letters, digits or underscores
///
/// Used for usernames and the names of medical contacts.
pub fn alphanumeric(field: Option<&str>, name: &str, required: bool) -> Result<(), ValidationError> {
    validate_against_regex(
        field,
        required,
        &USERNAME_REGEX,
        &format!("{} must be a nonempty alphanumeric string.", name),
    )
}

pub fn username(field: Option<&str>, required: bool) -> Result<(), ValidationError> {
    alphanumeric(field, "Username", required)
}

pub fn password(field: Option<&str>, required: bool) -> Result<(), ValidationError> {
    validate_against_regex(
        field,
        required,
        &PASSWORD_REGEX,
        "Password must not contain whitespace characters.",
    )
}

pub fn phone_number(field: Option<&str>, required: bool) -> Result<(), ValidationError> {
    validate_against_regex(
        field,
        required,
        &PHONE_REGEX,
        "Phone number must be in a valid format (e.g. 123-456-7890).",
    )
}

/// Field must be a `YYYY-MM-DD` date which exists on the calendar
pub fn date(field: Option<&str>, required: bool) -> Result<Option<NaiveDate>, ValidationError> {
    const ERROR: &str = "Date must be in format YYYY-MM-DD.";

    validate_against_regex(field, required, &DATE_REGEX, ERROR)?;

    field
        .map(|value| parse_date(value).ok_or_else(|| ValidationError::new(ERROR)))
        .transpose()
}

pub fn entry_type(field: Option<&str>, required: bool) -> Result<Option<EntryType>, ValidationError> {
    parse_enum(
        field,
        required,
        "Entry type must be either \"appointment\", \"medication\", or \"other\".",
    )
}

pub fn condition(field: Option<&str>, required: bool) -> Result<Option<Condition>, ValidationError> {
    parse_enum(
        field,
        required,
        "Condition must be either \"pain\", \"cognition\", or \"happiness\".",
    )
}

/// Scale must be an integer between [`MIN_SCALE`] and [`MAX_SCALE`] inclusive
pub fn scale(field: Option<i32>, required: bool) -> Result<Option<i32>, ValidationError> {
    match field {
        None if required => Err(ValidationError::new(
            "Scale must be a valid integer between 1 and 5.",
        )),
        Some(value) if !(MIN_SCALE..=MAX_SCALE).contains(&value) => Err(ValidationError::new(
            "Scale must be a valid integer between 1 and 5.",
        )),
        _ => Ok(field),
    }
}

fn parse_enum<T: std::str::FromStr>(
    field: Option<&str>,
    required: bool,
    error: &str,
) -> Result<Option<T>, ValidationError> {
    match field {
        None if required => Err(ValidationError::new(error)),
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ValidationError::new(error)),
    }
}

/// Drops present but blank values so a partial update keeps the stored value
pub fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}
