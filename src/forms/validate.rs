//! Submit-time validation rules.
//!
//! Every function here is pure. The first failing rule wins; errors are never
//! accumulated.

use super::image::{check_image, ImageError, ImageSelection};
use super::strength::{has_digit, has_lower, has_special, has_upper};
use crate::api::models::CreateEventRequest;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const TITLE_MAX: usize = 50;
pub const VENUE_MAX: usize = 150;
pub const ADMIN_PASSWORD_MIN: usize = 6;
pub const STRONG_PASSWORD_MIN: usize = 8;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Name should contain only alphabetic characters and spaces.")]
    AdminName,
    #[error("Name must contain only alphabetic characters.")]
    UserName,
    #[error("Invalid email format.")]
    Email,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters, include uppercase, lowercase, number, and special character.")]
    WeakPassword,
    #[error("Email and password are required.")]
    CredentialsRequired,
    #[error("Title is required and must be under 50 characters.")]
    Title,
    #[error("Venue is required and must be under 150 characters.")]
    Venue,
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid date or time format.")]
    InvalidDateTime,
    #[error("Start date/time must be before end date/time.")]
    DateOrder,
    #[error("Event image is required.")]
    ImageRequired,
    #[error(transparent)]
    Image(#[from] ImageError),
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid regex"));
static ADMIN_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("valid regex"));
static ADMIN_NAME_PARTIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]*$").expect("valid regex"));
static USER_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid regex"));

/// Lowercase and trim an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate an email, returning its normalized form.
pub fn email(raw: &str) -> Result<String, ValidationError> {
    let normalized = normalize_email(raw);
    if EMAIL_RE.is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(ValidationError::Email)
    }
}

/// Admin names: letters and spaces, at least one character.
pub fn admin_name(name: &str) -> Result<(), ValidationError> {
    if ADMIN_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::AdminName)
    }
}

/// Keystroke-time check for the admin name field; an empty value is fine.
pub fn admin_name_partial(name: &str) -> Result<(), ValidationError> {
    if ADMIN_NAME_PARTIAL_RE.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::AdminName)
    }
}

/// User names: letters only, checked after trimming.
pub fn user_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if USER_NAME_RE.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::UserName)
    }
}

pub fn admin_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() >= ADMIN_PASSWORD_MIN {
        Ok(())
    } else {
        Err(ValidationError::PasswordTooShort)
    }
}

/// Length of at least 8 with upper, lower, digit and special characters.
pub fn strong_password(password: &str) -> Result<(), ValidationError> {
    let ok = password.chars().count() >= STRONG_PASSWORD_MIN
        && has_upper(password)
        && has_lower(password)
        && has_digit(password)
        && has_special(password);
    if ok {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

/// Both values are trimmed independently before comparing.
pub fn passwords_match(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password.trim() == confirm.trim() {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM[:SS]` time.
pub fn parse_datetime(date: &str, time: &str) -> Option<NaiveDateTime> {
    let combined = format!("{}T{}", date.trim(), time.trim());
    NaiveDateTime::parse_from_str(&combined, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(&combined, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Both ends must parse and the start must be strictly earlier.
pub fn event_window(
    start_date: &str,
    start_time: &str,
    end_date: &str,
    end_time: &str,
) -> Result<(NaiveDateTime, NaiveDateTime), ValidationError> {
    let start = parse_datetime(start_date, start_time);
    let end = parse_datetime(end_date, end_time);
    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok((start, end)),
        (Some(_), Some(_)) => Err(ValidationError::DateOrder),
        _ => Err(ValidationError::InvalidDateTime),
    }
}

/// Raw field values of the create-event form.
#[derive(Debug, Clone, Copy)]
pub struct EventDraft<'a> {
    pub title: &'a str,
    pub venue: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub start_time: &'a str,
    pub end_time: &'a str,
    pub cost_type: &'a str,
    pub description: &'a str,
    pub image: Option<&'a ImageSelection>,
}

/// A create-event draft that passed every local rule, with text trimmed.
/// The image is still a path: it is read and encoded at send time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEvent {
    pub title: String,
    pub venue: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub cost_type: String,
    pub description: String,
    pub image: ImageSelection,
}

impl ValidEvent {
    /// Build the wire request once the image has been encoded.
    pub fn into_request(self, image: String) -> CreateEventRequest {
        CreateEventRequest {
            title: self.title,
            venue: self.venue,
            start_date: self.start_date,
            end_date: self.end_date,
            start_time: self.start_time,
            end_time: self.end_time,
            cost_type: self.cost_type,
            description: self.description,
            image,
        }
    }
}

pub fn event(draft: &EventDraft<'_>) -> Result<ValidEvent, ValidationError> {
    let title = draft.title.trim();
    if title.is_empty() || title.chars().count() > TITLE_MAX {
        return Err(ValidationError::Title);
    }
    let venue = draft.venue.trim();
    if venue.is_empty() || venue.chars().count() > VENUE_MAX {
        return Err(ValidationError::Venue);
    }
    let cost_type = draft.cost_type.trim();
    let required = [
        draft.start_date,
        draft.end_date,
        draft.start_time,
        draft.end_time,
        cost_type,
    ];
    if required.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    event_window(draft.start_date, draft.start_time, draft.end_date, draft.end_time)?;

    let image = draft.image.ok_or(ValidationError::ImageRequired)?;
    check_image(image.size, &image.mime)?;

    Ok(ValidEvent {
        title: title.to_string(),
        venue: venue.to_string(),
        start_date: draft.start_date.trim().to_string(),
        end_date: draft.end_date.trim().to_string(),
        start_time: draft.start_time.trim().to_string(),
        end_time: draft.end_time.trim().to_string(),
        cost_type: cost_type.to_string(),
        description: draft.description.trim().to_string(),
        image: image.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_email_normalized_and_accepted() {
        assert_eq!(email(" USER@Example.COM ").unwrap(), "user@example.com");
    }

    #[test]
    fn test_email_rejected() {
        let err = email("not-an-email").unwrap_err();
        assert!(matches!(err, ValidationError::Email));
        assert_eq!(err.to_string(), "Invalid email format.");
        assert!(email("a@b").is_err());
        assert!(email("a b@c.d").is_err());
    }

    #[test]
    fn test_admin_password_length() {
        assert!(matches!(
            admin_password("abc12"),
            Err(ValidationError::PasswordTooShort)
        ));
        assert!(admin_password("abc123").is_ok());
    }

    #[test]
    fn test_strong_password() {
        assert!(strong_password("Abcdef1!").is_ok());
        assert!(matches!(
            strong_password("abcdefgh"),
            Err(ValidationError::WeakPassword)
        ));
        assert!(strong_password("Abcde1!").is_err());
        assert!(strong_password("ABCDEF1!").is_err());
    }

    #[test]
    fn test_confirm_trimmed_independently() {
        assert!(passwords_match("Secret1!", "Secret1! ").is_ok());
        assert!(passwords_match("  Secret1!", "Secret1!").is_ok());
        assert!(matches!(
            passwords_match("Secret1!", "Secret2!"),
            Err(ValidationError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_names() {
        assert!(admin_name("Ada Lovelace").is_ok());
        assert!(admin_name("Ada99").is_err());
        assert!(admin_name("").is_err());
        assert!(admin_name_partial("").is_ok());
        assert!(admin_name_partial("Ada L").is_ok());
        assert!(admin_name_partial("Ada_").is_err());

        assert_eq!(user_name(" Ada ").unwrap(), "Ada");
        assert!(matches!(
            user_name("Ada Lovelace"),
            Err(ValidationError::UserName)
        ));
    }

    #[test]
    fn test_event_window_ordering() {
        assert!(matches!(
            event_window("2025-01-10", "10:00", "2025-01-10", "09:00"),
            Err(ValidationError::DateOrder)
        ));
        assert!(event_window("2025-01-10", "09:00", "2025-01-10", "10:00").is_ok());
        assert!(matches!(
            event_window("2025-01-10", "09:00", "2025-01-10", "09:00"),
            Err(ValidationError::DateOrder)
        ));
        assert!(matches!(
            event_window("2025-13-10", "09:00", "2025-01-10", "10:00"),
            Err(ValidationError::InvalidDateTime)
        ));
        assert!(event_window("2025-01-10", "09:00:30", "2025-01-11", "08:00").is_ok());
    }

    fn png(size: u64) -> ImageSelection {
        ImageSelection {
            path: PathBuf::from("poster.png"),
            size,
            mime: "image/png".into(),
        }
    }

    fn draft<'a>(image: Option<&'a ImageSelection>) -> EventDraft<'a> {
        EventDraft {
            title: " RustConf ",
            venue: "Hall A",
            start_date: "2025-01-10",
            end_date: "2025-01-10",
            start_time: "09:00",
            end_time: "10:00",
            cost_type: " Free ",
            description: "",
            image,
        }
    }

    #[test]
    fn test_valid_event_is_trimmed() {
        let image = png(1024);
        let valid = event(&draft(Some(&image))).unwrap();
        assert_eq!(valid.title, "RustConf");
        assert_eq!(valid.cost_type, "Free");
        assert_eq!(valid.image, image);
    }

    #[test]
    fn test_event_rules_short_circuit() {
        let image = png(1024);
        let mut d = draft(Some(&image));
        let long_title = "x".repeat(51);
        d.title = &long_title;
        d.venue = "";
        assert!(matches!(event(&d), Err(ValidationError::Title)));

        let mut d = draft(Some(&image));
        let long_venue = "v".repeat(151);
        d.venue = &long_venue;
        assert!(matches!(event(&d), Err(ValidationError::Venue)));

        let mut d = draft(Some(&image));
        d.end_time = "";
        assert!(matches!(event(&d), Err(ValidationError::MissingFields)));

        let mut d = draft(Some(&image));
        d.start_time = "10:00";
        d.end_time = "09:00";
        assert!(matches!(event(&d), Err(ValidationError::DateOrder)));

        assert!(matches!(
            event(&draft(None)),
            Err(ValidationError::ImageRequired)
        ));

        let big = png(6 * 1024 * 1024);
        let err = event(&draft(Some(&big))).unwrap_err();
        assert_eq!(err.to_string(), "Image must be less than 5MB.");
    }
}
