//! Field-level validation shared by create and patch payloads.

use ::url::Url;

use crate::error::ProfileError;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 120;
pub const EMAIL_MAX_CHARS: usize = 255;
pub const HEADLINE_MAX_CHARS: usize = 255;
pub const URL_MAX_CHARS: usize = 255;

pub(crate) fn full_name(raw: &str) -> Result<String, ProfileError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(ProfileError::InvalidName {
            len,
            min: NAME_MIN_CHARS,
            max: NAME_MAX_CHARS,
        });
    }
    Ok(trimmed.to_string())
}

pub(crate) fn email(raw: &str) -> Result<String, ProfileError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() > EMAIL_MAX_CHARS {
        return Err(ProfileError::FieldTooLong {
            field: "email",
            max: EMAIL_MAX_CHARS,
        });
    }
    let invalid = || ProfileError::InvalidEmail(trimmed.to_string());

    let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || trimmed.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    // Require a dotted domain with non-empty labels.
    if domain.split('.').count() < 2 || domain.split('.').any(str::is_empty) {
        return Err(invalid());
    }
    Ok(trimmed.to_string())
}

pub(crate) fn headline(raw: Option<String>) -> Result<Option<String>, ProfileError> {
    match raw {
        Some(text) if text.chars().count() > HEADLINE_MAX_CHARS => {
            Err(ProfileError::FieldTooLong {
                field: "headline",
                max: HEADLINE_MAX_CHARS,
            })
        }
        other => Ok(other),
    }
}

pub(crate) fn url(field: &'static str, raw: Option<String>) -> Result<Option<String>, ProfileError> {
    let Some(value) = raw else {
        return Ok(None);
    };
    let value = value.trim().to_string();
    if value.chars().count() > URL_MAX_CHARS {
        return Err(ProfileError::FieldTooLong {
            field,
            max: URL_MAX_CHARS,
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ProfileError::InvalidUrl { field, value });
    }
    let valid = match Url::parse(&value) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    };
    if !valid {
        return Err(ProfileError::InvalidUrl { field, value });
    }
    Ok(Some(value))
}
