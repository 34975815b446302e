use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// An email address that passed the syntax check.
///
/// The address is kept behind a [`Secret`] so it does not end up in logs by
/// accident.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    fn is_valid(candidate: &str) -> bool {
        !candidate.starts_with('.') && !candidate.contains("..") && EMAIL_REGEX.is_match(candidate)
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if Self::is_valid(value.expose_secret()) {
            Ok(Self(value))
        } else {
            Err(UserError::InvalidEmail)
        }
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
