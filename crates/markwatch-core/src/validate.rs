//! Client-side field validation for the sign-in and password pages.

use std::sync::LazyLock;

use regex::Regex;

/// A form field that failed validation. `Display` is the inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Email is required.")]
    EmailRequired,
    #[error("Enter a valid email address.")]
    EmailInvalid,
    #[error("Password is required.")]
    PasswordRequired,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Password does not meet all requirements")]
    RequirementsUnmet,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter a file name to search.")]
    SearchTermRequired,
    #[error("Please select at least one file to delete.")]
    NothingChecked,
}

pub const MIN_SIGN_IN_PASSWORD: usize = 6;
pub const MIN_NEW_PASSWORD: usize = 8;

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

#[allow(clippy::expect_used)]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Per-field errors of the sign-in form. Both fields are checked so
/// both messages can show at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignInErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl SignInErrors {
    /// Validate trimmed `email` and `password`.
    #[must_use]
    pub fn check(email: &str, password: &str) -> Self {
        let email = email.trim();
        let password = password.trim();
        let email = if email.is_empty() {
            Some(FieldError::EmailRequired)
        } else if !is_valid_email(email) {
            Some(FieldError::EmailInvalid)
        } else {
            None
        };
        let password = if password.is_empty() {
            Some(FieldError::PasswordRequired)
        } else if password.chars().count() < MIN_SIGN_IN_PASSWORD {
            Some(FieldError::PasswordTooShort)
        } else {
            None
        };
        Self { email, password }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Password strength band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak password",
            Self::Medium => "Medium strength",
            Self::Strong => "Strong password",
        }
    }
}

/// Which new-password requirements are met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PasswordChecks {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordChecks {
    #[must_use]
    pub fn of(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_NEW_PASSWORD,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    /// `(label, met)` for each requirement, in checklist order.
    #[must_use]
    pub const fn items(&self) -> [(&'static str, bool); 5] {
        [
            ("At least 8 characters", self.length),
            ("One uppercase letter", self.uppercase),
            ("One lowercase letter", self.lowercase),
            ("One number", self.number),
            ("One special character", self.special),
        ]
    }

    #[must_use]
    pub fn met_count(&self) -> usize {
        self.items().iter().filter(|(_, met)| *met).count()
    }

    #[must_use]
    pub fn all_met(&self) -> bool {
        self.met_count() == 5
    }

    #[must_use]
    pub fn strength(&self) -> Strength {
        match self.met_count() {
            0..=2 => Strength::Weak,
            3 | 4 => Strength::Medium,
            _ => Strength::Strong,
        }
    }
}

/// Whether the proceed button of the password page is enabled.
#[must_use]
pub fn can_proceed(password: &str, confirm: &str) -> bool {
    PasswordChecks::of(password).all_met() && !password.is_empty() && password == confirm
}

/// Submission check of the password page.
///
/// # Errors
///
/// [`FieldError::RequirementsUnmet`] is reported before
/// [`FieldError::PasswordMismatch`].
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    if !PasswordChecks::of(password).all_met() {
        return Err(FieldError::RequirementsUnmet);
    }
    if password != confirm {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}

/// Live message under the confirm field: shown only once something
/// has been typed there and it differs.
#[must_use]
pub fn confirm_hint(password: &str, confirm: &str) -> Option<FieldError> {
    (!confirm.is_empty() && password != confirm).then_some(FieldError::PasswordMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_reports_both_fields() {
        let errors = SignInErrors::check("  ", "");
        assert_eq!(errors.email, Some(FieldError::EmailRequired));
        assert_eq!(errors.password, Some(FieldError::PasswordRequired));
        assert!(!errors.is_valid());
    }

    #[test]
    fn sign_in_format_and_length() {
        let errors = SignInErrors::check("user@host", "12345");
        assert_eq!(errors.email, Some(FieldError::EmailInvalid));
        assert_eq!(errors.password, Some(FieldError::PasswordTooShort));
        assert!(SignInErrors::check(" a@b.co ", "123456").is_valid());
    }

    #[test]
    fn email_rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@c.de"));
        assert!(is_valid_email("victoria.foo@skrine.com"));
    }

    #[test]
    fn strength_bands() {
        assert_eq!(PasswordChecks::of("abc").strength(), Strength::Weak);
        assert_eq!(PasswordChecks::of("abcdefgH").strength(), Strength::Medium);
        assert_eq!(PasswordChecks::of("abcdefH1").strength(), Strength::Medium);
        assert_eq!(PasswordChecks::of("abcdeH1!").strength(), Strength::Strong);
    }

    #[test]
    fn special_set_is_limited() {
        assert!(!PasswordChecks::of("_").special);
        assert!(PasswordChecks::of("\"").special);
    }

    #[test]
    fn proceed_requires_match_and_requirements() {
        assert!(can_proceed("abcdeH1!", "abcdeH1!"));
        assert!(!can_proceed("abcdeH1!", "abcdeH1?"));
        assert!(!can_proceed("abc", "abc"));
    }

    #[test]
    fn requirements_checked_before_match() {
        assert_eq!(
            validate_new_password("abc", "xyz"),
            Err(FieldError::RequirementsUnmet)
        );
        assert_eq!(
            validate_new_password("abcdeH1!", "xyz"),
            Err(FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn confirm_hint_waits_for_input() {
        assert_eq!(confirm_hint("abc", ""), None);
        assert_eq!(confirm_hint("abc", "ab"), Some(FieldError::PasswordMismatch));
        assert_eq!(confirm_hint("abc", "abc"), None);
    }
}
