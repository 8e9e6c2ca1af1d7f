use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::ValidationState;
use crate::{EnrollmentSubmission, Field};

/// Validation failure of an enrollment submission.
/// The display text is what the visitor gets to see.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum EnrollmentError {
    #[error("Please enter a valid parent name")]
    ParentName,
    #[error("Please enter a valid child name")]
    ChildName,
    #[error("Please select your child's age")]
    ChildAge,
    #[error("Please enter a valid phone number")]
    Phone,
}

impl EnrollmentError {
    /// The input the visitor has to correct.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::ParentName => Field::ParentName,
            Self::ChildName => Field::ChildName,
            Self::ChildAge => Field::ChildAge,
            Self::Phone => Field::Phone,
        }
    }
}

const NAME_TRIMMED_MIN_LEN: usize = 2;

/// Whitespace as browsers define it for `\s` and `String.prototype.trim`.
/// Differs from Rust's set: includes U+FEFF, excludes U+0085.
const BROWSER_WHITESPACE: &[char] = &[
    '\t', '\n', '\u{b}', '\u{c}', '\r', ' ', '\u{a0}', '\u{1680}', '\u{2000}', '\u{2001}',
    '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}',
    '\u{2009}', '\u{200a}', '\u{2028}', '\u{2029}', '\u{202f}', '\u{205f}', '\u{3000}',
    '\u{feff}',
];

// optional leading '+', then at least 10 digits, browser whitespace or hyphens in any mix
#[allow(clippy::unwrap_used)]
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[+]?[0-9\t\n\x0B\x0C\r \u{a0}\u{1680}\u{2000}-\u{200a}\u{2028}\u{2029}\u{202f}\u{205f}\u{3000}\u{feff}-]{10,}$",
    )
    .unwrap()
});

#[derive(Default, Debug)]
pub struct EnrollmentValidation {
    pub result: ValidationState<EnrollmentError>,
}

impl EnrollmentValidation {
    pub fn check(&mut self, submission: &EnrollmentSubmission) {
        self.result = Self::validate(submission).into();
    }

    /// Input flagged by the last check, if it failed.
    #[must_use]
    pub const fn invalid_field(&self) -> Option<Field> {
        match self.result.error() {
            Some(e) => Some(e.field()),
            None => None,
        }
    }

    /// Runs the rules in order and reports the first one that fails.
    pub fn validate(submission: &EnrollmentSubmission) -> Result<(), EnrollmentError> {
        if !Self::check_name(&submission.parent_name) {
            Err(EnrollmentError::ParentName)
        } else if !Self::check_name(&submission.child_name) {
            Err(EnrollmentError::ChildName)
        } else if submission.child_age.is_empty() {
            Err(EnrollmentError::ChildAge)
        } else if !Self::check_phone(&submission.phone) {
            Err(EnrollmentError::Phone)
        } else {
            Ok(())
        }
    }

    fn check_name(v: &str) -> bool {
        v.trim_matches(BROWSER_WHITESPACE).chars().count() >= NAME_TRIMMED_MIN_LEN
    }

    fn check_phone(v: &str) -> bool {
        PHONE_PATTERN.is_match(v)
    }
}
