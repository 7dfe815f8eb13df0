//! Input validation
//!
//! Pure functions from raw console input to a typed value or a rejection.
//! Nothing here touches the store; callers pass in the counts or records a
//! rule needs.

use crate::errors::{BiblioError, Result};
use crate::model::{AuthorType, AuthoringEntity, TeamMembership};

/// Maximum length of the authoring entity name column
pub const NAME_MAX: usize = 80;
/// Maximum length of the authoring entity email column
pub const EMAIL_MAX: usize = 30;
pub const HEAD_WRITER_MAX: usize = 80;
pub const ISBN_MAX: usize = 17;
pub const TITLE_MAX: usize = 80;

/// A free-text field of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextField {
    /// Label shown in prompts and error messages
    pub label: &'static str,

    /// Maximum length in characters, if bounded
    pub max_len: Option<usize>,
}

impl TextField {
    pub const fn bounded(label: &'static str, max_len: usize) -> Self {
        Self {
            label,
            max_len: Some(max_len),
        }
    }

    pub const fn unbounded(label: &'static str) -> Self {
        Self {
            label,
            max_len: None,
        }
    }

    /// Validate raw input for this field; see [`validate_text`]
    pub fn validate(&self, raw: &str) -> Result<String> {
        validate_text(self.label, raw, self.max_len)
    }
}

// Publisher columns carry no length cap, only non-emptiness
pub const PUBLISHER_NAME: TextField = TextField::unbounded("Publisher name");
pub const PUBLISHER_EMAIL: TextField = TextField::unbounded("Publisher email");
pub const PUBLISHER_PHONE: TextField = TextField::unbounded("Publisher phone");

pub const AUTHOR_NAME: TextField = TextField::bounded("Name", NAME_MAX);
pub const AUTHOR_EMAIL: TextField = TextField::bounded("Email", EMAIL_MAX);
pub const HEAD_WRITER: TextField = TextField::bounded("Head writer", HEAD_WRITER_MAX);
pub const INDIVIDUAL_EMAIL: TextField = TextField::unbounded("Individual email");
pub const TEAM_EMAIL: TextField = TextField::unbounded("Team email");

pub const ISBN: TextField = TextField::bounded("ISBN", ISBN_MAX);
pub const TITLE: TextField = TextField::bounded("Title", TITLE_MAX);

/// Numeric field labels
pub const YEAR_FORMED: &str = "Year formed";
pub const YEAR_PUBLISHED: &str = "Year published";

/// True when the input asks to cancel the enclosing operation
pub fn is_cancel(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("q")
}

/// Validate a required text field
///
/// The value is trimmed; the trimmed value must be non-empty and, when
/// `max_len` is set, at most `max_len` characters long.
///
/// # Errors
///
/// `EmptyField` for blank input, `FieldTooLong` past the bound.
pub fn validate_text(field: &str, raw: &str, max_len: Option<usize>) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(BiblioError::EmptyField {
            field: field.to_string(),
        });
    }

    if let Some(max) = max_len {
        let actual = value.chars().count();
        if actual > max {
            return Err(BiblioError::FieldTooLong {
                field: field.to_string(),
                max,
                actual,
            });
        }
    }

    Ok(value.to_string())
}

/// Validate an integer year
///
/// # Errors
///
/// `EmptyField` for blank input, `NotANumber` if it does not parse as `i32`.
pub fn validate_year(field: &str, raw: &str) -> Result<i32> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(BiblioError::EmptyField {
            field: field.to_string(),
        });
    }

    value.parse::<i32>().map_err(|_| BiblioError::NotANumber {
        field: field.to_string(),
        input: value.to_string(),
    })
}

/// Validate a 1-based list selection against a list of `len` items
///
/// Returns the zero-based index of the chosen item.
///
/// # Errors
///
/// `NotANumber` for non-numeric input, `SelectionOutOfRange` outside `[1, len]`.
pub fn validate_selection(raw: &str, len: usize) -> Result<usize> {
    let value = raw.trim();
    let choice = value.parse::<i64>().map_err(|_| BiblioError::NotANumber {
        field: "Selection".to_string(),
        input: value.to_string(),
    })?;

    if choice < 1 || choice as u64 > len as u64 {
        return Err(BiblioError::SelectionOutOfRange { choice, max: len });
    }

    Ok((choice - 1) as usize)
}

/// A Book needs at least one Publisher and one Authoring Entity to point at
///
/// # Errors
///
/// `MissingPrerequisite` naming the first missing kind, publishers first.
pub fn check_book_prerequisites(publisher_count: usize, author_count: usize) -> Result<()> {
    if publisher_count == 0 {
        return Err(BiblioError::MissingPrerequisite {
            entity: "Book".to_string(),
            required: "Publisher".to_string(),
        });
    }
    if author_count == 0 {
        return Err(BiblioError::MissingPrerequisite {
            entity: "Book".to_string(),
            required: "Authoring Entity".to_string(),
        });
    }
    Ok(())
}

/// Check that `member` may be added to `team`
///
/// # Errors
///
/// `VariantMismatch` if `team` is not an Ad Hoc Team or `member` is not an
/// Individual Author, `AlreadyExists` if the pair is already in `existing`.
pub fn validate_membership(
    team: &AuthoringEntity,
    member: &AuthoringEntity,
    existing: &[TeamMembership],
) -> Result<TeamMembership> {
    require_variant(team, AuthorType::AdHocTeam)?;
    require_variant(member, AuthorType::IndividualAuthor)?;

    let membership = TeamMembership::new(team.name.clone(), member.name.clone());
    if existing.contains(&membership) {
        return Err(BiblioError::AlreadyExists {
            entity_kind: "TeamMembership".to_string(),
            key: format!("{} in {}", member.name, team.name),
        });
    }

    Ok(membership)
}

/// Fail with `VariantMismatch` unless `author` is of `expected` type
pub fn require_variant(author: &AuthoringEntity, expected: AuthorType) -> Result<()> {
    let actual = author.author_type();
    if actual != expected {
        return Err(BiblioError::VariantMismatch {
            key: author.name.clone(),
            expected: expected.label().to_string(),
            actual: actual.label().to_string(),
        });
    }
    Ok(())
}
