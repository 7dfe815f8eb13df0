use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminator tag of an Authoring Entity
///
/// The string form is what the store writes into its discriminator column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorType {
    WritingGroup,
    IndividualAuthor,
    AdHocTeam,
}

impl AuthorType {
    /// All variants in menu order
    pub const ALL: [AuthorType; 3] = [
        AuthorType::WritingGroup,
        AuthorType::IndividualAuthor,
        AuthorType::AdHocTeam,
    ];

    /// Stable discriminator value
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorType::WritingGroup => "WritingGroup",
            AuthorType::IndividualAuthor => "IndividualAuthor",
            AuthorType::AdHocTeam => "AdHocTeam",
        }
    }

    /// Human-readable label used in menus and messages
    pub fn label(&self) -> &'static str {
        match self {
            AuthorType::WritingGroup => "Writing Group",
            AuthorType::IndividualAuthor => "Individual Author",
            AuthorType::AdHocTeam => "Ad Hoc Team",
        }
    }
}

impl fmt::Display for AuthorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WritingGroup" => Ok(AuthorType::WritingGroup),
            "IndividualAuthor" => Ok(AuthorType::IndividualAuthor),
            "AdHocTeam" => Ok(AuthorType::AdHocTeam),
            other => Err(format!("unknown authoring entity type: {}", other)),
        }
    }
}

/// Payload of a Writing Group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingGroup {
    /// Name of the group's head writer (at most 80 characters)
    pub head_writer: String,

    /// Year the group was formed
    pub year_formed: i32,
}

/// Payload of an Individual Author
///
/// Team memberships are not stored here; they are derived from
/// [`TeamMembership`](super::TeamMembership) rows owned by the teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualAuthor {
    /// The author's personal email
    pub individual_email: String,
}

/// Payload of an Ad Hoc Team
///
/// The member set lives in [`TeamMembership`](super::TeamMembership) rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdHocTeam {
    /// The team's shared email
    pub team_email: String,
}

/// Variant-specific part of an Authoring Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthorKind {
    WritingGroup(WritingGroup),
    IndividualAuthor(IndividualAuthor),
    AdHocTeam(AdHocTeam),
}

impl AuthorKind {
    /// Discriminator of this variant
    pub fn author_type(&self) -> AuthorType {
        match self {
            AuthorKind::WritingGroup(_) => AuthorType::WritingGroup,
            AuthorKind::IndividualAuthor(_) => AuthorType::IndividualAuthor,
            AuthorKind::AdHocTeam(_) => AuthorType::AdHocTeam,
        }
    }
}

/// AuthoringEntity - "who wrote a book"
///
/// The shared envelope (`name`, `email`) is what every caller sees; the
/// variant payload sits in `kind`. Names share one identity space across all
/// three variants. The list of authored books is not stored: see
/// `queries::catalog_queries::books_by_author`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoringEntity {
    /// Unique name (identity, at most 80 characters)
    pub name: String,

    /// Contact email (at most 30 characters)
    pub email: String,

    /// Variant payload
    pub kind: AuthorKind,
}

impl AuthoringEntity {
    /// Create a Writing Group
    pub fn writing_group(name: String, email: String, head_writer: String, year_formed: i32) -> Self {
        Self {
            name,
            email,
            kind: AuthorKind::WritingGroup(WritingGroup {
                head_writer,
                year_formed,
            }),
        }
    }

    /// Create an Individual Author
    pub fn individual_author(name: String, email: String, individual_email: String) -> Self {
        Self {
            name,
            email,
            kind: AuthorKind::IndividualAuthor(IndividualAuthor { individual_email }),
        }
    }

    /// Create an Ad Hoc Team
    pub fn ad_hoc_team(name: String, email: String, team_email: String) -> Self {
        Self {
            name,
            email,
            kind: AuthorKind::AdHocTeam(AdHocTeam { team_email }),
        }
    }

    /// Discriminator of this entity
    pub fn author_type(&self) -> AuthorType {
        self.kind.author_type()
    }

    /// Check the discriminator
    pub fn is_a(&self, author_type: AuthorType) -> bool {
        self.author_type() == author_type
    }

    pub fn as_writing_group(&self) -> Option<&WritingGroup> {
        match &self.kind {
            AuthorKind::WritingGroup(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_individual_author(&self) -> Option<&IndividualAuthor> {
        match &self.kind {
            AuthorKind::IndividualAuthor(author) => Some(author),
            _ => None,
        }
    }

    pub fn as_ad_hoc_team(&self) -> Option<&AdHocTeam> {
        match &self.kind {
            AuthorKind::AdHocTeam(team) => Some(team),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writing_group_envelope() {
        let group = AuthoringEntity::writing_group(
            "Night Owls".to_string(),
            "no@x.com".to_string(),
            "J. Doe".to_string(),
            1999,
        );

        assert_eq!(group.name, "Night Owls");
        assert!(group.is_a(AuthorType::WritingGroup));
        assert_eq!(group.as_writing_group().map(|g| g.year_formed), Some(1999));
        assert!(group.as_individual_author().is_none());
        assert!(group.as_ad_hoc_team().is_none());
    }

    #[test]
    fn test_variants_are_exclusive() {
        let author = AuthoringEntity::individual_author(
            "A. Writer".to_string(),
            "aw@x.com".to_string(),
            "personal@x.com".to_string(),
        );
        let team = AuthoringEntity::ad_hoc_team(
            "The Collective".to_string(),
            "tc@x.com".to_string(),
            "team@x.com".to_string(),
        );

        assert_eq!(author.author_type(), AuthorType::IndividualAuthor);
        assert!(author.as_writing_group().is_none());
        assert_eq!(team.author_type(), AuthorType::AdHocTeam);
        assert_eq!(
            team.as_ad_hoc_team().map(|t| t.team_email.as_str()),
            Some("team@x.com")
        );
    }

    #[test]
    fn test_discriminator_roundtrip() {
        for author_type in AuthorType::ALL {
            assert_eq!(author_type.as_str().parse::<AuthorType>(), Ok(author_type));
        }
        assert!("Ghostwriter".parse::<AuthorType>().is_err());
    }
}
