use crate::errors::{BiblioError, Result};
use crate::model::{AuthorKind, AuthorType, AuthoringEntity};

/// Flat, single-table shape of an Authoring Entity
///
/// Every variant column is optional; which ones are populated is governed by
/// `authoring_entity_type`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthorColumns {
    pub name: String,
    pub email: String,
    pub authoring_entity_type: String,
    pub head_writer: Option<String>,
    pub year_formed: Option<i32>,
    pub individual_authors_email: Option<String>,
    pub ad_hoc_teams_email: Option<String>,
}

impl AuthorColumns {
    /// Flatten an entity into its column layout
    pub fn from_author(author: &AuthoringEntity) -> Self {
        let mut columns = Self {
            name: author.name.clone(),
            email: author.email.clone(),
            authoring_entity_type: author.author_type().as_str().to_string(),
            ..Self::default()
        };

        match &author.kind {
            AuthorKind::WritingGroup(group) => {
                columns.head_writer = Some(group.head_writer.clone());
                columns.year_formed = Some(group.year_formed);
            }
            AuthorKind::IndividualAuthor(individual) => {
                columns.individual_authors_email = Some(individual.individual_email.clone());
            }
            AuthorKind::AdHocTeam(team) => {
                columns.ad_hoc_teams_email = Some(team.team_email.clone());
            }
        }

        columns
    }
}

/// Rebuild an Authoring Entity from its columns
///
/// The discriminator must name a known variant, that variant's columns must be
/// present, and every other variant's columns must be absent.
///
/// # Errors
///
/// `CorruptRow` describing the first inconsistency found.
pub fn author_from_columns(columns: AuthorColumns) -> Result<AuthoringEntity> {
    let corrupt = |reason: String| BiblioError::CorruptRow {
        entity_kind: "AuthoringEntity".to_string(),
        key: columns.name.clone(),
        reason,
    };

    let author_type: AuthorType = columns.authoring_entity_type.parse().map_err(corrupt)?;

    let stray = stray_columns(&columns, author_type);
    if !stray.is_empty() {
        return Err(corrupt(format!(
            "{} row has columns of another variant: {}",
            author_type,
            stray.join(", ")
        )));
    }

    let missing = |column: &str| corrupt(format!("{} row is missing {}", author_type, column));

    let kind = match author_type {
        AuthorType::WritingGroup => {
            let head_writer = columns
                .head_writer
                .clone()
                .ok_or_else(|| missing("head_writer"))?;
            let year_formed = columns.year_formed.ok_or_else(|| missing("year_formed"))?;
            AuthorKind::WritingGroup(crate::model::WritingGroup {
                head_writer,
                year_formed,
            })
        }
        AuthorType::IndividualAuthor => {
            let individual_email = columns
                .individual_authors_email
                .clone()
                .ok_or_else(|| missing("individual_authors_email"))?;
            AuthorKind::IndividualAuthor(crate::model::IndividualAuthor { individual_email })
        }
        AuthorType::AdHocTeam => {
            let team_email = columns
                .ad_hoc_teams_email
                .clone()
                .ok_or_else(|| missing("ad_hoc_teams_email"))?;
            AuthorKind::AdHocTeam(crate::model::AdHocTeam { team_email })
        }
    };

    Ok(AuthoringEntity {
        name: columns.name,
        email: columns.email,
        kind,
    })
}

/// Variant columns populated on a row whose discriminator says otherwise
fn stray_columns(columns: &AuthorColumns, author_type: AuthorType) -> Vec<&'static str> {
    let mut stray = Vec::new();
    if author_type != AuthorType::WritingGroup {
        if columns.head_writer.is_some() {
            stray.push("head_writer");
        }
        if columns.year_formed.is_some() {
            stray.push("year_formed");
        }
    }
    if author_type != AuthorType::IndividualAuthor && columns.individual_authors_email.is_some() {
        stray.push("individual_authors_email");
    }
    if author_type != AuthorType::AdHocTeam && columns.ad_hoc_teams_email.is_some() {
        stray.push("ad_hoc_teams_email");
    }
    stray
}

#[cfg(test)]
mod tests {
    use super::*;

    fn night_owls() -> AuthoringEntity {
        AuthoringEntity::writing_group(
            "Night Owls".to_string(),
            "no@x.com".to_string(),
            "J. Doe".to_string(),
            1999,
        )
    }

    #[test]
    fn test_columns_roundtrip_for_every_variant() {
        let authors = vec![
            night_owls(),
            AuthoringEntity::individual_author(
                "A. Writer".to_string(),
                "aw@x.com".to_string(),
                "me@x.com".to_string(),
            ),
            AuthoringEntity::ad_hoc_team(
                "The Collective".to_string(),
                "tc@x.com".to_string(),
                "team@x.com".to_string(),
            ),
        ];

        for author in authors {
            let columns = AuthorColumns::from_author(&author);
            assert_eq!(author_from_columns(columns), Ok(author));
        }
    }

    #[test]
    fn test_unknown_discriminator_is_corrupt() {
        let mut columns = AuthorColumns::from_author(&night_owls());
        columns.authoring_entity_type = "Ghostwriter".to_string();

        let err = author_from_columns(columns).unwrap_err();
        assert!(matches!(err, BiblioError::CorruptRow { .. }));
    }

    #[test]
    fn test_missing_variant_column_is_corrupt() {
        let mut columns = AuthorColumns::from_author(&night_owls());
        columns.year_formed = None;

        let err = author_from_columns(columns).unwrap_err();
        assert!(err.to_string().contains("year_formed"));
    }

    #[test]
    fn test_stray_variant_column_is_corrupt() {
        let mut columns = AuthorColumns::from_author(&night_owls());
        columns.ad_hoc_teams_email = Some("team@x.com".to_string());

        let err = author_from_columns(columns).unwrap_err();
        assert!(err.to_string().contains("ad_hoc_teams_email"));
    }
}
