//! Text rendering of catalogue entities for listings and info screens

use biblio_core::{AuthorKind, AuthoringEntity, Book, Publisher};

/// Listing line for a Publisher
pub fn publisher_label(publisher: &Publisher) -> String {
    publisher.name.clone()
}

/// Listing line for a Book: title padded to a column, then ISBN
pub fn book_label(book: &Book) -> String {
    format!("Title: {:<22} ISBN: {}", book.title, book.isbn)
}

/// Listing line for an Authoring Entity, tagged with its variant
pub fn author_label(author: &AuthoringEntity) -> String {
    format!("{} ({})", author.name, author.author_type().label())
}

pub fn publisher_info(publisher: &Publisher) -> Vec<String> {
    vec![
        "******** PUBLISHER INFO ********".to_string(),
        format!("Publisher Name : {}", publisher.name),
        format!("Publisher Email: {}", publisher.email),
        format!("Publisher Phone: {}", publisher.phone),
    ]
}

pub fn book_info(book: &Book) -> Vec<String> {
    vec![
        "******** BOOK INFO ********".to_string(),
        format!("Book Title:     {}", book.title),
        format!("Book Author:    {}", book.author_name),
        format!("Book Year:      {}", book.year_published),
        format!("Book Publisher: {}", book.publisher_name),
        format!("Book ISBN:      {}", book.isbn),
    ]
}

/// Info screen for a Writing Group; other variants render nothing
pub fn writing_group_info(author: &AuthoringEntity) -> Vec<String> {
    let Some(group) = author.as_writing_group() else {
        return Vec::new();
    };
    vec![
        "******** WRITING GROUP INFO ********".to_string(),
        format!("Writing Group Name:        {}", author.name),
        format!("Writing Group Email:       {}", author.email),
        format!("Writing Group Head Writer: {}", group.head_writer),
        format!("Writing Group Year Formed: {}", group.year_formed),
    ]
}

/// Info screen for any Authoring Entity
///
/// `works` are the books it authored; `related` are its team members (for an
/// Ad Hoc Team) or the teams it belongs to (for an Individual Author).
pub fn author_info(
    author: &AuthoringEntity,
    works: &[Book],
    related: &[AuthoringEntity],
) -> Vec<String> {
    let mut lines = vec![
        "******** AUTHORING ENTITY INFO ********".to_string(),
        format!("Name:  {}", author.name),
        format!("Email: {}", author.email),
        format!("Type:  {}", author.author_type().label()),
    ];

    let related_heading = match &author.kind {
        AuthorKind::WritingGroup(group) => {
            lines.push(format!("Head Writer: {}", group.head_writer));
            lines.push(format!("Year Formed: {}", group.year_formed));
            None
        }
        AuthorKind::IndividualAuthor(individual) => {
            lines.push(format!("Individual Email: {}", individual.individual_email));
            Some("Member of")
        }
        AuthorKind::AdHocTeam(team) => {
            lines.push(format!("Team Email: {}", team.team_email));
            Some("Members")
        }
    };

    if let Some(heading) = related_heading {
        lines.push(format!("{}:", heading));
        if related.is_empty() {
            lines.push("  (none)".to_string());
        }
        for other in related {
            lines.push(format!("  - {}", other.name));
        }
    }

    lines.push("Works:".to_string());
    if works.is_empty() {
        lines.push("  (none)".to_string());
    }
    for book in works {
        lines.push(format!(
            "  - {} ({}, {})",
            book.title, book.isbn, book.year_published
        ));
    }

    lines
}
