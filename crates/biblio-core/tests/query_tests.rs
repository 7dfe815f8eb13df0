#![allow(clippy::unwrap_used, clippy::expect_used)]

use biblio_core::queries;
use biblio_core::AuthorType;

mod common;

fn names(authors: &[biblio_core::AuthoringEntity]) -> Vec<&str> {
    authors.iter().map(|a| a.name.as_str()).collect()
}

#[test]
fn test_listings_keep_insertion_order() {
    let store = common::seeded_store();

    let authors = queries::list_authors(&store).unwrap();
    assert_eq!(
        names(&authors),
        vec!["Night Owls", "A. Writer", "B. Scribe", "The Collective"]
    );
    assert_eq!(queries::list_publishers(&store).unwrap().len(), 1);
    assert_eq!(queries::list_books(&store).unwrap().len(), 1);
}

#[test]
fn test_derived_views_by_variant() {
    let store = common::seeded_store();

    assert_eq!(
        names(&queries::list_writing_groups(&store).unwrap()),
        vec!["Night Owls"]
    );
    assert_eq!(
        names(&queries::list_individual_authors(&store).unwrap()),
        vec!["A. Writer", "B. Scribe"]
    );
    assert_eq!(
        names(&queries::list_ad_hoc_teams(&store).unwrap()),
        vec!["The Collective"]
    );
    assert_eq!(
        queries::list_authors_of_type(&store, AuthorType::IndividualAuthor)
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn test_find_by_identity() {
    let store = common::seeded_store();

    assert_eq!(
        queries::find_publisher(&store, "Ace Books").unwrap(),
        Some(common::ace_books())
    );
    assert_eq!(
        queries::find_author(&store, "Night Owls").unwrap(),
        Some(common::night_owls())
    );
    assert_eq!(
        queries::find_book(&store, "978-0-00-000000-1")
            .unwrap()
            .map(|b| b.title),
        Some("Sample".to_string())
    );
    assert_eq!(queries::find_author(&store, "Nobody").unwrap(), None);
}

#[test]
fn test_works_are_computed() {
    let store = common::seeded_store();

    let works = queries::books_by_author(&store, "Night Owls").unwrap();
    assert_eq!(works.len(), 1);
    assert_eq!(works[0].publisher_name, "Ace Books");

    assert!(queries::books_by_author(&store, "A. Writer")
        .unwrap()
        .is_empty());
    assert_eq!(
        queries::books_by_publisher(&store, "Ace Books")
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_membership_is_navigable_both_ways() {
    let store = common::seeded_store();

    assert_eq!(
        names(&queries::team_members(&store, "The Collective").unwrap()),
        vec!["A. Writer"]
    );
    assert_eq!(
        names(&queries::team_memberships(&store, "A. Writer").unwrap()),
        vec!["The Collective"]
    );
    assert!(queries::team_memberships(&store, "B. Scribe")
        .unwrap()
        .is_empty());
}
