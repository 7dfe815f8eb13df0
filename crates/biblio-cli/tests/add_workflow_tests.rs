mod common;

use biblio_core::queries;
use biblio_core::{AuthorType, MemoryStore};
use common::*;

#[test]
fn test_add_publisher_commits() {
    let input = script(&["1", "2", "Ace Books", "ace@x.com", "555-0100", "Q"]);
    let (store, out) = run_session(MemoryStore::new(), &input);

    let publishers = queries::list_publishers(&store).unwrap();
    assert_eq!(publishers, vec![ace_books()]);
    assert!(out.contains("******** ADDING PUBLISHER ********"));
    assert!(out.contains("Successful transaction, committing to database."));
    assert!(out.contains("Exiting application."));
}

#[test]
fn test_add_writing_group_commits() {
    let input = script(&["1", "1", "1", "Night Owls", "no@x.com", "J. Doe", "1999", "Q"]);
    let (store, _) = run_session(MemoryStore::new(), &input);

    let groups = queries::list_writing_groups(&store).unwrap();
    assert_eq!(groups, vec![night_owls()]);
}

#[test]
fn test_add_individual_author_commits() {
    let input = script(&["1", "1", "2", "A. Writer", "aw@x.com", "personal@x.com", "Q"]);
    let (store, _) = run_session(MemoryStore::new(), &input);

    let author = queries::find_author(&store, "A. Writer").unwrap().unwrap();
    assert!(author.is_a(AuthorType::IndividualAuthor));
    assert_eq!(
        author.as_individual_author().map(|a| a.individual_email.as_str()),
        Some("personal@x.com")
    );
}

#[test]
fn test_book_requires_publisher_before_any_prompt() {
    let input = script(&["1", "3", "Q"]);
    let (store, out) = run_session(MemoryStore::new(), &input);

    assert!(queries::list_books(&store).unwrap().is_empty());
    assert!(out.contains("Book requires at least one Publisher"));
    assert!(out.contains("Please ensure at least one publisher and one author exist"));
    assert!(!out.contains("ISBN"));
    assert!(out.contains("Transaction failed (or cancelled): precondition not met"));
}

#[test]
fn test_book_requires_author() {
    let mut store = MemoryStore::new();
    seed(&mut store, vec![ace_books().into()]);

    let (_, out) = run_session(store, &script(&["1", "3", "Q"]));
    assert!(out.contains("Book requires at least one Authoring Entity"));
    assert!(!out.contains("AVAILABLE PUBLISHERS"));
}

#[test]
fn test_add_book_links_selected_author_and_publisher() {
    let input = script(&["1", "3", "1", "1", "978-0-00-000000-1", "2020", "Sample", "Q"]);
    let (store, out) = run_session(book_ready_store(), &input);

    let books = queries::books_by_author(&store, "Night Owls").unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].isbn, "978-0-00-000000-1");
    assert_eq!(books[0].publisher_name, "Ace Books");
    assert_eq!(books[0].year_published, 2020);
    assert!(out.contains("1. Night Owls (Writing Group)"));
}

#[test]
fn test_bad_selection_reasks_only_selection() {
    let input = script(&["1", "3", "7", "1", "1", "978-0-00-000000-1", "2020", "Sample", "Q"]);
    let (store, out) = run_session(book_ready_store(), &input);

    assert_eq!(queries::list_books(&store).unwrap().len(), 1);
    assert!(out.contains("Invalid selection 7. Please enter a number 1-1"));
    assert_eq!(out.matches("******** ADDING BOOK ********").count(), 1);
}

#[test]
fn test_cancel_at_each_publisher_field_leaves_no_rows() {
    let fields = ["Ace Books", "ace@x.com", "555-0100"];
    for answered in 0..fields.len() {
        let mut lines = vec!["1", "2"];
        lines.extend_from_slice(&fields[..answered]);
        lines.push("q");
        lines.push("Q");

        let (store, out) = run_session(MemoryStore::new(), &script(&lines));
        assert!(
            queries::list_publishers(&store).unwrap().is_empty(),
            "cancel after {} fields left a row",
            answered
        );
        assert!(out.contains("Transaction failed (or cancelled): cancelled by user"));
    }
}

#[test]
fn test_cancel_at_each_book_field_leaves_no_rows() {
    let fields = ["1", "1", "978-0-00-000000-1", "2020", "Sample"];
    for answered in 0..fields.len() {
        let mut lines = vec!["1", "3"];
        lines.extend_from_slice(&fields[..answered]);
        lines.push("q");
        lines.push("Q");

        let (store, out) = run_session(book_ready_store(), &script(&lines));
        assert!(
            queries::list_books(&store).unwrap().is_empty(),
            "cancel after {} fields left a book",
            answered
        );
        assert_eq!(queries::list_publishers(&store).unwrap().len(), 1);
        assert_eq!(queries::list_authors(&store).unwrap().len(), 1);
        assert!(out.contains("Transaction failed (or cancelled): cancelled by user"));
    }
}

#[test]
fn test_cancel_at_each_writing_group_field_leaves_no_rows() {
    let fields = ["Night Owls", "no@x.com", "J. Doe", "1999"];
    for answered in 0..fields.len() {
        let mut lines = vec!["1", "1", "1"];
        lines.extend_from_slice(&fields[..answered]);
        lines.push("q");
        lines.push("Q");

        let (store, out) = run_session(MemoryStore::new(), &script(&lines));
        assert!(
            queries::list_authors(&store).unwrap().is_empty(),
            "cancel after {} fields left an author",
            answered
        );
        assert!(out.contains("Transaction failed (or cancelled): cancelled by user"));
    }
}

#[test]
fn test_cancel_in_submenu_rolls_back() {
    let (store, out) = run_session(MemoryStore::new(), &script(&["1", "1", "Q", "Q"]));
    assert!(queries::list_authors(&store).unwrap().is_empty());
    assert!(out.contains("cancelled by user"));
    assert!(out.contains("Exiting application."));
}

#[test]
fn test_invalid_field_restarts_whole_form() {
    let input = script(&[
        "1", "2", "Ace Books", "", "Ace Books", "ace@x.com", "555-0100", "Q",
    ]);
    let (store, out) = run_session(MemoryStore::new(), &input);

    assert_eq!(queries::list_publishers(&store).unwrap(), vec![ace_books()]);
    assert!(out.contains("Error: Publisher email cannot be empty; Please try again."));
    assert_eq!(out.matches("******** ADDING PUBLISHER ********").count(), 2);
}

#[test]
fn test_overlong_author_name_is_rejected() {
    let long_name = "x".repeat(81);
    let input = script(&[
        "1", "1", "2", &long_name, "A. Writer", "aw@x.com", "personal@x.com", "Q",
    ]);
    let (store, out) = run_session(MemoryStore::new(), &input);

    let authors = queries::list_authors(&store).unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].name, "A. Writer");
    assert!(out.contains("Name cannot exceed 80 characters long (got 81)"));
}

#[test]
fn test_long_publisher_values_are_accepted() {
    let name = "The Very Long Established Publishing House of Letters and Lore, Incorporated Ltd";
    let email = "submissions.department@publishing-house.example.com";
    let phone = "+44 (0) 20 7946 0958 ext. 12345";
    let input = script(&["1", "2", name, email, phone, "Q"]);
    let (store, out) = run_session(MemoryStore::new(), &input);

    let publishers = queries::list_publishers(&store).unwrap();
    assert_eq!(publishers.len(), 1);
    assert_eq!(publishers[0].name, name);
    assert_eq!(publishers[0].email, email);
    assert_eq!(publishers[0].phone, phone);
    assert!(!out.contains("cannot exceed"));
}

#[test]
fn test_non_numeric_year_restarts_form() {
    let input = script(&[
        "1", "1", "1", "Night Owls", "no@x.com", "J. Doe", "nineteen", "Night Owls", "no@x.com",
        "J. Doe", "1999", "Q",
    ]);
    let (store, out) = run_session(MemoryStore::new(), &input);

    assert_eq!(queries::list_writing_groups(&store).unwrap(), vec![night_owls()]);
    assert!(out.contains("Year formed must be a whole number (got 'nineteen')"));
}

#[test]
fn test_duplicate_name_is_rejected_by_store() {
    let input = script(&["1", "1", "2", "Night Owls", "x@x.com", "y@x.com", "Q"]);
    let (store, out) = run_session(book_ready_store(), &input);

    assert_eq!(queries::list_authors(&store).unwrap(), vec![night_owls()]);
    assert!(out.contains("already exists: Night Owls"));
    assert!(out.contains("Transaction failed (or cancelled): rejected"));
}

#[test]
fn test_add_team_with_members() {
    let input = script(&[
        "1", "1", "3", "The Guild", "tg@x.com", "guild@x.com", "1", "1", "2", "", "Q",
    ]);
    let (store, out) = run_session(authors_store(), &input);

    let members: Vec<String> = queries::team_members(&store, "The Guild")
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(members, vec!["A. Writer".to_string(), "B. Scribe".to_string()]);
    assert!(out.contains("******** AVAILABLE INDIVIDUAL AUTHORS ********"));
    assert!(out.contains("already exists: A. Writer in The Guild; Please try again."));
}

#[test]
fn test_team_without_members_commits() {
    let input = script(&["1", "1", "3", "The Guild", "tg@x.com", "guild@x.com", "", "Q"]);
    let (store, out) = run_session(authors_store(), &input);

    let team = queries::find_author(&store, "The Guild").unwrap().unwrap();
    assert!(team.is_a(AuthorType::AdHocTeam));
    assert!(queries::team_members(&store, "The Guild").unwrap().is_empty());
    assert!(out.contains("Successful transaction, committing to database."));
}

#[test]
fn test_cancel_while_picking_members_discards_team() {
    let input = script(&[
        "1", "1", "3", "The Guild", "tg@x.com", "guild@x.com", "1", "Q", "Q",
    ]);
    let (store, _) = run_session(authors_store(), &input);

    assert!(queries::find_author(&store, "The Guild").unwrap().is_none());
}
