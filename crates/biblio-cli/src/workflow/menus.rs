//! Menu definitions for every level of the workflow

use crate::console::Menu;
use biblio_core::AuthorType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Add,
    Info,
    Update,
    Delete,
}

impl MainChoice {
    /// Operation name used in logs
    pub fn op_name(&self) -> &'static str {
        match self {
            MainChoice::Add => "add",
            MainChoice::Info => "info",
            MainChoice::Update => "update",
            MainChoice::Delete => "delete",
        }
    }
}

impl Menu for MainChoice {
    const TITLE: &'static str = "MAIN MENU";
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (MainChoice::Add, "Add a new object"),
        (MainChoice::Info, "List object information"),
        (MainChoice::Update, "Update a book"),
        (MainChoice::Delete, "Delete a book"),
    ];
    const ESCAPE_HINT: &'static str = "Or enter Q to quit.";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddChoice {
    AuthoringEntity,
    Publisher,
    Book,
}

impl Menu for AddChoice {
    const TITLE: &'static str = "ADD MENU";
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (AddChoice::AuthoringEntity, "Add new Authoring Entity"),
        (AddChoice::Publisher, "Add new Publisher"),
        (AddChoice::Book, "Add new Book"),
    ];
}

impl Menu for AuthorType {
    const TITLE: &'static str = "AUTHORING ENTITY TYPES";
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (AuthorType::WritingGroup, "Writing Group"),
        (AuthorType::IndividualAuthor, "Individual Author"),
        (AuthorType::AdHocTeam, "Ad Hoc Team"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoChoice {
    Publisher,
    Book,
    WritingGroup,
    AuthoringEntity,
}

impl Menu for InfoChoice {
    const TITLE: &'static str = "INFO MENU";
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (InfoChoice::Publisher, "Get Publisher Info"),
        (InfoChoice::Book, "Get Book Info"),
        (InfoChoice::WritingGroup, "Get Writing Group Info"),
        (InfoChoice::AuthoringEntity, "Get Authoring Entity Info"),
    ];
}
