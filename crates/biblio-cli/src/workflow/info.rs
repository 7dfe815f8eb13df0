//! Info flows: pick an entity from a listing and show its attributes

use super::display::{
    author_info, author_label, book_info, book_label, publisher_info, publisher_label,
    writing_group_info,
};
use super::menus::InfoChoice;
use super::{Controller, Outcome};
use crate::console::{store, Flow};
use biblio_core::errors::BiblioError;
use biblio_core::queries;
use biblio_core::{AuthorType, EntityStore};
use std::io::{BufRead, Write};

fn nothing_to_show(kind: &str) -> BiblioError {
    BiblioError::MissingPrerequisite {
        entity: format!("{} info", kind),
        required: kind.to_string(),
    }
}

impl<S, R, W> Controller<S, R, W>
where
    S: EntityStore,
    R: BufRead,
    W: Write,
{
    pub(super) fn info_menu(&mut self) -> Flow<Outcome> {
        match self.console.menu::<InfoChoice>()? {
            InfoChoice::Publisher => self.publisher_info(),
            InfoChoice::Book => self.book_info(),
            InfoChoice::WritingGroup => self.writing_group_info(),
            InfoChoice::AuthoringEntity => self.author_info(),
        }
    }

    fn show(&mut self, lines: Vec<String>) -> Flow<Outcome> {
        self.console.say("")?;
        for line in lines {
            self.console.say(line)?;
        }
        Ok(Outcome::Committed)
    }

    fn publisher_info(&mut self) -> Flow<Outcome> {
        let publishers = store(queries::list_publishers(&self.store))?;
        if publishers.is_empty() {
            return self.precondition(
                nothing_to_show("Publisher"),
                "Please ensure at least one publisher entry exists before requesting publisher info.",
            );
        }

        let i = self
            .console
            .select("AVAILABLE PUBLISHERS", &publishers, publisher_label)?;
        self.show(publisher_info(&publishers[i]))
    }

    fn book_info(&mut self) -> Flow<Outcome> {
        let books = store(queries::list_books(&self.store))?;
        if books.is_empty() {
            return self.precondition(
                nothing_to_show("Book"),
                "Please ensure at least one book entry exists before requesting book info.",
            );
        }

        let i = self.console.select("AVAILABLE BOOKS", &books, book_label)?;
        self.show(book_info(&books[i]))
    }

    fn writing_group_info(&mut self) -> Flow<Outcome> {
        let groups = store(queries::list_writing_groups(&self.store))?;
        if groups.is_empty() {
            return self.precondition(
                nothing_to_show("Writing Group"),
                "Please ensure at least one writing group entry exists before requesting writing group info.",
            );
        }

        let i = self
            .console
            .select("AVAILABLE WRITING GROUPS", &groups, |g| g.name.clone())?;
        self.show(writing_group_info(&groups[i]))
    }

    fn author_info(&mut self) -> Flow<Outcome> {
        let authors = store(queries::list_authors(&self.store))?;
        if authors.is_empty() {
            return self.precondition(
                nothing_to_show("Authoring Entity"),
                "Please ensure at least one author entry exists before requesting author info.",
            );
        }

        let i = self
            .console
            .select("AVAILABLE AUTHORS", &authors, author_label)?;
        let author = &authors[i];

        let works = store(queries::books_by_author(&self.store, &author.name))?;
        let related = match author.author_type() {
            AuthorType::AdHocTeam => store(queries::team_members(&self.store, &author.name))?,
            AuthorType::IndividualAuthor => {
                store(queries::team_memberships(&self.store, &author.name))?
            }
            AuthorType::WritingGroup => Vec::new(),
        };
        self.show(author_info(author, &works, &related))
    }
}
