//! Add flows: Publisher, Book and the three Authoring Entity variants

use super::display::{author_label, publisher_label};
use super::menus::AddChoice;
use super::{Controller, Outcome};
use crate::console::{store, Flow};
use biblio_core::queries;
use biblio_core::rules::validation::{
    self, check_book_prerequisites, validate_membership, validate_selection, TextField,
    AUTHOR_EMAIL, AUTHOR_NAME, HEAD_WRITER, INDIVIDUAL_EMAIL, ISBN, PUBLISHER_EMAIL,
    PUBLISHER_NAME, PUBLISHER_PHONE, TEAM_EMAIL, TITLE, YEAR_FORMED, YEAR_PUBLISHED,
};
use biblio_core::{
    AuthorType, AuthoringEntity, Book, Entity, EntityStore, Publisher, TeamMembership,
};
use std::io::{BufRead, Write};

impl<S, R, W> Controller<S, R, W>
where
    S: EntityStore,
    R: BufRead,
    W: Write,
{
    pub(super) fn add_menu(&mut self) -> Flow<Outcome> {
        match self.console.menu::<AddChoice>()? {
            AddChoice::AuthoringEntity => match self.console.menu::<AuthorType>()? {
                AuthorType::WritingGroup => self.add_writing_group(),
                AuthorType::IndividualAuthor => self.add_individual_author(),
                AuthorType::AdHocTeam => self.add_ad_hoc_team(),
            },
            AddChoice::Publisher => self.add_publisher(),
            AddChoice::Book => self.add_book(),
        }
    }

    fn persist(&mut self, entity: Entity) -> Flow<()> {
        store(self.store.persist(&entity))
    }

    fn text(&mut self, prompt: &str, field: TextField) -> Flow<String> {
        self.console
            .field(&format!("{}, or Q to cancel: ", prompt), |raw| field.validate(raw))
    }

    fn year(&mut self, prompt: &str, label: &str) -> Flow<i32> {
        self.console.field(&format!("{}, or Q to cancel: ", prompt), |raw| {
            validation::validate_year(label, raw)
        })
    }

    pub(super) fn add_publisher(&mut self) -> Flow<Outcome> {
        let publisher = self.restart_on_invalid("ADDING PUBLISHER", |this| {
            let name = this.text("Enter the Publisher name", PUBLISHER_NAME)?;
            let email = this.text("Enter the Publisher email", PUBLISHER_EMAIL)?;
            let phone = this.text("Enter the Publisher phone", PUBLISHER_PHONE)?;
            Ok(Publisher::new(name, email, phone))
        })?;

        self.persist(publisher.into())?;
        Ok(Outcome::Committed)
    }

    pub(super) fn add_book(&mut self) -> Flow<Outcome> {
        let publishers = store(queries::list_publishers(&self.store))?;
        let authors = store(queries::list_authors(&self.store))?;
        if let Err(err) = check_book_prerequisites(publishers.len(), authors.len()) {
            return self.precondition(
                err,
                "Please ensure at least one publisher and one author exist before attempting to add a book.",
            );
        }

        let book = self.restart_on_invalid("ADDING BOOK", |this| {
            let p = this
                .console
                .select("AVAILABLE PUBLISHERS", &publishers, publisher_label)?;
            let a = this
                .console
                .select("AVAILABLE AUTHORS", &authors, author_label)?;
            let isbn = this.text("Enter the book's ISBN", ISBN)?;
            let year = this.year("Enter the book's publication year", YEAR_PUBLISHED)?;
            let title = this.text("Enter the book's title", TITLE)?;
            Ok(Book::new(
                isbn,
                title,
                year,
                authors[a].name.clone(),
                publishers[p].name.clone(),
            ))
        })?;

        self.persist(book.into())?;
        Ok(Outcome::Committed)
    }

    pub(super) fn add_writing_group(&mut self) -> Flow<Outcome> {
        let group = self.restart_on_invalid("ADDING WRITING GROUP", |this| {
            let name = this.text("Enter the Writing Group name", AUTHOR_NAME)?;
            let email = this.text("Enter the Writing Group email", AUTHOR_EMAIL)?;
            let head_writer = this.text("Enter the Head Writer name", HEAD_WRITER)?;
            let year_formed = this.year("Enter the year formed", YEAR_FORMED)?;
            Ok(AuthoringEntity::writing_group(
                name,
                email,
                head_writer,
                year_formed,
            ))
        })?;

        self.persist(group.into())?;
        Ok(Outcome::Committed)
    }

    pub(super) fn add_individual_author(&mut self) -> Flow<Outcome> {
        let author = self.restart_on_invalid("ADDING INDIVIDUAL AUTHOR", |this| {
            let name = this.text("Enter the Individual Author name", AUTHOR_NAME)?;
            let email = this.text("Enter the Individual Author email", AUTHOR_EMAIL)?;
            let individual_email =
                this.text("Enter the author's personal email", INDIVIDUAL_EMAIL)?;
            Ok(AuthoringEntity::individual_author(
                name,
                email,
                individual_email,
            ))
        })?;

        self.persist(author.into())?;
        Ok(Outcome::Committed)
    }

    pub(super) fn add_ad_hoc_team(&mut self) -> Flow<Outcome> {
        let team = self.restart_on_invalid("ADDING AD HOC TEAM", |this| {
            let name = this.text("Enter the Ad Hoc Team name", AUTHOR_NAME)?;
            let email = this.text("Enter the Ad Hoc Team email", AUTHOR_EMAIL)?;
            let team_email = this.text("Enter the team's shared email", TEAM_EMAIL)?;
            Ok(AuthoringEntity::ad_hoc_team(name, email, team_email))
        })?;

        let candidates = store(queries::list_individual_authors(&self.store))?;
        let members = self.pick_members(&team, &candidates)?;

        self.persist(team.into())?;
        for membership in members {
            self.persist(membership.into())?;
        }
        Ok(Outcome::Committed)
    }

    /// Let the user pick zero or more Individual Authors for a new team
    ///
    /// Blank input finishes the list. A bad or repeated pick is reported and
    /// only that pick is re-asked.
    fn pick_members(
        &mut self,
        team: &AuthoringEntity,
        candidates: &[AuthoringEntity],
    ) -> Flow<Vec<TeamMembership>> {
        let mut chosen = Vec::new();
        if candidates.is_empty() {
            return Ok(chosen);
        }

        self.console.say("")?;
        self.console.say("******** AVAILABLE INDIVIDUAL AUTHORS ********")?;
        for (i, author) in candidates.iter().enumerate() {
            self.console.say(format!("{}. {}", i + 1, author.name))?;
        }

        loop {
            let line = self
                .console
                .choice_line("Add a member by number, press Enter to finish, or Q to cancel: ")?;
            if line.trim().is_empty() {
                return Ok(chosen);
            }

            let picked = validate_selection(&line, candidates.len())
                .and_then(|i| validate_membership(team, &candidates[i], &chosen));
            match picked {
                Ok(membership) => chosen.push(membership),
                Err(err) => self.console.report(&err)?,
            }
        }
    }
}

