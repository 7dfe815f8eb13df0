use serde::{Deserialize, Serialize};

/// Book - a published work
///
/// Identified by `isbn`. Both foreign keys are mandatory: a Book can only be
/// persisted once its Authoring Entity and Publisher exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// ISBN as entered (identity, at most 17 characters)
    pub isbn: String,

    /// Title (at most 80 characters)
    pub title: String,

    /// Year of publication
    pub year_published: i32,

    /// Name of the owning Authoring Entity
    pub author_name: String,

    /// Name of the owning Publisher
    pub publisher_name: String,
}

impl Book {
    /// Create a new Book
    pub fn new(
        isbn: String,
        title: String,
        year_published: i32,
        author_name: String,
        publisher_name: String,
    ) -> Self {
        Self {
            isbn,
            title,
            year_published,
            author_name,
            publisher_name,
        }
    }

    /// Check whether this Book was written by the named Authoring Entity
    pub fn is_authored_by(&self, author_name: &str) -> bool {
        self.author_name == author_name
    }

    /// Check whether this Book was published by the named Publisher
    pub fn is_published_by(&self, publisher_name: &str) -> bool {
        self.publisher_name == publisher_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_links() {
        let book = Book::new(
            "978-0-00-000000-1".to_string(),
            "Sample".to_string(),
            2020,
            "Night Owls".to_string(),
            "Ace Books".to_string(),
        );

        assert!(book.is_authored_by("Night Owls"));
        assert!(!book.is_authored_by("Ace Books"));
        assert!(book.is_published_by("Ace Books"));
        assert_eq!(book.year_published, 2020);
    }
}
