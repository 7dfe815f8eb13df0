pub mod invariants;
pub mod validation;

pub use invariants::{author_from_columns, AuthorColumns};
