//! Book (catalog entry) model

use serde::{Deserialize, Serialize};

use super::enums::BookStatus;

/// A single book held by the catalog.
///
/// The ISBN is only a lookup key: nothing checks its format or uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    #[serde(default)]
    issued: bool,
}

impl Book {
    /// Create an available book
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            issued: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn is_issued(&self) -> bool {
        self.issued
    }

    pub fn status(&self) -> BookStatus {
        BookStatus::from(self.issued)
    }

    /// Mark the book as checked out. Idempotent.
    pub fn issue(&mut self) {
        self.issued = true;
    }

    /// Mark the book as back on the shelf. Idempotent.
    pub fn return_book(&mut self) {
        self.issued = false;
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, ISBN: {}, Status: {}",
            self.title,
            self.author,
            self.isbn,
            self.status()
        )
    }
}
