//! Catalog management service
//!
//! Owns the book and user collections and drives the issue/return
//! transitions. Books are located by a first-match scan on ISBN, so when two
//! books share an ISBN only the one added first is ever reachable.

use crate::{
    models::{Book, IssueOutcome, ReturnOutcome, User},
    repository::Repository,
};

#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book to the catalog
    pub fn add_book(&mut self, book: Book) {
        tracing::debug!("Catalog add: book isbn={} title={:?}", book.isbn(), book.title());
        self.repository.books.add(book);
    }

    /// Register a user
    pub fn add_user(&mut self, user: User) {
        tracing::debug!("Catalog add: user id={} name={:?}", user.id(), user.name());
        self.repository.users.add(user);
    }

    /// Check out the first book with the given ISBN
    pub fn issue_book(&mut self, isbn: &str) -> IssueOutcome {
        let outcome = match self.repository.books.find_by_isbn_mut(isbn) {
            Some(book) if book.is_issued() => IssueOutcome::AlreadyIssued,
            Some(book) => {
                book.issue();
                IssueOutcome::Issued
            }
            None => IssueOutcome::NotFound,
        };
        tracing::info!(
            "Catalog issue: isbn={} outcome={:?} success={}",
            isbn,
            outcome,
            outcome.is_success()
        );
        outcome
    }

    /// Check in the first book with the given ISBN
    pub fn return_book(&mut self, isbn: &str) -> ReturnOutcome {
        let outcome = match self.repository.books.find_by_isbn_mut(isbn) {
            Some(book) if book.is_issued() => {
                book.return_book();
                ReturnOutcome::Returned
            }
            Some(_) => ReturnOutcome::NotIssued,
            None => ReturnOutcome::NotFound,
        };
        tracing::info!(
            "Catalog return: isbn={} outcome={:?} success={}",
            isbn,
            outcome,
            outcome.is_success()
        );
        outcome
    }

    /// One listing line per book, in insertion order
    pub fn show_books(&self) -> Vec<String> {
        self.repository.books.all().iter().map(Book::to_string).collect()
    }

    pub fn find_book(&self, isbn: &str) -> Option<&Book> {
        self.repository.books.find_by_isbn(isbn)
    }

    pub fn books(&self) -> &[Book] {
        self.repository.books.all()
    }

    pub fn users(&self) -> &[User] {
        self.repository.users.all()
    }
}
