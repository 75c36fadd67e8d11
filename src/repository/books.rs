//! Books repository

use crate::models::Book;

#[derive(Debug, Clone, Default)]
pub struct BooksRepository {
    books: Vec<Book>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book. Duplicate ISBNs are kept.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// First book whose ISBN matches exactly, scanning in insertion order
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn() == isbn)
    }

    /// Mutable variant of [`find_by_isbn`](Self::find_by_isbn)
    pub fn find_by_isbn_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.isbn() == isbn)
    }

    /// All books in insertion order
    pub fn all(&self) -> &[Book] {
        &self.books
    }
}
