//! Repository layer: in-memory storage for books and users

pub mod books;
pub mod users;

/// Main repository struct holding every catalog collection
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
            users: users::UsersRepository::new(),
        }
    }
}
