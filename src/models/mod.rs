//! Data models for the library catalog

pub mod book;
pub mod date;
pub mod enums;
pub mod user;

// Re-export commonly used types
pub use book::Book;
pub use date::Date;
pub use enums::{BookStatus, IssueOutcome, ReturnOutcome};
pub use user::User;
