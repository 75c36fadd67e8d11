//! Shared domain enums: book status and operation outcomes

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BookStatus
// ---------------------------------------------------------------------------

/// Circulation status of a single book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl From<bool> for BookStatus {
    fn from(issued: bool) -> Self {
        if issued {
            BookStatus::Issued
        } else {
            BookStatus::Available
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookStatus::Available => "Available",
            BookStatus::Issued => "Issued",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// IssueOutcome
// ---------------------------------------------------------------------------

/// Result of an issue request. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueOutcome {
    Issued,
    AlreadyIssued,
    NotFound,
}

impl IssueOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, IssueOutcome::Issued)
    }
}

impl std::fmt::Display for IssueOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            IssueOutcome::Issued => "Book issued.",
            IssueOutcome::AlreadyIssued => "Book already issued.",
            IssueOutcome::NotFound => "Book not found.",
        };
        write!(f, "{}", message)
    }
}

// ---------------------------------------------------------------------------
// ReturnOutcome
// ---------------------------------------------------------------------------

/// Result of a return request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnOutcome {
    Returned,
    NotIssued,
    NotFound,
}

impl ReturnOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, ReturnOutcome::Returned)
    }
}

impl std::fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ReturnOutcome::Returned => "Book returned.",
            ReturnOutcome::NotIssued => "Book was not issued.",
            ReturnOutcome::NotFound => "Book not found.",
        };
        write!(f, "{}", message)
    }
}
