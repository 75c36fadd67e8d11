//! Catalog behaviour through the public API

use serde_json::{json, Value};

use library_catalog::{
    models::{Book, IssueOutcome, ReturnOutcome, User},
    CatalogService,
};

fn sample_catalog() -> CatalogService {
    let mut catalog = CatalogService::default();
    catalog.add_book(Book::new("C++ Basics", "Bjarne Stroustrup", "123"));
    catalog.add_book(Book::new("Data Structures", "Mark Allen", "456"));
    catalog.add_user(User::new("Alice", "U1"));
    catalog
}

#[test]
fn test_added_books_listed_available() {
    let catalog = sample_catalog();
    let lines = catalog.show_books();

    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.ends_with("Status: Available")));
    assert!(lines[0].contains("ISBN: 123"));
    assert!(lines[1].contains("ISBN: 456"));
}

#[test]
fn test_issue_and_return_scenario() {
    let mut catalog = sample_catalog();

    assert_eq!(catalog.issue_book("123").to_string(), "Book issued.");
    let lines = catalog.show_books();
    assert_eq!(
        lines[0],
        "Title: C++ Basics, Author: Bjarne Stroustrup, ISBN: 123, Status: Issued"
    );
    assert_eq!(
        lines[1],
        "Title: Data Structures, Author: Mark Allen, ISBN: 456, Status: Available"
    );

    assert_eq!(catalog.return_book("123").to_string(), "Book returned.");
    assert!(catalog
        .show_books()
        .iter()
        .all(|line| line.ends_with("Status: Available")));
}

#[test]
fn test_not_found_changes_nothing() {
    let mut catalog = sample_catalog();
    let before = catalog.books().to_vec();

    assert_eq!(catalog.issue_book("999"), IssueOutcome::NotFound);
    assert_eq!(catalog.return_book("999"), ReturnOutcome::NotFound);
    assert_eq!(catalog.books(), before.as_slice());
}

#[test]
fn test_repeated_transitions() {
    let mut catalog = sample_catalog();

    assert_eq!(catalog.return_book("456"), ReturnOutcome::NotIssued);
    assert_eq!(catalog.issue_book("456"), IssueOutcome::Issued);
    assert_eq!(catalog.issue_book("456"), IssueOutcome::AlreadyIssued);
    assert_eq!(catalog.return_book("456"), ReturnOutcome::Returned);
    assert_eq!(catalog.return_book("456"), ReturnOutcome::NotIssued);
    assert!(!catalog.find_book("456").expect("book 456 exists").is_issued());
}

#[test]
fn test_duplicate_isbn_affects_first_only() {
    let mut catalog = CatalogService::default();
    catalog.add_book(Book::new("Original", "A", "777"));
    catalog.add_book(Book::new("Copy", "B", "777"));

    catalog.issue_book("777");
    catalog.return_book("777");
    catalog.issue_book("777");

    let lines = catalog.show_books();
    assert_eq!(lines[0], "Title: Original, Author: A, ISBN: 777, Status: Issued");
    assert_eq!(lines[1], "Title: Copy, Author: B, ISBN: 777, Status: Available");
}

#[test]
fn test_models_serialize() {
    let mut book = Book::new("C++ Basics", "Bjarne Stroustrup", "123");
    book.issue();

    let value: Value = serde_json::to_value(&book).expect("book serializes");
    assert_eq!(
        value,
        json!({
            "title": "C++ Basics",
            "author": "Bjarne Stroustrup",
            "isbn": "123",
            "issued": true
        })
    );

    let user: User = serde_json::from_value(json!({ "name": "Alice", "id": "U1" }))
        .expect("user deserializes");
    assert_eq!(user.id(), "U1");
}
