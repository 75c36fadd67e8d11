//! Demonstration script run by the binary

use std::io::{self, Write};

use crate::{
    error::AppResult,
    models::{Book, Date, User},
    repository::Repository,
    services::CatalogService,
};

/// Run the sample session, writing every line to `out`.
pub fn run<W: Write>(out: &mut W, today: Date) -> AppResult<()> {
    let mut catalog = CatalogService::new(Repository::new());

    catalog.add_book(Book::new("C++ Basics", "Bjarne Stroustrup", "123"));
    catalog.add_book(Book::new("Data Structures", "Mark Allen", "456"));
    catalog.add_user(User::new("Alice", "U1"));

    show_books(out, &catalog)?;

    writeln!(out, "{}", catalog.issue_book("123"))?;
    show_books(out, &catalog)?;

    writeln!(out, "{}", catalog.return_book("123"))?;
    show_books(out, &catalog)?;

    writeln!(out, "Today's date: {}", today)?;
    out.flush()?;
    Ok(())
}

fn show_books<W: Write>(out: &mut W, catalog: &CatalogService) -> io::Result<()> {
    for line in catalog.show_books() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
