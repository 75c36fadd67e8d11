//! Transcript of the sample session

use std::io::{self, Write};

use library_catalog::{demo, models::Date, AppError};

/// Writer whose every write fails
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_demo_transcript() {
    let mut out = Vec::new();
    demo::run(&mut out, Date::new(24, 7, 2025)).expect("demo should not fail on a Vec");

    let transcript = String::from_utf8(out).expect("demo output is UTF-8");
    let expected = "\
Title: C++ Basics, Author: Bjarne Stroustrup, ISBN: 123, Status: Available
Title: Data Structures, Author: Mark Allen, ISBN: 456, Status: Available
Book issued.
Title: C++ Basics, Author: Bjarne Stroustrup, ISBN: 123, Status: Issued
Title: Data Structures, Author: Mark Allen, ISBN: 456, Status: Available
Book returned.
Title: C++ Basics, Author: Bjarne Stroustrup, ISBN: 123, Status: Available
Title: Data Structures, Author: Mark Allen, ISBN: 456, Status: Available
Today's date: 24/7/2025
";
    assert_eq!(transcript, expected);
}

#[test]
fn test_demo_uses_given_date() {
    let mut out = Vec::new();
    demo::run(&mut out, Date::new(40, 13, 2025)).expect("demo should not fail on a Vec");

    let transcript = String::from_utf8(out).expect("demo output is UTF-8");
    assert!(transcript.ends_with("Today's date: 40/13/2025\n"));
}

#[test]
fn test_demo_reports_write_failure() {
    let result = demo::run(&mut BrokenPipe, Date::new(24, 7, 2025));
    assert!(matches!(result, Err(AppError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe));
}
