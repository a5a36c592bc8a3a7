//! Flyweight — a library shares one book value among its borrowers
//!
//! The shelf is the flyweight pool: each title is bought once and every
//! borrower of that title holds the same `Rc`, not a copy.

use std::collections::HashMap;
use std::rc::Rc;

struct Book {
    title: String,
}

#[derive(Default)]
struct Library {
    shelf: HashMap<String, Rc<Book>>,
}

impl Library {
    fn buy(&mut self, title: &str) -> String {
        if self.shelf.contains_key(title) {
            return format!("the library already owns \"{title}\"");
        }
        self.shelf.insert(
            title.to_string(),
            Rc::new(Book {
                title: title.to_string(),
            }),
        );
        format!("book purchased: \"{title}\"")
    }

    fn lend(&mut self, borrower: &mut Borrower, title: &str) -> Vec<String> {
        let mut lines = vec![format!("{} asks to borrow \"{}\"", borrower.name, title)];
        if !self.shelf.contains_key(title) {
            lines.push(format!("\"{title}\" is not on the shelf, buying it first"));
            lines.push(self.buy(title));
        }
        let book = Rc::clone(&self.shelf[title]);
        borrower.book = Some(book);
        lines.push(format!("book lent out: \"{title}\""));
        lines
    }
}

struct Borrower {
    name: String,
    book: Option<Rc<Book>>,
}

impl Borrower {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            book: None,
        }
    }

    fn read(&self) -> String {
        match &self.book {
            Some(book) => format!("{} is reading \"{}\"", self.name, book.title),
            None => format!("{} has nothing to read", self.name),
        }
    }
}

pub fn run() -> Vec<String> {
    let mut library = Library::default();
    let mut minsu = Borrower::new("Minsu");
    let mut sujin = Borrower::new("Sujin");

    let mut lines = vec![library.buy("Clean Code")];
    lines.extend(library.lend(&mut minsu, "Clean Code"));
    lines.extend(library.lend(&mut sujin, "Objects"));
    lines.push(library.buy("Objects"));
    lines.push(minsu.read());
    lines.push(sujin.read());
    lines
}
