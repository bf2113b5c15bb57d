use std::io::{BufRead, Write};
use serde::Serialize;
use tracing::debug;
use crate::books::domain::model::{BookEntity, CatalogStats};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::catalog_stats_cmd::{CatalogStatsCommand, CatalogStatsCommandRequest};
use crate::catalog::command::count_books_cmd::{CountBooksCommand, CountBooksCommandRequest};
use crate::catalog::command::find_books_by_author_cmd::{FindBooksByAuthorCommand, FindBooksByAuthorCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_book_cmd::{SearchBookByTitleCommand, SearchBookByTitleCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::command::sort_books_cmd::{SortBooksCommand, SortBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, Console, OutputFormat};
use crate::core::library::{LibraryResult, SortKey};

const MENU: &str = "\n--- Library Management System Menu ---
1. Add Book
2. Display All Books
3. Find Books by Author
4. Count Total Books
5. Search Book by Title
6. Delete Book by ISBN
7. Sort Books by Title
8. Sort Books by Author
9. Exit
10. Find Book by ISBN
11. Search Books
12. Library Statistics
--------------------------------------
Enter your choice: ";

const SEPARATOR: &str = "----------------------------";

const GOODBYE: &str = "Exiting Library Management System. Goodbye!";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    AddBook,
    DisplayAll,
    FindByAuthor,
    Count,
    SearchByTitle,
    DeleteByIsbn,
    SortByTitle,
    SortByAuthor,
    Exit,
    FindByIsbn,
    SearchBooks,
    Statistics,
    Invalid,
}

impl From<&str> for MenuChoice {
    fn from(s: &str) -> Self {
        match s.trim() {
            "1" => MenuChoice::AddBook,
            "2" => MenuChoice::DisplayAll,
            "3" => MenuChoice::FindByAuthor,
            "4" => MenuChoice::Count,
            "5" => MenuChoice::SearchByTitle,
            "6" => MenuChoice::DeleteByIsbn,
            "7" => MenuChoice::SortByTitle,
            "8" => MenuChoice::SortByAuthor,
            "9" => MenuChoice::Exit,
            "10" => MenuChoice::FindByIsbn,
            "11" => MenuChoice::SearchBooks,
            "12" => MenuChoice::Statistics,
            _ => MenuChoice::Invalid,
        }
    }
}

// CatalogController drives the catalog service from the text menu
pub struct CatalogController<R, W> {
    format: OutputFormat,
    catalog_service: Box<dyn CatalogService>,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> CatalogController<R, W> {
    pub fn new(state: &AppState, console: Console<R, W>) -> Self {
        Self::with_service(state, factory::create_catalog_service(&state.config), console)
    }

    pub fn with_service(state: &AppState, catalog_service: Box<dyn CatalogService>, console: Console<R, W>) -> Self {
        Self {
            format: state.format,
            catalog_service,
            console,
        }
    }

    /// Runs the menu until the exit selection or end of input.
    pub fn run(&mut self) -> LibraryResult<()> {
        loop {
            let line = match self.console.prompt(MENU)? {
                Some(line) => line,
                None => {
                    self.console.write_line("")?;
                    return self.console.write_line(GOODBYE);
                }
            };
            let choice = MenuChoice::from(line.as_str());
            debug!(choice = ?choice, "menu selection");
            if !self.dispatch(choice)? {
                return Ok(());
            }
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    // Handles one selection, false once the menu should stop.
    fn dispatch(&mut self, choice: MenuChoice) -> LibraryResult<bool> {
        match choice {
            MenuChoice::AddBook => self.add_book()?,
            MenuChoice::DisplayAll => self.display_all()?,
            MenuChoice::FindByAuthor => self.find_by_author()?,
            MenuChoice::Count => self.count()?,
            MenuChoice::SearchByTitle => self.search_by_title()?,
            MenuChoice::DeleteByIsbn => self.delete_by_isbn()?,
            MenuChoice::SortByTitle => self.sort(SortKey::Title)?,
            MenuChoice::SortByAuthor => self.sort(SortKey::Author)?,
            MenuChoice::FindByIsbn => self.find_by_isbn()?,
            MenuChoice::SearchBooks => self.search_books()?,
            MenuChoice::Statistics => self.statistics()?,
            MenuChoice::Invalid => self.console.write_line("Invalid choice. Please try again.")?,
            MenuChoice::Exit => {
                self.console.write_line(GOODBYE)?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn add_book(&mut self) -> LibraryResult<()> {
        let Some(title) = self.console.prompt("Enter Title: ")? else { return Ok(()) };
        let Some(author) = self.console.prompt("Enter Author: ")? else { return Ok(()) };
        let Some(pages) = self.console.prompt("Enter Pages: ")? else { return Ok(()) };
        let Ok(pages) = pages.trim().parse::<u32>() else {
            return self.console.write_line("Invalid number for pages.");
        };
        let Some(price) = self.console.prompt("Enter Price: ")? else { return Ok(()) };
        let price = match price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => price,
            _ => return self.console.write_line("Invalid number for price."),
        };
        let Some(isbn) = self.console.prompt("Enter ISBN: ")? else { return Ok(()) };

        let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), pages, price, isbn.as_str());
        let res = AddBookCommand::new(self.catalog_service.as_mut()).execute(req);
        match res {
            Ok(res) if self.format == OutputFormat::Json => self.emit(&res),
            Ok(_) => self.console.write_line("Book added successfully!"),
            Err(CommandError::DuplicateKey { .. }) => self.console.write_line(
                format!("Error: Book with ISBN {} already exists.", isbn).as_str()),
            Err(err) => self.report(err),
        }
    }

    fn display_all(&mut self) -> LibraryResult<()> {
        let res = ListBooksCommand::new(self.catalog_service.as_ref()).execute(ListBooksCommandRequest::new());
        match res {
            Ok(res) if self.format == OutputFormat::Json => self.emit(&res.books),
            Ok(res) => self.write_books(&res.books),
            Err(err) => self.report(err),
        }
    }

    fn find_by_author(&mut self) -> LibraryResult<()> {
        let Some(author) = self.console.prompt("Enter Author Name: ")? else { return Ok(()) };
        let res = FindBooksByAuthorCommand::new(self.catalog_service.as_ref())
            .execute(FindBooksByAuthorCommandRequest::new(author.as_str()));
        match res {
            Ok(res) if self.format == OutputFormat::Json => self.emit(&res),
            Ok(res) => {
                self.console.write_line(format!("\n--- Books by {} ---", res.author).as_str())?;
                if res.books.is_empty() {
                    self.console.write_line(format!("No books found by {}.", res.author).as_str())?;
                }
                for book in &res.books {
                    self.console.write_line(book.to_string().as_str())?;
                }
                self.console.write_line(SEPARATOR)
            }
            Err(err) => self.report(err),
        }
    }

    fn count(&mut self) -> LibraryResult<()> {
        let res = CountBooksCommand::new(self.catalog_service.as_ref()).execute(CountBooksCommandRequest::new());
        match res {
            Ok(res) if self.format == OutputFormat::Json => self.emit(&res),
            Ok(res) => self.console.write_line(format!("Total books in library: {}", res.count).as_str()),
            Err(err) => self.report(err),
        }
    }

    fn search_by_title(&mut self) -> LibraryResult<()> {
        let Some(title) = self.console.prompt("Enter Title to search: ")? else { return Ok(()) };
        let res = SearchBookByTitleCommand::new(self.catalog_service.as_ref())
            .execute(SearchBookByTitleCommandRequest::new(title.as_str()));
        match res {
            Ok(res) if self.format == OutputFormat::Json => self.emit(&res.book),
            Ok(res) => self.console.write_line(format!("Book found: {}", res.book).as_str()),
            Err(CommandError::NotFound { .. }) => self.console.write_line(
                format!("Book with title '{}' not found.", title).as_str()),
            Err(err) => self.report(err),
        }
    }

    fn delete_by_isbn(&mut self) -> LibraryResult<()> {
        let Some(isbn) = self.console.prompt("Enter ISBN of book to delete: ")? else { return Ok(()) };
        let res = RemoveBookCommand::new(self.catalog_service.as_mut())
            .execute(RemoveBookCommandRequest::new(isbn.as_str()));
        match res {
            Ok(res) if self.format == OutputFormat::Json => self.emit(&res),
            Ok(_) => self.console.write_line(
                format!("Book with ISBN {} deleted successfully.", isbn).as_str()),
            Err(CommandError::NotFound { .. }) => self.console.write_line(
                format!("Error: Book with ISBN {} not found.", isbn).as_str()),
            Err(err) => self.report(err),
        }
    }

    fn sort(&mut self, key: SortKey) -> LibraryResult<()> {
        let res = SortBooksCommand::new(self.catalog_service.as_mut())
            .execute(SortBooksCommandRequest::new(key));
        match res {
            Ok(res) if self.format == OutputFormat::Json => self.emit(&res),
            Ok(res) => {
                let field = match res.key {
                    SortKey::Title => "title",
                    SortKey::Author => "author",
                };
                self.console.write_line(format!("Books sorted by {}.", field).as_str())?;
                self.write_books(&res.books)
            }
            Err(err) => self.report(err),
        }
    }

    fn find_by_isbn(&mut self) -> LibraryResult<()> {
        let Some(isbn) = self.console.prompt("Enter ISBN to find: ")? else { return Ok(()) };
        let res = GetBookCommand::new(self.catalog_service.as_ref())
            .execute(GetBookCommandRequest::new(isbn.as_str()));
        match res {
            Ok(res) if self.format == OutputFormat::Json => self.emit(&res.book),
            Ok(res) => self.console.write_line(format!("Book found: {}", res.book).as_str()),
            Err(CommandError::NotFound { .. }) => self.console.write_line(
                format!("Book with ISBN {} not found.", isbn).as_str()),
            Err(err) => self.report(err),
        }
    }

    fn search_books(&mut self) -> LibraryResult<()> {
        let Some(keyword) = self.console.prompt("Enter search keyword: ")? else { return Ok(()) };
        let res = SearchBooksCommand::new(self.catalog_service.as_ref())
            .execute(SearchBooksCommandRequest::new(keyword.as_str()));
        match res {
            Ok(res) if self.format == OutputFormat::Json => self.emit(&res),
            Ok(res) if res.books.is_empty() => self.console.write_line(
                format!("No books match '{}'.", res.keyword).as_str()),
            Ok(res) => {
                self.console.write_line(format!("\n--- Books matching '{}' ---", res.keyword).as_str())?;
                for book in &res.books {
                    self.console.write_line(book.to_string().as_str())?;
                }
                self.console.write_line(SEPARATOR)
            }
            Err(err) => self.report(err),
        }
    }

    fn statistics(&mut self) -> LibraryResult<()> {
        let res = CatalogStatsCommand::new(self.catalog_service.as_ref())
            .execute(CatalogStatsCommandRequest::new());
        match res {
            Ok(res) if self.format == OutputFormat::Json => self.emit(&res.stats),
            Ok(res) => self.write_stats(&res.stats),
            Err(err) => self.report(err),
        }
    }

    fn write_stats(&mut self, stats: &CatalogStats) -> LibraryResult<()> {
        let money = |v: Option<f64>| v.map_or("n/a".to_string(), |v| format!("${:.2}", v));
        let pages = |v: Option<u32>| v.map_or("n/a".to_string(), |v| format!("{} pages", v));
        let lines = [
            "\n--- Library Statistics ---".to_string(),
            format!("Total Books: {}", stats.total_books),
            format!("Total Value: ${:.2}", stats.total_value),
            format!("Average Price: {}", money(stats.average_price)),
            format!("Average Pages: {}", stats.average_pages.map_or("n/a".to_string(), |v| format!("{:.0}", v))),
            format!("Most Expensive Book: {}", money(stats.max_price)),
            format!("Least Expensive Book: {}", money(stats.min_price)),
            format!("Longest Book: {}", pages(stats.max_pages)),
            format!("Shortest Book: {}", pages(stats.min_pages)),
            SEPARATOR.to_string(),
        ];
        for line in &lines {
            self.console.write_line(line.as_str())?;
        }
        Ok(())
    }

    fn write_books(&mut self, books: &[BookEntity]) -> LibraryResult<()> {
        if books.is_empty() {
            return self.console.write_line("No books in the library.");
        }
        self.console.write_line("\n--- All Books in Library ---")?;
        for book in books {
            self.console.write_line(book.to_string().as_str())?;
        }
        self.console.write_line(SEPARATOR)
    }

    fn emit<T: Serialize>(&mut self, value: &T) -> LibraryResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.console.write_line(json.as_str())
    }

    fn report(&mut self, err: CommandError) -> LibraryResult<()> {
        self.console.write_line(format!("Error: {}", err).as_str())
    }
}
