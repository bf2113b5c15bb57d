use std::collections::HashMap;

use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, CatalogStats};
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, SortKey};
use crate::core::repository::Repository;

/// In-memory book store.
///
/// Books are kept in insertion order and `isbn_index` maps every isbn to the
/// current position of its book. After each mutation the index holds exactly
/// the isbns of the stored books, each pointing at its book.
#[derive(Debug, Default, Clone)]
pub struct BookStore {
    books: Vec<BookEntity>,
    isbn_index: HashMap<String, usize>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, book: BookEntity) -> LibraryResult<()> {
        if self.isbn_index.contains_key(book.id()) {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", book.id()).as_str()));
        }
        self.isbn_index.insert(book.id().to_string(), self.books.len());
        self.books.push(book);
        Ok(())
    }

    pub fn list_all(&self) -> &[BookEntity] {
        &self.books
    }

    pub fn find_by_author(&self, author: &str) -> Vec<&BookEntity> {
        self.books.iter().filter(|b| b.author() == author).collect()
    }

    pub fn count(&self) -> usize {
        self.books.len()
    }

    pub fn find_first_by_title(&self, title: &str) -> LibraryResult<&BookEntity> {
        self.books.iter().find(|b| b.title() == title).ok_or_else(|| {
            LibraryError::not_found(format!("book with title {} not found", title).as_str())
        })
    }

    pub fn search(&self, keyword: &str) -> Vec<&BookEntity> {
        self.books.iter().filter(|b| b.matches_keyword(keyword)).collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_books(&self.books)
    }

    pub fn delete_by_isbn(&mut self, isbn: &str) -> LibraryResult<BookEntity> {
        let position = self.isbn_index.remove(isbn).ok_or_else(|| {
            LibraryError::not_found(format!("book with isbn {} not found", isbn).as_str())
        })?;
        // stable removal, everything behind the hole moves down by one
        let removed = self.books.remove(position);
        for pos in self.isbn_index.values_mut() {
            if *pos > position {
                *pos -= 1;
            }
        }
        Ok(removed)
    }

    pub fn sort_by_title(&mut self) {
        self.sort(SortKey::Title)
    }

    pub fn sort_by_author(&mut self) {
        self.sort(SortKey::Author)
    }

    pub fn position_of(&self, isbn: &str) -> Option<usize> {
        self.isbn_index.get(isbn).copied()
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.isbn_index.contains_key(isbn)
    }

    fn sort(&mut self, key: SortKey) {
        self.books.sort_by(|a, b| a.sort_value(key).cmp(b.sort_value(key)));
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.isbn_index = self.books.iter()
            .enumerate()
            .map(|(pos, b)| (b.id().to_string(), pos))
            .collect();
    }
}

impl Repository<BookEntity> for BookStore {
    fn create(&mut self, entity: BookEntity) -> LibraryResult<usize> {
        self.add(entity).map(|_| 1)
    }

    fn get(&self, id: &str) -> LibraryResult<&BookEntity> {
        self.position_of(id)
            .and_then(|pos| self.books.get(pos))
            .ok_or_else(|| LibraryError::not_found(format!("book with isbn {} not found", id).as_str()))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<BookEntity> {
        self.delete_by_isbn(id)
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for BookStore {
    fn list_all(&self) -> &[BookEntity] {
        BookStore::list_all(self)
    }

    fn find_by_author(&self, author: &str) -> Vec<&BookEntity> {
        BookStore::find_by_author(self, author)
    }

    fn find_first_by_title(&self, title: &str) -> LibraryResult<&BookEntity> {
        BookStore::find_first_by_title(self, title)
    }

    fn search(&self, keyword: &str) -> Vec<&BookEntity> {
        BookStore::search(self, keyword)
    }

    fn stats(&self) -> CatalogStats {
        BookStore::stats(self)
    }

    fn sort_by(&mut self, key: SortKey) {
        self.sort(key)
    }
}
