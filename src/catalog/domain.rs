pub mod service;

use crate::books::domain::model::{BookEntity, CatalogStats};
use crate::core::library::{LibraryResult, SortKey};

pub trait CatalogService {
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<()>;
    fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookEntity>;
    fn find_books(&self) -> &[BookEntity];
    fn find_books_by_author(&self, author: &str) -> Vec<&BookEntity>;
    fn count_books(&self) -> usize;
    fn find_book_by_title(&self, title: &str) -> LibraryResult<&BookEntity>;
    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<&BookEntity>;
    fn search_books(&self, keyword: &str) -> Vec<&BookEntity>;
    fn catalog_stats(&self) -> CatalogStats;
    fn sort_books(&mut self, key: SortKey);
}
