pub mod book_store;

use crate::books::domain::model::{BookEntity, CatalogStats};
use crate::core::library::{LibraryResult, SortKey};
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookEntity> {
    fn list_all(&self) -> &[BookEntity];

    fn find_by_author(&self, author: &str) -> Vec<&BookEntity>;

    fn find_first_by_title(&self, title: &str) -> LibraryResult<&BookEntity>;

    // keyword search over title, author and isbn
    fn search(&self, keyword: &str) -> Vec<&BookEntity>;

    fn stats(&self) -> CatalogStats;

    fn sort_by(&mut self, key: SortKey);
}
