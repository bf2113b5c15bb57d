use crate::books::repository::BookRepository;
use crate::books::repository::book_store::BookStore;

pub fn create_book_repository() -> Box<dyn BookRepository> {
    Box::new(BookStore::new())
}
