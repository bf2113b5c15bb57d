use tracing::warn;
use crate::books::domain::model::BookEntity;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository();
    let mut svc = CatalogServiceImpl::new(config, book_repo);
    if config.seed_books {
        for book in sample_books() {
            if let Err(err) = svc.add_book(book) {
                warn!("skipping sample book: {}", err);
            }
        }
    }
    Box::new(svc)
}

// the books a fresh branch starts with
pub fn sample_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new("The Lord of the Rings", "J.R.R. Tolkien", 1178, 25.50, "978-0618053267"),
        BookEntity::new("The Hobbit", "J.R.R. Tolkien", 310, 15.00, "978-0345339683"),
        BookEntity::new("Pride and Prejudice", "Jane Austen", 279, 12.75, "978-0141439518"),
        BookEntity::new("1984", "George Orwell", 328, 10.20, "978-0451524935"),
    ]
}
