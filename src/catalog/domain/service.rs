use tracing::{debug, info};
use crate::books::domain::model::{BookEntity, CatalogStats};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryResult, SortKey};

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<()> {
        let isbn = book.isbn.clone();
        self.book_repository.create(book).map_err(|err| {
            debug!(branch = %self.branch_id, isbn = %isbn, "rejected book: {}", err);
            err
        })?;
        info!(branch = %self.branch_id, isbn = %isbn, "added book");
        Ok(())
    }

    fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookEntity> {
        let removed = self.book_repository.delete(isbn).map_err(|err| {
            debug!(branch = %self.branch_id, isbn, "could not remove book: {}", err);
            err
        })?;
        info!(branch = %self.branch_id, isbn, "removed book");
        Ok(removed)
    }

    fn find_books(&self) -> &[BookEntity] {
        self.book_repository.list_all()
    }

    fn find_books_by_author(&self, author: &str) -> Vec<&BookEntity> {
        self.book_repository.find_by_author(author)
    }

    fn count_books(&self) -> usize {
        self.book_repository.count()
    }

    fn find_book_by_title(&self, title: &str) -> LibraryResult<&BookEntity> {
        self.book_repository.find_first_by_title(title)
    }

    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<&BookEntity> {
        self.book_repository.get(isbn)
    }

    fn search_books(&self, keyword: &str) -> Vec<&BookEntity> {
        let found = self.book_repository.search(keyword);
        debug!(branch = %self.branch_id, keyword, matches = found.len(), "searched books");
        found
    }

    fn catalog_stats(&self) -> CatalogStats {
        self.book_repository.stats()
    }

    fn sort_books(&mut self, key: SortKey) {
        self.book_repository.sort_by(key);
        info!(branch = %self.branch_id, key = %key, "sorted books");
    }
}


#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::{LibraryError, SortKey};

    fn empty_service() -> Box<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test").without_seed())
    }

    #[test]
    fn test_should_add_book() {
        let mut catalog_svc = empty_service();

        let book = BookEntity::new("1984", "George Orwell", 328, 10.20, "X1");
        catalog_svc.add_book(book.clone()).expect("should add book");

        let loaded = catalog_svc.find_book_by_isbn("X1").expect("should return book");
        assert_eq!(&book, loaded);
        assert_eq!(1, catalog_svc.count_books());
    }

    #[test]
    fn test_should_not_add_duplicate_book() {
        let mut catalog_svc = empty_service();

        catalog_svc.add_book(BookEntity::new("1984", "George Orwell", 328, 10.20, "X1")).expect("should add book");
        let res = catalog_svc.add_book(BookEntity::new("1984", "George Orwell", 328, 10.20, "X1"));
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        assert_eq!(1, catalog_svc.count_books());
    }

    #[test]
    fn test_should_remove_book() {
        let mut catalog_svc = empty_service();

        catalog_svc.add_book(BookEntity::new("Emma", "Jane Austen", 474, 8.5, "isbn123")).expect("should add book");
        let removed = catalog_svc.remove_book("isbn123").expect("should remove book");
        assert_eq!("Emma", removed.title.as_str());

        assert!(catalog_svc.find_book_by_isbn("isbn123").is_err());
        assert!(matches!(catalog_svc.remove_book("isbn123"), Err(LibraryError::NotFound { .. })));
    }

    #[test]
    fn test_should_find_by_author() {
        let catalog_svc = factory::create_catalog_service(&Configuration::new("test"));

        let res = catalog_svc.find_books_by_author("J.R.R. Tolkien");
        let titles: Vec<&str> = res.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["The Lord of the Rings", "The Hobbit"], titles);
    }

    #[test]
    fn test_should_sort_books() {
        let mut catalog_svc = factory::create_catalog_service(&Configuration::new("test"));

        catalog_svc.sort_books(SortKey::Title);
        let titles: Vec<&str> = catalog_svc.find_books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["1984", "Pride and Prejudice", "The Hobbit", "The Lord of the Rings"], titles);

        catalog_svc.sort_books(SortKey::Author);
        let authors: Vec<&str> = catalog_svc.find_books().iter().map(|b| b.author.as_str()).collect();
        assert_eq!(vec!["George Orwell", "J.R.R. Tolkien", "J.R.R. Tolkien", "Jane Austen"], authors);
        assert_eq!("978-0451524935", catalog_svc.find_book_by_isbn("978-0451524935")
            .expect("should return book").isbn.as_str());
    }

    #[test]
    fn test_should_search_books() {
        let catalog_svc = factory::create_catalog_service(&Configuration::new("test"));

        let titles: Vec<&str> = catalog_svc.search_books("the").iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["The Lord of the Rings", "The Hobbit"], titles);
        assert_eq!(1, catalog_svc.search_books("0451").len());
        assert_eq!(4, catalog_svc.search_books("").len());
    }

    #[test]
    fn test_should_compute_catalog_stats() {
        let catalog_svc = factory::create_catalog_service(&Configuration::new("test"));

        let stats = catalog_svc.catalog_stats();
        assert_eq!(4, stats.total_books);
        assert!((stats.total_value - 63.45).abs() < 1e-9);
        assert_eq!(Some(523.75), stats.average_pages);
        assert_eq!(Some(10.20), stats.min_price);
        assert_eq!(Some(25.50), stats.max_price);
        assert_eq!(Some(279), stats.min_pages);
        assert_eq!(Some(1178), stats.max_pages);
    }

    #[test]
    fn test_should_compute_stats_of_empty_catalog() {
        let stats = empty_service().catalog_stats();
        assert_eq!(0, stats.total_books);
        assert_eq!(None, stats.average_price);
        assert_eq!(None, stats.average_pages);
    }
}
