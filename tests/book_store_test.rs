use book_catalog::books::domain::model::BookEntity;
use book_catalog::books::repository::book_store::BookStore;
use book_catalog::catalog::domain::CatalogService;
use book_catalog::catalog::factory::{create_catalog_service, sample_books};
use book_catalog::core::domain::Configuration;
use book_catalog::core::library::{LibraryError, SortKey};

fn assert_positions(store: &BookStore) {
    for (pos, book) in store.list_all().iter().enumerate() {
        assert_eq!(Some(pos), store.position_of(book.isbn.as_str()));
    }
}

#[test]
fn test_should_keep_order_through_deletes() {
    let mut store = BookStore::new();
    for book in sample_books() {
        store.add(book).expect("should add book");
    }
    store.delete_by_isbn("978-0618053267").expect("should delete book");
    let titles: Vec<&str> = store.list_all().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(vec!["The Hobbit", "Pride and Prejudice", "1984"], titles);
    assert_positions(&store);

    store.sort_by_title();
    assert_eq!("1984", store.list_all()[0].title.as_str());
    assert_positions(&store);

    store.delete_by_isbn("978-0451524935").expect("should delete book");
    assert_eq!(2, store.count());
    assert!(!store.contains("978-0451524935"));
    assert_positions(&store);
}

#[test]
fn test_should_leave_store_unchanged_on_failures() {
    let mut store = BookStore::new();
    store.add(BookEntity::new("1984", "Orwell", 328, 10.20, "X1")).expect("should add book");
    let before = store.list_all().to_vec();

    assert!(matches!(store.add(BookEntity::new("Other", "Someone", 1, 1.0, "X1")),
                     Err(LibraryError::DuplicateKey { .. })));
    assert!(matches!(store.delete_by_isbn("X2"), Err(LibraryError::NotFound { .. })));
    assert_eq!(before, store.list_all().to_vec());
    assert_eq!(1, store.count());
}

#[test]
fn test_should_drive_catalog_service() {
    let mut svc = create_catalog_service(&Configuration::new("it").without_seed());
    assert!(matches!(svc.find_book_by_title("1984"), Err(LibraryError::NotFound { .. })));

    for book in sample_books() {
        svc.add_book(book).expect("should add book");
    }
    svc.sort_books(SortKey::Author);
    let authors: Vec<&str> = svc.find_books().iter().map(|b| b.author.as_str()).collect();
    assert_eq!(vec!["George Orwell", "J.R.R. Tolkien", "J.R.R. Tolkien", "Jane Austen"], authors);

    svc.remove_book("978-0345339683").expect("should remove book");
    assert_eq!(1, svc.find_books_by_author("J.R.R. Tolkien").len());
    assert_eq!(3, svc.count_books());
}
