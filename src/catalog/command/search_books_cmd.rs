use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

// SearchBooksCommand matches a keyword against title, author and isbn
pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub keyword: String,
}

impl SearchBooksCommandRequest {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub keyword: String,
    pub books: Vec<BookEntity>,
}

impl SearchBooksCommandResponse {
    pub fn new(keyword: &str, books: Vec<BookEntity>) -> Self {
        Self {
            keyword: keyword.to_string(),
            books,
        }
    }
}

impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'_> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = self.catalog_service.search_books(req.keyword.as_str())
            .into_iter().cloned().collect();
        Ok(SearchBooksCommandResponse::new(req.keyword.as_str(), books))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_search_books() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let res = SearchBooksCommand::new(svc.as_ref())
            .execute(SearchBooksCommandRequest::new("tolkien")).expect("should search books");
        assert_eq!("tolkien", res.keyword.as_str());
        let isbns: Vec<&str> = res.books.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(vec!["978-0618053267", "978-0345339683"], isbns);
    }

    #[test]
    fn test_should_return_all_books_for_empty_keyword() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let res = SearchBooksCommand::new(svc.as_ref())
            .execute(SearchBooksCommandRequest::new("")).expect("should search books");
        assert_eq!(4, res.books.len());
    }
}
