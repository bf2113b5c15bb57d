use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBooksByAuthorCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> FindBooksByAuthorCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBooksByAuthorCommandRequest {
    pub author: String,
}

impl FindBooksByAuthorCommandRequest {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct FindBooksByAuthorCommandResponse {
    pub author: String,
    pub books: Vec<BookEntity>,
}

impl FindBooksByAuthorCommandResponse {
    pub fn new(author: String, books: Vec<BookEntity>) -> Self {
        Self {
            author,
            books,
        }
    }
}

impl Command<FindBooksByAuthorCommandRequest, FindBooksByAuthorCommandResponse> for FindBooksByAuthorCommand<'_> {
    fn execute(&mut self, req: FindBooksByAuthorCommandRequest) -> Result<FindBooksByAuthorCommandResponse, CommandError> {
        let books = self.catalog_service.find_books_by_author(req.author.as_str())
            .into_iter().cloned().collect();
        Ok(FindBooksByAuthorCommandResponse::new(req.author, books))
    }
}
