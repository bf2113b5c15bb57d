use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::SortKey;

pub struct SortBooksCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> SortBooksCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SortBooksCommandRequest {
    pub key: SortKey,
}

impl SortBooksCommandRequest {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct SortBooksCommandResponse {
    pub key: SortKey,
    pub books: Vec<BookEntity>,
}

impl SortBooksCommandResponse {
    pub fn new(key: SortKey, books: Vec<BookEntity>) -> Self {
        Self {
            key,
            books,
        }
    }
}

impl Command<SortBooksCommandRequest, SortBooksCommandResponse> for SortBooksCommand<'_> {
    fn execute(&mut self, req: SortBooksCommandRequest) -> Result<SortBooksCommandResponse, CommandError> {
        self.catalog_service.sort_books(req.key);
        Ok(SortBooksCommandResponse::new(req.key, self.catalog_service.find_books().to_vec()))
    }
}
