use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBookByTitleCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBookByTitleCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBookByTitleCommandRequest {
    pub title: String,
}

impl SearchBookByTitleCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct SearchBookByTitleCommandResponse {
    pub book: BookEntity,
}

impl SearchBookByTitleCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

impl Command<SearchBookByTitleCommandRequest, SearchBookByTitleCommandResponse> for SearchBookByTitleCommand<'_> {
    fn execute(&mut self, req: SearchBookByTitleCommandRequest) -> Result<SearchBookByTitleCommandResponse, CommandError> {
        self.catalog_service.find_book_by_title(req.title.as_str())
            .map_err(CommandError::from).map(|b| SearchBookByTitleCommandResponse::new(b.clone()))
    }
}
