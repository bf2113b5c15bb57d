use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {}

impl ListBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookEntity>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'_> {
    fn execute(&mut self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        Ok(ListBooksCommandResponse::new(self.catalog_service.find_books().to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_list_books() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let res = ListBooksCommand::new(svc.as_ref()).execute(ListBooksCommandRequest::new())
            .expect("should list books");
        assert_eq!(4, res.books.len());
        assert_eq!("The Lord of the Rings", res.books[0].title.as_str());
    }

    #[test]
    fn test_should_list_empty_catalog() {
        let svc = factory::create_catalog_service(&Configuration::new("test").without_seed());
        let res = ListBooksCommand::new(svc.as_ref()).execute(ListBooksCommandRequest::new())
            .expect("should list books");
        assert!(res.books.is_empty());
    }
}
