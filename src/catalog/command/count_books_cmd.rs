use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct CountBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> CountBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CountBooksCommandRequest {}

impl CountBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug, Serialize)]
pub struct CountBooksCommandResponse {
    pub count: usize,
}

impl CountBooksCommandResponse {
    pub fn new(count: usize) -> Self {
        Self {
            count,
        }
    }
}

impl Command<CountBooksCommandRequest, CountBooksCommandResponse> for CountBooksCommand<'_> {
    fn execute(&mut self, _req: CountBooksCommandRequest) -> Result<CountBooksCommandResponse, CommandError> {
        Ok(CountBooksCommandResponse::new(self.catalog_service.count_books()))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::count_books_cmd::{CountBooksCommand, CountBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_count_books() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let res = CountBooksCommand::new(svc.as_ref()).execute(CountBooksCommandRequest::new())
            .expect("should count books");
        assert_eq!(4, res.count);
    }
}
