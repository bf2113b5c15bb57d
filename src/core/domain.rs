use serde::{Deserialize, Serialize};

// Identifiable defines the key shared by objects kept in a repository
pub trait Identifiable {
    fn id(&self) -> &str;
}


// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub seed_books: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            seed_books: true,
        }
    }

    pub fn without_seed(mut self) -> Self {
        self.seed_books = false;
        self
    }
}
