use crate::core::domain::Identifiable;
use crate::core::library::SortKey;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;

    fn sort_value(&self, key: SortKey) -> &str {
        match key {
            SortKey::Title => self.title(),
            SortKey::Author => self.author(),
        }
    }
}
