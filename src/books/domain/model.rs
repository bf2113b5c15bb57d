use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity abstracts a catalog record. The isbn is its only identity, two
// records with the same isbn are duplicates whatever the other fields hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub pages: u32,
    pub price: f64,
    pub isbn: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, pages: u32, price: f64, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            pages,
            price,
            isbn: isbn.to_string(),
        }
    }

    /// Case-insensitive substring match on title or author, case-sensitive on isbn.
    /// An empty keyword matches every book.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let lowered = keyword.to_lowercase();
        self.title.to_lowercase().contains(lowered.as_str())
            || self.author.to_lowercase().contains(lowered.as_str())
            || self.isbn.contains(keyword)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> &str {
        self.isbn.as_str()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Title: {}, Author: {}, Pages: {}, Price: ${}, ISBN: {}",
               self.title, self.author, self.pages, format_price(self.price), self.isbn)
    }
}

// Six significant digits with trailing zeros dropped, so 15.0 prints as 15
// and 25.50 as 25.5. Prices of a million or more print as whole numbers.
fn format_price(price: f64) -> String {
    if price == 0.0 || !price.is_finite() {
        return format!("{}", price);
    }
    let digits = price.abs().log10().floor() as i32 + 1;
    let decimals = (6 - digits).max(0) as usize;
    let fixed = format!("{:.*}", decimals, price);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

// CatalogStats summarizes prices and page counts of the whole catalog.
// Averages and extremes are absent for an empty catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_books: usize,
    pub total_value: f64,
    pub average_price: Option<f64>,
    pub average_pages: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_pages: Option<u32>,
    pub max_pages: Option<u32>,
}

impl CatalogStats {
    pub fn from_books(books: &[BookEntity]) -> Self {
        let total_books = books.len();
        let total_value = books.iter().fold(0.0_f64, |acc, b| acc + b.price);
        let total_pages = books.iter().fold(0u64, |acc, b| acc + u64::from(b.pages));
        let average = |total: f64| if total_books == 0 { None } else { Some(total / total_books as f64) };
        Self {
            total_books,
            total_value,
            average_price: average(total_value),
            average_pages: average(total_pages as f64),
            min_price: books.iter().map(|b| b.price).reduce(f64::min),
            max_price: books.iter().map(|b| b.price).reduce(f64::max),
            min_pages: books.iter().map(|b| b.pages).min(),
            max_pages: books.iter().map(|b| b.pages).max(),
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::{format_price, BookEntity, CatalogStats};
    use crate::core::domain::Identifiable;
    use crate::core::library::SortKey;

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new("1984", "George Orwell", 328, 10.20, "X1");
        assert_eq!("X1", book.id());
        assert_eq!("1984", book.sort_value(SortKey::Title));
        assert_eq!("George Orwell", book.sort_value(SortKey::Author));
    }

    #[test]
    fn test_should_display_book() {
        let book = BookEntity::new("The Hobbit", "J.R.R. Tolkien", 310, 15.0, "978-0345339683");
        assert_eq!("Title: The Hobbit, Author: J.R.R. Tolkien, Pages: 310, Price: $15, ISBN: 978-0345339683",
                   book.to_string());
    }

    #[test]
    fn test_should_format_price_without_trailing_zeros() {
        assert_eq!("25.5", format_price(25.50));
        assert_eq!("15", format_price(15.00));
        assert_eq!("10.2", format_price(10.20));
        assert_eq!("12.75", format_price(12.75));
        assert_eq!("0.3", format_price(0.1 + 0.2));
        assert_eq!("0", format_price(0.0));
        assert_eq!("1234.57", format_price(1234.5678));
    }

    #[test]
    fn test_should_match_keyword() {
        let book = BookEntity::new("The Hobbit", "J.R.R. Tolkien", 310, 15.0, "978-0345339683");
        assert!(book.matches_keyword("hobbit"));
        assert!(book.matches_keyword("TOLKIEN"));
        assert!(book.matches_keyword("0345"));
        assert!(book.matches_keyword(""));
        assert!(!book.matches_keyword("austen"));
    }

    #[test]
    fn test_should_summarize_books() {
        let books = vec![
            BookEntity::new("a", "x", 300, 20.0, "1"),
            BookEntity::new("b", "y", 100, 5.0, "2"),
            BookEntity::new("c", "z", 200, 11.0, "3"),
        ];
        let stats = CatalogStats::from_books(&books);
        assert_eq!(3, stats.total_books);
        assert_eq!(36.0, stats.total_value);
        assert_eq!(Some(12.0), stats.average_price);
        assert_eq!(Some(200.0), stats.average_pages);
        assert_eq!(Some(5.0), stats.min_price);
        assert_eq!(Some(20.0), stats.max_price);
        assert_eq!(Some(100), stats.min_pages);
        assert_eq!(Some(300), stats.max_pages);
    }

    #[test]
    fn test_should_summarize_empty_catalog() {
        let stats = CatalogStats::from_books(&[]);
        assert_eq!(0, stats.total_books);
        assert_eq!(0.0, stats.total_value);
        assert_eq!(None, stats.average_price);
        assert_eq!(None, stats.average_pages);
        assert_eq!(None, stats.min_price);
        assert_eq!(None, stats.max_price);
        assert_eq!(None, stats.min_pages);
        assert_eq!(None, stats.max_pages);
    }
}
