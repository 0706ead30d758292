use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::books::domain::BookRecord;
use crate::core::domain::MatchMode;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum SearchField {
    Any,
    Title,
    Author,
}

impl SearchField {
    pub fn matches<B: BookRecord + ?Sized>(&self, book: &B, keyword: &str, mode: MatchMode) -> bool {
        match self {
            SearchField::Any => {
                mode.matches(book.title(), keyword) || mode.matches(book.author(), keyword)
            }
            SearchField::Title => mode.matches(book.title(), keyword),
            SearchField::Author => mode.matches(book.author(), keyword),
        }
    }
}

impl From<String> for SearchField {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Title" => SearchField::Title,
            "Author" => SearchField::Author,
            _ => SearchField::Any,
        }
    }
}

impl Display for SearchField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchField::Any => write!(f, "Any"),
            SearchField::Title => write!(f, "Title"),
            SearchField::Author => write!(f, "Author"),
        }
    }
}

// Linear scan over books keeping insertion order.
pub fn filter_books<B: BookRecord>(books: &[Arc<B>], keyword: &str,
                                   field: SearchField, mode: MatchMode) -> Vec<Arc<B>> {
    books.iter()
        .filter(|book| {
            let record: &B = book;
            field.matches(record, keyword, mode)
        })
        .cloned()
        .collect()
}
