use std::sync::Arc;
use tracing::debug;
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::matcher::{filter_books, SearchField};
use crate::core::domain::{Configuration, MatchMode};

// Catalog holds books in insertion order. Duplicates are kept and nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Arc<Book>>,
    match_mode: MatchMode,
}

impl Catalog {
    pub fn new(config: &Configuration) -> Self {
        Self {
            books: Vec::new(),
            match_mode: config.match_mode,
        }
    }

    pub fn insert(&mut self, book: impl Into<Arc<Book>>) {
        self.books.push(book.into());
        debug!(size = self.books.len(), "book inserted");
    }

    pub fn books(&self) -> &[Arc<Book>] {
        self.books.as_slice()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub(crate) fn search_field(&self, keyword: &str, field: SearchField) -> Vec<Arc<Book>> {
        let res = filter_books(&self.books, keyword, field, self.match_mode);
        debug!(keyword, field = %field, matched = res.len(), scanned = self.books.len(), "catalog searched");
        res
    }
}

impl CatalogService for Catalog {
    fn add_book(&mut self, book: Arc<Book>) {
        self.insert(book)
    }

    fn all_books(&self) -> Vec<Arc<Book>> {
        self.books.clone()
    }

    fn book_at(&self, index: usize) -> Option<&Arc<Book>> {
        self.books.get(index)
    }

    fn search(&self, keyword: &str) -> Vec<Arc<Book>> {
        self.search_field(keyword, SearchField::Any)
    }
}
