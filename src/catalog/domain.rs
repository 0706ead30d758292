pub mod ebook_service;
pub mod matcher;
pub mod service;

use std::sync::Arc;
use crate::books::domain::model::Book;

// CatalogService stores books in insertion order and searches title or author.
pub trait CatalogService {
    fn add_book(&mut self, book: Arc<Book>);
    fn all_books(&self) -> Vec<Arc<Book>>;
    fn book_at(&self, index: usize) -> Option<&Arc<Book>>;
    fn search(&self, keyword: &str) -> Vec<Arc<Book>>;
}

pub trait SearchByTitle {
    fn search_by_title(&self, keyword: &str) -> Vec<Arc<Book>>;
}

pub trait SearchByAuthor {
    fn search_by_author(&self, keyword: &str) -> Vec<Arc<Book>>;
}

// EbookCatalogService composes the general catalog with the narrow query capabilities.
pub trait EbookCatalogService: CatalogService + SearchByTitle + SearchByAuthor {}

impl<T: CatalogService + SearchByTitle + SearchByAuthor> EbookCatalogService for T {}
