use std::sync::Arc;
use crate::books::domain::model::Book;
use crate::catalog::domain::{CatalogService, SearchByAuthor, SearchByTitle};
use crate::catalog::domain::matcher::SearchField;
use crate::catalog::domain::service::Catalog;
use crate::core::domain::Configuration;

// ElectronicCatalog wraps a Catalog and adds title-only and author-only queries
// over the same backing sequence.
#[derive(Debug, Clone, Default)]
pub struct ElectronicCatalog {
    catalog: Catalog,
}

impl ElectronicCatalog {
    pub fn new(config: &Configuration) -> Self {
        Self {
            catalog: Catalog::new(config),
        }
    }

    pub fn insert(&mut self, book: impl Into<Arc<Book>>) {
        self.catalog.insert(book)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl From<Catalog> for ElectronicCatalog {
    fn from(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogService for ElectronicCatalog {
    fn add_book(&mut self, book: Arc<Book>) {
        self.catalog.add_book(book)
    }

    fn all_books(&self) -> Vec<Arc<Book>> {
        self.catalog.all_books()
    }

    fn book_at(&self, index: usize) -> Option<&Arc<Book>> {
        self.catalog.book_at(index)
    }

    fn search(&self, keyword: &str) -> Vec<Arc<Book>> {
        self.catalog.search(keyword)
    }
}

impl SearchByTitle for ElectronicCatalog {
    fn search_by_title(&self, keyword: &str) -> Vec<Arc<Book>> {
        self.catalog.search_field(keyword, SearchField::Title)
    }
}

impl SearchByAuthor for ElectronicCatalog {
    fn search_by_author(&self, keyword: &str) -> Vec<Arc<Book>> {
        self.catalog.search_field(keyword, SearchField::Author)
    }
}
