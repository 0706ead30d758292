use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::EbookCatalogService;
use crate::catalog::domain::matcher::SearchField;
use crate::core::command::{Command, CommandError};

pub struct SearchEbooksCommand<'a> {
    ebook_service: &'a dyn EbookCatalogService,
}

impl<'a> SearchEbooksCommand<'a> {
    pub fn new(ebook_service: &'a dyn EbookCatalogService) -> Self {
        Self {
            ebook_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchEbooksCommandRequest {
    #[serde(default)]
    pub keyword: String,
    pub field: SearchField,
}

impl SearchEbooksCommandRequest {
    pub fn new(keyword: &str, field: SearchField) -> Self {
        Self {
            keyword: keyword.to_string(),
            field,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchEbooksCommandResponse {
    pub field: SearchField,
    pub books: Vec<BookDto>,
}

impl Command<SearchEbooksCommandRequest, SearchEbooksCommandResponse> for SearchEbooksCommand<'_> {
    fn execute(&mut self, req: SearchEbooksCommandRequest) -> Result<SearchEbooksCommandResponse, CommandError> {
        let keyword = req.keyword.as_str();
        let found = match req.field {
            SearchField::Any => self.ebook_service.search(keyword),
            SearchField::Title => self.ebook_service.search_by_title(keyword),
            SearchField::Author => self.ebook_service.search_by_author(keyword),
        };
        let books = found.iter().map(|b| BookDto::from(&**b)).collect();
        Ok(SearchEbooksCommandResponse { field: req.field, books })
    }
}
