use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::books::domain::model::ElectronicBook;
use crate::catalog::domain::EbookCatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;

// GetEbookUrlCommand narrows the book at a catalog position to an electronic book.
pub struct GetEbookUrlCommand<'a> {
    ebook_service: &'a dyn EbookCatalogService,
}

impl<'a> GetEbookUrlCommand<'a> {
    pub fn new(ebook_service: &'a dyn EbookCatalogService) -> Self {
        Self {
            ebook_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetEbookUrlCommandRequest {
    pub index: usize,
}

impl GetEbookUrlCommandRequest {
    pub fn new(index: usize) -> Self {
        Self {
            index,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetEbookUrlCommandResponse {
    pub title: String,
    pub url: String,
}

impl Command<GetEbookUrlCommandRequest, GetEbookUrlCommandResponse> for GetEbookUrlCommand<'_> {
    fn execute(&mut self, req: GetEbookUrlCommandRequest) -> Result<GetEbookUrlCommandResponse, CommandError> {
        let book = self.ebook_service.book_at(req.index).ok_or_else(|| {
            warn!(index = req.index, "book position out of range");
            LibraryError::validation(
                format!("no book at position {}", req.index).as_str(),
                Some("out_of_range".to_string()))
        })?;
        let ebook = ElectronicBook::try_from(&**book)?;
        Ok(GetEbookUrlCommandResponse { title: ebook.title, url: ebook.url })
    }
}
