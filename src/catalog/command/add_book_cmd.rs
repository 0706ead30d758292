use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, url: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            url: url.map(str::to_string),
        }
    }

    pub fn build_book(&self) -> Book {
        match self.url.as_deref() {
            Some(url) => Book::electronic(self.title.as_str(), self.author.as_str(), url),
            None => Book::new(self.title.as_str(), self.author.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        if let Some(url) = req.url.as_deref() {
            if url.is_empty() {
                return Err(CommandError::from(LibraryError::validation(
                    format!("electronic book {:?} has empty url", req.title).as_str(),
                    Some("empty_url".to_string()))));
            }
        }
        let book = Arc::new(req.build_book());
        let dto = BookDto::from(&*book);
        self.catalog_service.add_book(book);
        Ok(AddBookCommandResponse::new(dto))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::service::Catalog;
    use crate::catalog::domain::CatalogService;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookKind;

    #[test]
    fn test_should_run_add_book() {
        let mut catalog = Catalog::new(&Configuration::new());
        let res = AddBookCommand::new(&mut catalog)
            .execute(AddBookCommandRequest::new("Harry Potter", "J.K. Rowling", None))
            .expect("should add book");
        assert_eq!(BookKind::Plain, res.book.kind);
        assert_eq!(1, catalog.all_books().len());
    }

    #[test]
    fn test_should_run_add_electronic_book() {
        let mut catalog = Catalog::new(&Configuration::new());
        let res = AddBookCommand::new(&mut catalog)
            .execute(AddBookCommandRequest::new("Clean Code", "Robert C. Martin", Some("http://example.com/clean-code")))
            .expect("should add book");
        assert_eq!(BookKind::Electronic, res.book.kind);
        assert_eq!(Ok("http://example.com/clean-code"), catalog.all_books()[0].url());
    }

    #[test]
    fn test_should_reject_empty_url() {
        let mut catalog = Catalog::new(&Configuration::new());
        let res = AddBookCommand::new(&mut catalog)
            .execute(AddBookCommandRequest::new("Clean Code", "Robert C. Martin", Some("")));
        assert!(matches!(res, Err(CommandError::Validation{ .. })));
        assert!(catalog.all_books().is_empty());
    }

    #[test]
    fn test_should_parse_request_with_absent_fields() {
        let req: AddBookCommandRequest = serde_json::from_str(r#"{"title":"Harry Potter"}"#).expect("should parse request");
        assert_eq!("", req.author.as_str());
        assert_eq!(None, req.url);
    }
}
