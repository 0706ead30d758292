use serde::{Deserialize, Serialize};
use crate::books::domain::BookRecord;
use crate::books::domain::model::{Book, BookFormat};
use crate::core::library::{BookKind, LibraryError, LibraryResult};

// BookDto is a data transfer object for Catalog service.
// Absent title or author fields deserialize to the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub kind: BookKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl BookDto {
    pub fn new(title: &str, author: &str, url: Option<&str>) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            kind: if url.is_some() { BookKind::Electronic } else { BookKind::Plain },
            url: url.map(str::to_string),
        }
    }

    pub fn from_json(json: &str) -> LibraryResult<BookDto> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> LibraryResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl BookRecord for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}

impl From<&Book> for BookDto {
    fn from(other: &Book) -> Self {
        let url = match other.format() {
            BookFormat::Plain => None,
            BookFormat::Electronic { url } => Some(url.to_string()),
        };
        Self {
            title: other.title().to_string(),
            author: other.author().to_string(),
            kind: other.kind(),
            url,
        }
    }
}

impl TryFrom<&BookDto> for Book {
    type Error = LibraryError;

    fn try_from(other: &BookDto) -> Result<Self, Self::Error> {
        match (other.kind, other.url.as_deref()) {
            (BookKind::Plain, _) => Ok(Book::new(other.title.as_str(), other.author.as_str())),
            (BookKind::Electronic, Some(url)) => {
                Ok(Book::electronic(other.title.as_str(), other.author.as_str(), url))
            }
            (BookKind::Electronic, None) => Err(LibraryError::validation(
                format!("electronic book {:?} is missing url", other.title).as_str(),
                Some("missing_url".to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Book;
    use crate::books::dto::BookDto;
    use crate::core::library::{BookKind, LibraryError};

    #[test]
    fn test_should_build_books() {
        let book = BookDto::new("Harry Potter", "J.K. Rowling", None);
        assert_eq!("Harry Potter", book.title.as_str());
        assert_eq!(BookKind::Plain, book.kind);

        let ebook = BookDto::new("Clean Code", "Robert C. Martin", Some("http://example.com/clean-code"));
        assert_eq!(BookKind::Electronic, ebook.kind);
        assert_eq!(Some("http://example.com/clean-code"), ebook.url.as_deref());
    }

    #[test]
    fn test_should_convert_books() {
        let book = Book::electronic("Clean Code", "Robert C. Martin", "http://example.com/clean-code");
        let dto = BookDto::from(&book);
        assert_eq!(BookDto::new("Clean Code", "Robert C. Martin", Some("http://example.com/clean-code")), dto);
        assert_eq!(book, Book::try_from(&dto).expect("should convert dto"));

        let book = Book::new("Harry Potter", "J.K. Rowling");
        assert_eq!(book, Book::try_from(&BookDto::from(&book)).expect("should convert dto"));
    }

    #[test]
    fn test_should_reject_electronic_without_url() {
        let dto = BookDto { title: "Clean Code".to_string(), author: "".to_string(), kind: BookKind::Electronic, url: None };
        assert!(matches!(Book::try_from(&dto), Err(LibraryError::Validation{ .. })));
    }

    #[test]
    fn test_should_default_absent_fields_to_empty() {
        let dto = BookDto::from_json(r#"{"kind":"Plain"}"#).expect("should parse book");
        assert_eq!("", dto.title.as_str());
        assert_eq!("", dto.author.as_str());
        assert_eq!(None, dto.url);
    }

    #[test]
    fn test_should_serialize_books() {
        let dto = BookDto::new("Harry Potter", "J.K. Rowling", None);
        let json = dto.to_json().expect("should serialize book");
        assert_eq!(r#"{"title":"Harry Potter","author":"J.K. Rowling","kind":"Plain"}"#, json.as_str());
        assert_eq!(dto, BookDto::from_json(json.as_str()).expect("should parse book"));
    }

    #[test]
    fn test_should_fail_on_malformed_json() {
        assert!(matches!(BookDto::from_json("{\"title\":"), Err(LibraryError::Serialization{ .. })));
    }
}
