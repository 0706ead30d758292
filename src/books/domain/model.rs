use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::warn;
use crate::books::domain::BookRecord;
use crate::core::library::{BookKind, LibraryError, LibraryResult};

// BookFormat tags which shape of book a record holds. Fields shared by every
// format (title, author) live on Book itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFormat {
    Plain,
    Electronic { url: String },
}

impl BookFormat {
    pub fn kind(&self) -> BookKind {
        match self {
            BookFormat::Plain => BookKind::Plain,
            BookFormat::Electronic { .. } => BookKind::Electronic,
        }
    }
}

// Book is the element type stored and returned by every catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    format: BookFormat,
}

impl Book {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            format: BookFormat::Plain,
        }
    }

    pub fn electronic(title: &str, author: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            format: BookFormat::Electronic { url: url.to_string() },
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = author.to_string();
    }

    pub fn format(&self) -> &BookFormat {
        &self.format
    }

    pub fn kind(&self) -> BookKind {
        self.format.kind()
    }

    pub fn is_electronic(&self) -> bool {
        matches!(self.format, BookFormat::Electronic { .. })
    }

    /// Returns the resource locator of an electronic book.
    ///
    /// Fails with [`LibraryError::TypeMismatch`] when the book is not electronic.
    pub fn url(&self) -> LibraryResult<&str> {
        match &self.format {
            BookFormat::Electronic { url } => Ok(url.as_str()),
            BookFormat::Plain => {
                warn!(title = self.title.as_str(), "url requested from a plain book");
                Err(LibraryError::type_mismatch(
                    format!("book {:?} has no url", self.title).as_str(),
                    BookKind::Electronic, BookKind::Plain))
            }
        }
    }
}

impl BookRecord for Book {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.author)
    }
}

// ElectronicBook is the narrowed view of a Book carrying a url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectronicBook {
    pub title: String,
    pub author: String,
    pub url: String,
}

impl ElectronicBook {
    pub fn new(title: &str, author: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            url: url.to_string(),
        }
    }
}

impl BookRecord for ElectronicBook {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}

impl From<ElectronicBook> for Book {
    fn from(other: ElectronicBook) -> Self {
        Self {
            title: other.title,
            author: other.author,
            format: BookFormat::Electronic { url: other.url },
        }
    }
}

impl TryFrom<&Book> for ElectronicBook {
    type Error = LibraryError;

    fn try_from(other: &Book) -> Result<Self, Self::Error> {
        let url = other.url()?;
        Ok(Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::BookRecord;
    use crate::books::domain::model::{Book, BookFormat, ElectronicBook};
    use crate::core::library::{BookKind, LibraryError};

    #[test]
    fn test_should_build_books() {
        let book = Book::new("Harry Potter", "J.K. Rowling");
        assert_eq!("Harry Potter", book.title());
        assert_eq!("J.K. Rowling", book.author());
        assert_eq!(BookKind::Plain, book.kind());
        assert!(!book.is_electronic());
        assert_eq!("Harry Potter - J.K. Rowling", book.to_string());
    }

    #[test]
    fn test_should_update_book_fields() {
        let mut book = Book::electronic("Clean Code", "Robert C. Martin", "http://example.com/clean-code");
        book.set_title("Clean Architecture");
        book.set_author("Uncle Bob");
        assert_eq!("Clean Architecture", book.title());
        assert_eq!("Uncle Bob", book.author());
        assert_eq!(Ok("http://example.com/clean-code"), book.url());

        book.set_title("");
        assert_eq!("", book.title());
    }

    #[test]
    fn test_should_accept_empty_fields() {
        let book = Book::new("", "");
        assert_eq!("", book.title());
        assert_eq!("", book.author());
        assert_eq!(" - ", book.to_string());
    }

    #[test]
    fn test_should_build_electronic_books() {
        let book = Book::electronic("Clean Code", "Robert C. Martin", "http://example.com/clean-code");
        assert_eq!(BookKind::Electronic, book.kind());
        assert!(book.is_electronic());
        assert_eq!(Ok("http://example.com/clean-code"), book.url());
        assert_eq!(&BookFormat::Electronic { url: "http://example.com/clean-code".to_string() }, book.format());
    }

    #[test]
    fn test_should_fail_url_of_plain_book() {
        let book = Book::new("Harry Potter", "J.K. Rowling");
        assert!(matches!(book.url(), Err(LibraryError::TypeMismatch{ expected: BookKind::Electronic, actual: BookKind::Plain, .. })));
    }

    #[test]
    fn test_should_widen_and_narrow_electronic_books() {
        let ebook = ElectronicBook::new("Clean Code", "Robert C. Martin", "http://example.com/clean-code");
        let book = Book::from(ebook.clone());
        assert_eq!(Book::electronic("Clean Code", "Robert C. Martin", "http://example.com/clean-code"), book);

        let narrowed = ElectronicBook::try_from(&book).expect("should narrow electronic book");
        assert_eq!(ebook, narrowed);
        assert_eq!(book.title(), narrowed.title());
        assert_eq!(book.author(), narrowed.author());
    }

    #[test]
    fn test_should_not_narrow_plain_books() {
        let book = Book::new("Lord of the Rings", "J.R.R. Tolkien");
        let res = ElectronicBook::try_from(&book);
        assert!(matches!(res, Err(LibraryError::TypeMismatch{ .. })));
    }
}
