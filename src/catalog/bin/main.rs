use std::error::Error;
use std::io::Write;
use std::sync::Arc;
use tracing::info;
use book_catalog::books::domain::model::Book;
use book_catalog::catalog::command::get_ebook_url_cmd::{GetEbookUrlCommand, GetEbookUrlCommandRequest};
use book_catalog::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use book_catalog::catalog::command::search_ebooks_cmd::{SearchEbooksCommand, SearchEbooksCommandRequest};
use book_catalog::catalog::domain::CatalogService;
use book_catalog::catalog::domain::matcher::SearchField;
use book_catalog::catalog::factory::{create_catalog_service, create_ebook_catalog_service};
use book_catalog::core::command::Command;
use book_catalog::core::domain::{Configuration, MatchMode};
use book_catalog::utils::logs::setup_tracing;

const MATCH_MODE_VAR: &str = "CATALOG_MATCH_MODE";

fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let match_mode = std::env::var(MATCH_MODE_VAR).map(MatchMode::from).unwrap_or_default();
    let config = Configuration::new().with_match_mode(match_mode);
    info!(match_mode = %config.match_mode, "starting catalog demo");

    let mut stdout = std::io::stdout();
    run_demo(&config, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

// Writes the "Books:" listing for "Harry" followed by the Clean Code url without a trailing newline.
fn run_demo<W: Write>(config: &Configuration, out: &mut W) -> Result<(), Box<dyn Error>> {
    let mut library = create_catalog_service(config);
    library.add_book(Arc::new(Book::new("Harry Potter", "J.K. Rowling")));
    library.add_book(Arc::new(Book::new("Lord of the Rings", "J.R.R. Tolkien")));

    let found = SearchBooksCommand::new(library.as_ref())
        .execute(SearchBooksCommandRequest::new("Harry"))
        .map_err(|err| format!("search failed {:?}", err))?;
    writeln!(out, "Books:")?;
    for book in found.books.iter() {
        writeln!(out, "{} - {}", book.title, book.author)?;
    }

    let mut ebook_library = create_ebook_catalog_service(config);
    ebook_library.add_book(Arc::new(Book::electronic(
        "Clean Code", "Robert C. Martin", "http://example.com/clean-code")));

    for field in [SearchField::Title, SearchField::Author] {
        let res = SearchEbooksCommand::new(ebook_library.as_ref())
            .execute(SearchEbooksCommandRequest::new("Code", field))
            .map_err(|err| format!("ebook search failed {:?}", err))?;
        info!(keyword = "Code", field = %res.field, matched = res.books.len(), "ebook catalog searched");
    }

    let ebook = GetEbookUrlCommand::new(ebook_library.as_ref())
        .execute(GetEbookUrlCommandRequest::new(0))
        .map_err(|err| format!("url lookup failed {:?}", err))?;
    write!(out, "{}", ebook.url)?;

    info!(books = library.all_books().len(), ebooks = ebook_library.all_books().len(), "catalog demo finished");
    Ok(())
}
