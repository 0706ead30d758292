pub mod add_book_cmd;
pub mod get_ebook_url_cmd;
pub mod search_books_cmd;
pub mod search_ebooks_cmd;
