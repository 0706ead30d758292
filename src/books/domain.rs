pub mod model;

// BookRecord is the capability every catalog search relies on: a title and an author.
pub trait BookRecord {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
}
