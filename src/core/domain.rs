use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// MatchMode decides how a keyword is compared against title and author
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum MatchMode {
    CaseSensitive,
    AsciiCaseInsensitive,
}

impl MatchMode {
    // returns true if keyword occurs as a contiguous substring of field
    pub fn matches(&self, field: &str, keyword: &str) -> bool {
        match self {
            MatchMode::CaseSensitive => field.contains(keyword),
            MatchMode::AsciiCaseInsensitive => {
                field.to_ascii_lowercase().contains(keyword.to_ascii_lowercase().as_str())
            }
        }
    }
}

impl Default for MatchMode {
    fn default() -> Self {
        MatchMode::CaseSensitive
    }
}

impl From<String> for MatchMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "AsciiCaseInsensitive" => MatchMode::AsciiCaseInsensitive,
            _ => MatchMode::CaseSensitive,
        }
    }
}

impl Display for MatchMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MatchMode::CaseSensitive => write!(f, "CaseSensitive"),
            MatchMode::AsciiCaseInsensitive => write!(f, "AsciiCaseInsensitive"),
        }
    }
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Configuration {
    pub match_mode: MatchMode,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            match_mode: MatchMode::default(),
        }
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }
}
