use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which screen the reader is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "RawLocation")]
pub enum Location {
    Library,
    /// An open book.
    #[default]
    Book,
    GoToPage,
    SystemMenu,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Library,
        Location::Book,
        Location::GoToPage,
        Location::SystemMenu,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Location::Library => "library",
            Location::Book => "book",
            Location::GoToPage => "go_to_page",
            Location::SystemMenu => "system_menu",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|location| location.as_str() == s)
            .ok_or_else(|| format!("unknown location '{}'", s))
    }
}

/// Persisted form of a location.
///
/// Older state files stored an open book as its bare index instead of a
/// name; any integer is read back as [`Location::Book`].
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLocation {
    Name(String),
    Index(i64),
}

impl TryFrom<RawLocation> for Location {
    type Error = String;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        match raw {
            RawLocation::Name(name) => name.parse(),
            RawLocation::Index(index) => {
                tracing::debug!(index, "numeric location read as book");
                Ok(Location::Book)
            }
        }
    }
}
