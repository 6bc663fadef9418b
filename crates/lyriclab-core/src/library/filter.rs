use std::str::FromStr;

use crate::error::{Error, Result};

use super::song::{Song, SongStatus};

/// Status criterion for the library view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SongStatus),
}

/// Usage criterion for the library view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UsedFilter {
    #[default]
    All,
    Used,
    Unused,
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl FromStr for UsedFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "used" => Ok(Self::Used),
            "unused" => Ok(Self::Unused),
            other => Err(Error::InvalidData(format!("unknown usage filter: {other}"))),
        }
    }
}

/// Search and filter criteria for the song library. All criteria must
/// match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryFilter {
    /// Case-insensitive title substring; empty matches everything.
    pub query: String,
    pub status: StatusFilter,
    pub used: UsedFilter,
}

impl LibraryFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn with_used(mut self, used: UsedFilter) -> Self {
        self.used = used;
        self
    }

    #[must_use]
    pub fn matches(&self, song: &Song) -> bool {
        let matches_query = song
            .title
            .to_lowercase()
            .contains(&self.query.to_lowercase());
        let matches_status = match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => song.status == status,
        };
        let matches_used = match self.used {
            UsedFilter::All => true,
            UsedFilter::Used => song.used_in_final_track,
            UsedFilter::Unused => !song.used_in_final_track,
        };
        matches_query && matches_status && matches_used
    }

    /// Songs that pass the filter, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, songs: &'a [Song]) -> Vec<&'a Song> {
        songs.iter().filter(|song| self.matches(song)).collect()
    }
}
