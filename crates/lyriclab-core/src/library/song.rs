use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::spec::{SongForm, SongSpec};

use super::ids::{SongId, UserId};

/// How many prior lyrics snapshots the server keeps per song.
pub const MAX_VERSION_HISTORY: usize = 3;

/// Whether a song is still being worked on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongStatus {
    #[default]
    Draft,
    Done,
}

impl SongStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Done => "done",
        }
    }

    /// The other status.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Draft => Self::Done,
            Self::Done => Self::Draft,
        }
    }
}

impl fmt::Display for SongStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SongStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "done" => Ok(Self::Done),
            other => Err(Error::InvalidData(format!("unknown song status: {other}"))),
        }
    }
}

/// A prior version of a song's lyrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSnapshot {
    pub lyrics_text: String,
    pub saved_at: DateTime<Utc>,
}

/// A saved song, as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub song_id: SongId,
    pub user_id: UserId,
    pub title: String,
    pub lyrics_text: String,

    /// The spec the lyrics were generated from.
    #[serde(rename = "song_spec_json", default)]
    pub spec: SongSpec,

    #[serde(default)]
    pub status: SongStatus,

    #[serde(default)]
    pub used_in_final_track: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Oldest first; at most [`MAX_VERSION_HISTORY`] entries.
    #[serde(default)]
    pub version_history: Vec<VersionSnapshot>,
}

impl Song {
    /// Hydrate an editing form from this song's spec.
    #[must_use]
    pub fn form(&self) -> SongForm {
        SongForm::from_spec(self.spec.clone())
    }

    /// Snapshots newest first, as they are usually presented.
    pub fn history_newest_first(&self) -> impl Iterator<Item = &VersionSnapshot> {
        self.version_history.iter().rev()
    }

    /// An update that puts the lyrics of snapshot `index` (as stored,
    /// oldest first) back as the current lyrics. Nothing changes on the
    /// server until the update is sent.
    #[must_use]
    pub fn restore_update(&self, index: usize) -> Option<SongUpdate> {
        self.version_history
            .get(index)
            .map(|snapshot| SongUpdate::new().with_lyrics(snapshot.lyrics_text.clone()))
    }

    /// First non-header, non-blank line of the lyrics.
    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.lyrics_text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('['))
    }
}

/// Payload for creating a song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    pub title: String,
    pub lyrics_text: String,
    pub song_spec: SongSpec,
}

impl NewSong {
    /// Build a creation payload; the title comes from the spec.
    #[must_use]
    pub fn from_spec(spec: &SongSpec, lyrics: impl Into<String>) -> Self {
        Self {
            title: spec.save_title().to_string(),
            lyrics_text: lyrics.into(),
            song_spec: spec.clone(),
        }
    }
}

/// A partial update. Unset fields are left out of the request and keep
/// their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyrics_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_spec: Option<SongSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SongStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_in_final_track: Option<bool>,
}

impl SongUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_lyrics(mut self, lyrics: impl Into<String>) -> Self {
        self.lyrics_text = Some(lyrics.into());
        self
    }

    #[must_use]
    pub fn with_spec(mut self, spec: SongSpec) -> Self {
        self.song_spec = Some(spec);
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: SongStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub const fn with_used_in_final_track(mut self, used: bool) -> Self {
        self.used_in_final_track = Some(used);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.lyrics_text.is_none()
            && self.song_spec.is_none()
            && self.status.is_none()
            && self.used_in_final_track.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "song_id": "song_abc123",
            "user_id": "user_1",
            "title": "Harbor Lights",
            "lyrics_text": "[VERSE 1]\nSalt on the window\n\n[CHORUS]\nHarbor lights",
            "song_spec_json": {"title": "Harbor Lights", "genre": "Folk", "perspective": "We"},
            "status": "done",
            "used_in_final_track": true,
            "created_at": "2025-03-01T10:00:00.123456+00:00",
            "updated_at": "2025-03-02T09:30:00+00:00",
            "version_history": [
                {"lyrics_text": "first draft", "saved_at": "2025-03-01T11:00:00+00:00"},
                {"lyrics_text": "second draft", "saved_at": "2025-03-01T12:00:00+00:00"}
            ]
        })
    }

    #[test]
    fn test_song_from_server_json() {
        let song: Song = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(song.song_id.as_str(), "song_abc123");
        assert_eq!(song.status, SongStatus::Done);
        assert!(song.used_in_final_track);
        assert_eq!(song.spec.genre, "Folk");
        assert_eq!(song.spec.ai_freedom, 50);
        assert_eq!(song.version_history.len(), 2);
    }

    #[test]
    fn test_song_minimal_json() {
        let song: Song = serde_json::from_value(json!({
            "song_id": "song_x",
            "user_id": "user_1",
            "title": "Untitled Song",
            "lyrics_text": "",
            "created_at": "2025-03-01T10:00:00Z",
            "updated_at": "2025-03-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(song.status, SongStatus::Draft);
        assert!(!song.used_in_final_track);
        assert!(song.version_history.is_empty());
    }

    #[test]
    fn test_history_newest_first() {
        let song: Song = serde_json::from_value(sample_json()).unwrap();
        let texts: Vec<&str> = song
            .history_newest_first()
            .map(|v| v.lyrics_text.as_str())
            .collect();
        assert_eq!(texts, vec!["second draft", "first draft"]);
    }

    #[test]
    fn test_restore_update() {
        let song: Song = serde_json::from_value(sample_json()).unwrap();
        let update = song.restore_update(0).unwrap();
        assert_eq!(update.lyrics_text.as_deref(), Some("first draft"));
        assert!(update.title.is_none());
        assert!(song.restore_update(MAX_VERSION_HISTORY).is_none());
    }

    #[test]
    fn test_preview_skips_headers() {
        let song: Song = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(song.preview(), Some("Salt on the window"));
    }

    #[test]
    fn test_form_hydrates_spec() {
        let song: Song = serde_json::from_value(sample_json()).unwrap();
        let form = song.form();
        assert_eq!(form.spec().title, "Harbor Lights");
        assert_eq!(form.structure().len(), 6);
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = SongUpdate::new().with_status(SongStatus::Done);
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({"status": "done"}));
        assert!(!update.is_empty());
        assert!(SongUpdate::new().is_empty());
    }

    #[test]
    fn test_new_song_uses_save_title() {
        let spec = SongSpec::default();
        let new_song = NewSong::from_spec(&spec, "la la");
        assert_eq!(new_song.title, "Untitled Song");
        assert_eq!(new_song.lyrics_text, "la la");
    }

    #[test]
    fn test_status_parse_and_toggle() {
        assert_eq!("DONE".parse::<SongStatus>().unwrap(), SongStatus::Done);
        assert!("archived".parse::<SongStatus>().is_err());
        assert_eq!(SongStatus::Draft.toggled(), SongStatus::Done);
    }
}
