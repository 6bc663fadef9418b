//! The lyrics editing session: the spec form, the lyrics being worked on,
//! and the actions that send them to the backend.
//!
//! Every action checks its preconditions first and issues no request when
//! they fail. A failed request leaves the session exactly as it was.

use std::fmt;

use lyriclab_core::lyrics::has_content;
use lyriclab_core::{NewSong, Song, SongForm, SongId, SongStatus, SongUpdate, SpecUpdate};

use crate::backend::LyricsBackend;
use crate::error::{ApiError, ApiResult};
use crate::lyrics::{TransformOptions, Variation};

/// How a [`Notice`] should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
}

/// A short message describing the outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// One song being written.
#[derive(Debug)]
pub struct Studio<B> {
    backend: B,
    form: SongForm,
    lyrics: String,
    current_song: Option<SongId>,
    variations: Vec<Variation>,
}

impl<B: LyricsBackend> Studio<B> {
    /// A blank session with the default spec.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            form: SongForm::new(),
            lyrics: String::new(),
            current_song: None,
            variations: Vec::new(),
        }
    }

    /// A session continuing a saved song.
    pub fn from_song(backend: B, song: &Song) -> Self {
        Self {
            backend,
            form: song.form(),
            lyrics: song.lyrics_text.clone(),
            current_song: Some(song.song_id.clone()),
            variations: Vec::new(),
        }
    }

    /// A session starting from an existing form, e.g. one read from a spec
    /// file.
    #[must_use]
    pub fn with_form(mut self, form: SongForm) -> Self {
        self.form = form;
        self
    }

    #[must_use]
    pub fn with_lyrics(mut self, lyrics: impl Into<String>) -> Self {
        self.lyrics = lyrics.into();
        self
    }

    #[must_use]
    pub fn with_current_song(mut self, id: Option<SongId>) -> Self {
        self.current_song = id;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn form(&self) -> &SongForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SongForm {
        &mut self.form
    }

    pub fn update_field(&mut self, update: SpecUpdate) {
        self.form.update_field(update);
    }

    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }

    /// Direct edit of the lyrics text.
    pub fn set_lyrics(&mut self, lyrics: impl Into<String>) {
        self.lyrics = lyrics.into();
    }

    pub fn current_song_id(&self) -> Option<&SongId> {
        self.current_song.as_ref()
    }

    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    fn require_lyrics(&self, action: &'static str) -> ApiResult<()> {
        if has_content(&self.lyrics) {
            Ok(())
        } else {
            log::debug!("Skipping {}: no lyrics", action);
            Err(ApiError::EmptyLyrics { action })
        }
    }

    /// Write new lyrics from the spec alone.
    pub async fn generate(&mut self) -> ApiResult<Notice> {
        let lyrics = self.backend.generate(self.form.spec()).await?;
        self.lyrics = lyrics;
        Ok(Notice::success("Lyrics generated!"))
    }

    /// Rewrite the whole song.
    pub async fn rewrite(&mut self) -> ApiResult<Notice> {
        self.require_lyrics("rewrite")?;
        let lyrics = self
            .backend
            .rewrite(self.form.spec(), &self.lyrics)
            .await?;
        self.lyrics = lyrics;
        Ok(Notice::success("Lyrics rewritten!"))
    }

    /// Rewrite one section. `rhyme_override` is usually built with
    /// [`join_rhyme_overrides`](crate::lyrics::join_rhyme_overrides).
    pub async fn rewrite_section(
        &mut self,
        section: &str,
        rhyme_override: Option<&str>,
    ) -> ApiResult<Notice> {
        self.require_lyrics("rewrite")?;
        let lyrics = self
            .backend
            .rewrite_section(self.form.spec(), &self.lyrics, section, rhyme_override)
            .await?;
        self.lyrics = lyrics;
        let message = match rhyme_override {
            Some(scheme) => format!("{section} rewritten with {scheme} rhyme scheme!"),
            None => format!("{section} rewritten!"),
        };
        Ok(Notice::success(message))
    }

    /// Ask for alternatives. They replace any previous ones and stay
    /// available until one is selected or a new song is started.
    pub async fn generate_variations(
        &mut self,
        section: Option<&str>,
        rhyme_override: Option<&str>,
        count: u8,
    ) -> ApiResult<Notice> {
        self.require_lyrics("generate variations from")?;
        let set = self
            .backend
            .variations(
                self.form.spec(),
                &self.lyrics,
                section,
                rhyme_override,
                count,
            )
            .await?;
        if set.total_generated < set.total_requested {
            log::warn!(
                "Only {} of {} variations were generated",
                set.total_generated,
                set.total_requested
            );
        }
        self.variations = set.variations;
        if self.variations.is_empty() {
            Ok(Notice::warning("Could not generate variations"))
        } else {
            Ok(Notice::success(format!(
                "Generated {} variations!",
                self.variations.len()
            )))
        }
    }

    /// Replace the lyrics with the variation at `position` in
    /// [`Studio::variations`] and discard the rest.
    pub fn select_variation(&mut self, position: usize) -> Option<Notice> {
        if position >= self.variations.len() {
            return None;
        }
        let chosen = self.variations.swap_remove(position);
        self.lyrics = chosen.lyrics;
        self.variations.clear();
        Some(Notice::success("Variation applied"))
    }

    /// Apply free-text instructions to a section or, with `None`, the whole
    /// song.
    pub async fn custom_edit(&mut self, section: Option<&str>, prompt: &str) -> ApiResult<Notice> {
        self.require_lyrics("edit")?;
        if !has_content(prompt) {
            return Err(ApiError::EmptyPrompt);
        }
        let lyrics = self
            .backend
            .custom_edit(self.form.spec(), &self.lyrics, section, prompt)
            .await?;
        self.lyrics = lyrics;
        let message = match section {
            Some(section) => format!("{section} edited!"),
            None => "Song edited!".to_string(),
        };
        Ok(Notice::success(message))
    }

    pub async fn transform(&mut self, options: &TransformOptions) -> ApiResult<Notice> {
        self.require_lyrics("transform")?;
        let lyrics = self.backend.transform(&self.lyrics, options).await?;
        self.lyrics = lyrics;
        Ok(Notice::success("Lyrics transformed!"))
    }

    /// Save the lyrics and spec. Creates the song when the session has no
    /// song yet and updates it otherwise. Marking a new song done takes a
    /// second request after the create.
    pub async fn save(&mut self, status: SongStatus) -> ApiResult<Notice> {
        self.require_lyrics("save")?;
        let spec = self.form.spec();

        if let Some(id) = &self.current_song {
            let update = SongUpdate::new()
                .with_title(spec.save_title())
                .with_lyrics(self.lyrics.clone())
                .with_spec(spec.clone())
                .with_status(status);
            self.backend.update_song(id, &update).await?;
            return Ok(Notice::success(match status {
                SongStatus::Done => "Song marked as done!",
                SongStatus::Draft => "Draft saved!",
            }));
        }

        let created = self
            .backend
            .create_song(&NewSong::from_spec(spec, self.lyrics.clone()))
            .await?;
        self.current_song = Some(created.song_id.clone());

        match status {
            SongStatus::Done => {
                let update = SongUpdate::new().with_status(SongStatus::Done);
                self.backend.update_song(&created.song_id, &update).await?;
                Ok(Notice::success("Song saved and marked as done!"))
            }
            SongStatus::Draft => Ok(Notice::success("Draft saved!")),
        }
    }

    /// Start over: default spec, no lyrics, no saved song, no variations.
    pub fn new_song(&mut self) {
        self.form.reset();
        self.lyrics.clear();
        self.current_song = None;
        self.variations.clear();
    }

    /// Replace the lyrics with pasted text. Blank text is refused.
    pub fn import_lyrics(&mut self, text: &str) -> ApiResult<()> {
        if !has_content(text) {
            return Err(ApiError::EmptyLyrics { action: "import" });
        }
        self.lyrics = text.to_string();
        Ok(())
    }
}
