use async_trait::async_trait;

use lyriclab_core::{NewSong, Song, SongId, SongSpec, SongUpdate};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::lyrics::{TransformOptions, VariationSet};

/// The calls a [`Studio`](crate::studio::Studio) makes. [`ApiClient`] is the
/// real implementation.
#[async_trait]
pub trait LyricsBackend: Send + Sync {
    async fn generate(&self, spec: &SongSpec) -> ApiResult<String>;

    async fn rewrite(&self, spec: &SongSpec, lyrics: &str) -> ApiResult<String>;

    async fn rewrite_section(
        &self,
        spec: &SongSpec,
        lyrics: &str,
        section: &str,
        rhyme_override: Option<&str>,
    ) -> ApiResult<String>;

    async fn variations(
        &self,
        spec: &SongSpec,
        lyrics: &str,
        section: Option<&str>,
        rhyme_override: Option<&str>,
        count: u8,
    ) -> ApiResult<VariationSet>;

    async fn custom_edit(
        &self,
        spec: &SongSpec,
        lyrics: &str,
        section: Option<&str>,
        prompt: &str,
    ) -> ApiResult<String>;

    async fn transform(&self, lyrics: &str, options: &TransformOptions) -> ApiResult<String>;

    async fn create_song(&self, song: &NewSong) -> ApiResult<Song>;

    async fn update_song(&self, id: &SongId, update: &SongUpdate) -> ApiResult<Song>;
}

#[async_trait]
impl LyricsBackend for ApiClient {
    async fn generate(&self, spec: &SongSpec) -> ApiResult<String> {
        self.generate_lyrics(spec).await
    }

    async fn rewrite(&self, spec: &SongSpec, lyrics: &str) -> ApiResult<String> {
        self.rewrite_lyrics(spec, lyrics).await
    }

    async fn rewrite_section(
        &self,
        spec: &SongSpec,
        lyrics: &str,
        section: &str,
        rhyme_override: Option<&str>,
    ) -> ApiResult<String> {
        ApiClient::rewrite_section(self, spec, lyrics, section, rhyme_override).await
    }

    async fn variations(
        &self,
        spec: &SongSpec,
        lyrics: &str,
        section: Option<&str>,
        rhyme_override: Option<&str>,
        count: u8,
    ) -> ApiResult<VariationSet> {
        self.generate_variations(spec, lyrics, section, rhyme_override, count)
            .await
    }

    async fn custom_edit(
        &self,
        spec: &SongSpec,
        lyrics: &str,
        section: Option<&str>,
        prompt: &str,
    ) -> ApiResult<String> {
        ApiClient::custom_edit(self, spec, lyrics, section, prompt).await
    }

    async fn transform(&self, lyrics: &str, options: &TransformOptions) -> ApiResult<String> {
        self.transform_lyrics(lyrics, options).await
    }

    async fn create_song(&self, song: &NewSong) -> ApiResult<Song> {
        ApiClient::create_song(self, song).await
    }

    async fn update_song(&self, id: &SongId, update: &SongUpdate) -> ApiResult<Song> {
        ApiClient::update_song(self, id, update).await
    }
}
