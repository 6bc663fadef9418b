//! Lyrics generation endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use lyriclab_core::SongSpec;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Most variations the server will generate in one call.
pub const MAX_VARIATIONS: u8 = 6;

/// Variations requested when the caller does not say.
pub const DEFAULT_VARIATIONS: u8 = 4;

/// Joins several section rhyme-scheme overrides into one instruction.
pub const RHYME_OVERRIDE_SEPARATOR: &str = " + ";

/// Combine chosen rhyme schemes into a single override; `None` when nothing
/// was chosen.
pub fn join_rhyme_overrides<S: AsRef<str>>(schemes: &[S]) -> Option<String> {
    if schemes.is_empty() {
        None
    } else {
        Some(
            schemes
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(RHYME_OVERRIDE_SEPARATOR),
        )
    }
}

/// Keep a requested variation count within 1..=[`MAX_VARIATIONS`].
pub fn clamp_variation_count(count: u8) -> u8 {
    count.clamp(1, MAX_VARIATIONS)
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    song_spec: &'a SongSpec,
}

#[derive(Debug, Serialize)]
struct RewriteRequest<'a> {
    song_spec: &'a SongSpec,
    current_lyrics: &'a str,
}

#[derive(Debug, Serialize)]
struct RewriteSectionRequest<'a> {
    song_spec: &'a SongSpec,
    current_lyrics: &'a str,
    section: &'a str,
    section_rhyme_scheme: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct VariationsRequest<'a> {
    song_spec: &'a SongSpec,
    current_lyrics: &'a str,
    section: Option<&'a str>,
    section_rhyme_scheme: Option<&'a str>,
    count: u8,
}

#[derive(Debug, Serialize)]
struct CustomEditRequest<'a> {
    song_spec: &'a SongSpec,
    current_lyrics: &'a str,
    section: Option<&'a str>,
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
struct TransformRequest<'a> {
    current_lyrics: &'a str,
    #[serde(flatten)]
    options: &'a TransformOptions,
}

#[derive(Debug, Deserialize)]
struct LyricsResponse {
    lyrics: String,
}

/// Changes to apply when transforming existing lyrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    pub new_topic: Option<String>,
    pub new_mood: Option<String>,
    pub new_genre: Option<String>,
    pub keep_cadence: bool,
    pub keep_rhyme_scheme: bool,
    pub keep_structure: bool,
    pub additional_instructions: Option<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            new_topic: None,
            new_mood: None,
            new_genre: None,
            keep_cadence: true,
            keep_rhyme_scheme: true,
            keep_structure: true,
            additional_instructions: None,
        }
    }
}

impl TransformOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a named preset such as "Party Anthem".
    #[must_use]
    pub fn from_preset(preset: &lyriclab_core::catalog::TransformPreset) -> Self {
        Self {
            new_topic: preset.topic.map(str::to_string),
            new_mood: preset.mood.map(str::to_string),
            new_genre: preset.genre.map(str::to_string),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.new_topic = Some(topic.into());
        self
    }

    #[must_use]
    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.new_mood = Some(mood.into());
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.new_genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.additional_instructions = Some(instructions.into());
        self
    }

    #[must_use]
    pub const fn keep_cadence(mut self, keep: bool) -> Self {
        self.keep_cadence = keep;
        self
    }

    #[must_use]
    pub const fn keep_rhyme_scheme(mut self, keep: bool) -> Self {
        self.keep_rhyme_scheme = keep;
        self
    }

    #[must_use]
    pub const fn keep_structure(mut self, keep: bool) -> Self {
        self.keep_structure = keep;
        self
    }
}

/// One alternative produced by the variations endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    pub index: u32,
    pub lyrics: String,
}

/// Response of the variations endpoint. `total_generated` may be lower than
/// `total_requested` when some generations failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationSet {
    pub variations: Vec<Variation>,
    pub total_requested: u32,
    pub total_generated: u32,
}

impl ApiClient {
    /// Generate fresh lyrics from a spec.
    pub async fn generate_lyrics(&self, spec: &SongSpec) -> ApiResult<String> {
        let builder = self
            .request(Method::POST, "lyrics/generate")
            .json(&GenerateRequest { song_spec: spec });
        let response: LyricsResponse = self.send_json(builder).await?;
        Ok(response.lyrics)
    }

    /// Rewrite the whole song.
    pub async fn rewrite_lyrics(&self, spec: &SongSpec, lyrics: &str) -> ApiResult<String> {
        let builder = self.request(Method::POST, "lyrics/rewrite").json(&RewriteRequest {
            song_spec: spec,
            current_lyrics: lyrics,
        });
        let response: LyricsResponse = self.send_json(builder).await?;
        Ok(response.lyrics)
    }

    /// Rewrite one section, optionally with a different rhyme scheme.
    pub async fn rewrite_section(
        &self,
        spec: &SongSpec,
        lyrics: &str,
        section: &str,
        rhyme_override: Option<&str>,
    ) -> ApiResult<String> {
        let builder = self
            .request(Method::POST, "lyrics/rewrite-section")
            .json(&RewriteSectionRequest {
                song_spec: spec,
                current_lyrics: lyrics,
                section,
                section_rhyme_scheme: rhyme_override,
            });
        let response: LyricsResponse = self.send_json(builder).await?;
        Ok(response.lyrics)
    }

    /// Produce alternatives for a section, or the whole song when `section`
    /// is `None`. `count` is clamped to 1..=6.
    pub async fn generate_variations(
        &self,
        spec: &SongSpec,
        lyrics: &str,
        section: Option<&str>,
        rhyme_override: Option<&str>,
        count: u8,
    ) -> ApiResult<VariationSet> {
        let builder = self
            .request(Method::POST, "lyrics/variations")
            .json(&VariationsRequest {
                song_spec: spec,
                current_lyrics: lyrics,
                section,
                section_rhyme_scheme: rhyme_override,
                count: clamp_variation_count(count),
            });
        self.send_json(builder).await
    }

    /// Apply free-text instructions to a section or the whole song.
    pub async fn custom_edit(
        &self,
        spec: &SongSpec,
        lyrics: &str,
        section: Option<&str>,
        prompt: &str,
    ) -> ApiResult<String> {
        let builder = self
            .request(Method::POST, "lyrics/custom-edit")
            .json(&CustomEditRequest {
                song_spec: spec,
                current_lyrics: lyrics,
                section,
                prompt,
            });
        let response: LyricsResponse = self.send_json(builder).await?;
        Ok(response.lyrics)
    }

    /// Carry the lyrics over to a new topic, mood or genre.
    pub async fn transform_lyrics(
        &self,
        lyrics: &str,
        options: &TransformOptions,
    ) -> ApiResult<String> {
        let builder = self
            .request(Method::POST, "lyrics/transform")
            .json(&TransformRequest {
                current_lyrics: lyrics,
                options,
            });
        let response: LyricsResponse = self.send_json(builder).await?;
        Ok(response.lyrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyriclab_core::catalog::TRANSFORM_PRESETS;
    use serde_json::json;

    #[test]
    fn test_join_rhyme_overrides() {
        assert_eq!(join_rhyme_overrides::<&str>(&[]), None);
        assert_eq!(join_rhyme_overrides(&["AABB"]).as_deref(), Some("AABB"));
        assert_eq!(
            join_rhyme_overrides(&["AABB", "Internal"]).as_deref(),
            Some("AABB + Internal")
        );
    }

    #[test]
    fn test_clamp_variation_count() {
        assert_eq!(clamp_variation_count(0), 1);
        assert_eq!(clamp_variation_count(4), 4);
        assert_eq!(clamp_variation_count(20), 6);
    }

    #[test]
    fn test_transform_request_shape() {
        let options = TransformOptions::new()
            .with_topic("summer nights")
            .keep_structure(false);
        let value = serde_json::to_value(TransformRequest {
            current_lyrics: "la",
            options: &options,
        })
        .unwrap();
        assert_eq!(
            value,
            json!({
                "current_lyrics": "la",
                "new_topic": "summer nights",
                "new_mood": null,
                "new_genre": null,
                "keep_cadence": true,
                "keep_rhyme_scheme": true,
                "keep_structure": false,
                "additional_instructions": null
            })
        );
    }

    #[test]
    fn test_transform_from_preset() {
        let preset = &TRANSFORM_PRESETS[0];
        let options = TransformOptions::from_preset(preset);
        assert_eq!(options.new_topic.as_deref(), preset.topic);
        assert_eq!(options.new_mood.as_deref(), preset.mood);
        assert!(options.keep_cadence);
    }

    #[test]
    fn test_variation_set_decodes() {
        let set: VariationSet = serde_json::from_value(json!({
            "variations": [{"index": 1, "lyrics": "one"}, {"index": 2, "lyrics": "two"}],
            "total_requested": 4,
            "total_generated": 2
        }))
        .unwrap();
        assert_eq!(set.variations.len(), 2);
        assert_eq!(set.total_requested, 4);
    }
}
