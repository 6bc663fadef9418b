use crate::catalog::Genre;
use crate::error::{Error, Result};
use crate::structure::{Structure, StructureEditor};

use super::song_spec::{Perspective, Profanity, Slider, SongSpec};

/// A single-field change to a [`SongSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecUpdate {
    Title(String),
    Topic(String),
    /// Also clears the sub-genre.
    Genre(String),
    Subgenre(String),
    /// Also clears the custom mood.
    Mood(String),
    /// A non-blank value also clears the selected mood.
    CustomMood(String),
    Perspective(Perspective),
    /// Re-parsed leniently; the stored text is the normalized form.
    Structure(String),
    RhymeScheme(String),
    Slider(Slider, u8),
    ImageryProgression(bool),
    Profanity(Profanity),
    ForbiddenWords(Vec<String>),
    SampleLyrics(String),
}

impl SpecUpdate {
    /// Build an update from a wire field name and a textual value.
    ///
    /// `forbidden_words` takes a comma-separated list.
    pub fn parse(key: &str, value: &str) -> Result<Self> {
        let update = match key {
            "title" => Self::Title(value.to_string()),
            "topic" => Self::Topic(value.to_string()),
            "genre" => Self::Genre(value.to_string()),
            "subgenre" => Self::Subgenre(value.to_string()),
            "mood" => Self::Mood(value.to_string()),
            "custom_mood" => Self::CustomMood(value.to_string()),
            "perspective" => Self::Perspective(value.parse()?),
            "structure" => Self::Structure(value.to_string()),
            "rhyme_scheme" => Self::RhymeScheme(value.to_string()),
            "imagery_progression" => Self::ImageryProgression(parse_bool(value)?),
            "profanity" => Self::Profanity(value.parse()?),
            "forbidden_words" => Self::ForbiddenWords(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|word| !word.is_empty())
                    .map(String::from)
                    .collect(),
            ),
            "sample_lyrics" => Self::SampleLyrics(value.to_string()),
            other => {
                let slider = Slider::from_key(other)
                    .ok_or_else(|| Error::InvalidData(format!("unknown song spec field: {other}")))?;
                let level: u8 = value.trim().parse().map_err(|_| {
                    Error::InvalidData(format!("{other} must be a number from 0 to 100"))
                })?;
                Self::Slider(slider, level)
            }
        };
        Ok(update)
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(Error::InvalidData(format!("expected true or false, got {value}"))),
    }
}

/// The song specification being edited, together with its parsed
/// structure.
///
/// A hydrated form keeps the incoming structure text as written, so
/// free-form presets such as `"AABA (32-bar)"` reach the backend intact.
/// Once the structure is edited through [`SongForm::update_field`] or a
/// [`StructureEditor`], `spec().structure` equals `structure().serialize()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongForm {
    spec: SongSpec,
    structure: Structure,
}

impl Default for SongForm {
    fn default() -> Self {
        Self::from_spec(SongSpec::default())
    }
}

impl SongForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate a form from an existing spec (e.g. a saved song).
    ///
    /// Blank structure text is filled in with the default arrangement;
    /// anything else is left untouched until the structure is edited.
    #[must_use]
    pub fn from_spec(mut spec: SongSpec) -> Self {
        let structure = Structure::deserialize(&spec.structure);
        if spec.structure.trim().is_empty() {
            spec.structure = structure.serialize();
        }
        Self { spec, structure }
    }

    #[must_use]
    pub const fn spec(&self) -> &SongSpec {
        &self.spec
    }

    #[must_use]
    pub fn into_spec(self) -> SongSpec {
        self.spec
    }

    #[must_use]
    pub const fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Apply one field change, enforcing the cross-field rules.
    pub fn update_field(&mut self, update: SpecUpdate) {
        let spec = &mut self.spec;
        match update {
            SpecUpdate::Title(title) => spec.title = title,
            SpecUpdate::Topic(topic) => spec.topic = topic,
            SpecUpdate::Genre(genre) => {
                spec.genre = genre;
                spec.subgenre.clear();
            }
            SpecUpdate::Subgenre(subgenre) => spec.subgenre = subgenre,
            SpecUpdate::Mood(mood) => {
                spec.mood = mood;
                spec.custom_mood.clear();
            }
            SpecUpdate::CustomMood(custom) => {
                let custom = custom.trim();
                if custom.is_empty() {
                    spec.custom_mood.clear();
                } else {
                    spec.custom_mood = custom.to_string();
                    spec.mood.clear();
                }
            }
            SpecUpdate::Perspective(perspective) => spec.perspective = perspective,
            SpecUpdate::Structure(text) => self.structure_editor().replace_with(&text),
            SpecUpdate::RhymeScheme(scheme) => spec.rhyme_scheme = scheme,
            SpecUpdate::Slider(slider, value) => spec.set_slider(slider, value),
            SpecUpdate::ImageryProgression(on) => spec.imagery_progression = on,
            SpecUpdate::Profanity(level) => spec.profanity = level,
            SpecUpdate::ForbiddenWords(words) => spec.forbidden_words = words,
            SpecUpdate::SampleLyrics(text) => spec.sample_lyrics = text,
        }
    }

    /// Borrow the structure for editing; each edit rewrites
    /// `spec.structure`.
    pub fn structure_editor(&mut self) -> StructureEditor<'_> {
        StructureEditor::bind(&mut self.structure, &mut self.spec.structure)
    }

    /// Add a forbidden word. Blank or duplicate words are ignored and
    /// `false` is returned.
    pub fn add_forbidden_word(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || self.spec.forbidden_words.iter().any(|w| w == word) {
            return false;
        }
        self.spec.forbidden_words.push(word.to_string());
        true
    }

    pub fn remove_forbidden_word(&mut self, word: &str) -> bool {
        let before = self.spec.forbidden_words.len();
        self.spec.forbidden_words.retain(|w| w != word);
        self.spec.forbidden_words.len() != before
    }

    /// Sub-genres offered for the currently selected genre.
    #[must_use]
    pub fn available_subgenres(&self) -> &'static [&'static str] {
        Genre::subgenres_of(&self.spec.genre)
    }

    /// Discard everything and start from defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
