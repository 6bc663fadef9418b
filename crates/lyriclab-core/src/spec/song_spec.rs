use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default structure string; the serialized `pop-simple` template.
pub const DEFAULT_STRUCTURE: &str = "Verse/Chorus/Verse/Chorus/Bridge/Chorus";

/// Default rhyme scheme.
pub const DEFAULT_RHYME_SCHEME: &str = "AABB";

/// Upper bound of every slider.
pub const SLIDER_MAX: u8 = 100;

/// Narrative point of view of the lyrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perspective {
    #[default]
    #[serde(rename = "I")]
    FirstPerson,
    #[serde(rename = "You")]
    SecondPerson,
    #[serde(rename = "We")]
    FirstPersonPlural,
    #[serde(rename = "3rd")]
    ThirdPerson,
}

impl Perspective {
    pub const ALL: [Self; 4] = [
        Self::FirstPerson,
        Self::SecondPerson,
        Self::FirstPersonPlural,
        Self::ThirdPerson,
    ];

    /// The value sent to the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstPerson => "I",
            Self::SecondPerson => "You",
            Self::FirstPersonPlural => "We",
            Self::ThirdPerson => "3rd",
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Perspective {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidData(format!("unknown perspective: {s}")))
    }
}

/// How much explicit language the lyrics may contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profanity {
    #[default]
    None,
    Mild,
    Allow,
}

impl Profanity {
    pub const ALL: [Self; 3] = [Self::None, Self::Mild, Self::Allow];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mild => "Mild",
            Self::Allow => "Allow",
        }
    }
}

impl fmt::Display for Profanity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profanity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidData(format!("unknown profanity level: {s}")))
    }
}

/// One of the 0–100 stylistic sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    RhymeVariety,
    InternalRhymeDensity,
    CadenceComplexity,
    WordChoice,
    Directness,
    AiFreedom,
}

impl Slider {
    pub const ALL: [Self; 6] = [
        Self::RhymeVariety,
        Self::InternalRhymeDensity,
        Self::CadenceComplexity,
        Self::WordChoice,
        Self::Directness,
        Self::AiFreedom,
    ];

    /// Wire field name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::RhymeVariety => "rhyme_variety",
            Self::InternalRhymeDensity => "internal_rhyme_density",
            Self::CadenceComplexity => "cadence_complexity",
            Self::WordChoice => "word_choice",
            Self::Directness => "directness",
            Self::AiFreedom => "ai_freedom",
        }
    }

    /// Display name with the meaning of each end of the scale.
    #[must_use]
    pub const fn describe(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::RhymeVariety => ("Rhyme Variety", "Repeat", "Vary"),
            Self::InternalRhymeDensity => ("Internal Rhyme Density", "None", "Heavy"),
            Self::CadenceComplexity => ("Cadence Complexity", "Simple", "Complex"),
            Self::WordChoice => ("Word Choice", "Plain", "Poetic"),
            Self::Directness => ("Directness", "Literal", "Abstract"),
            Self::AiFreedom => ("AI Freedom", "Strict", "Creative"),
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slider| slider.key() == key)
    }
}

/// The full set of generation parameters sent to the backend.
///
/// Every field has a default, and missing fields in incoming JSON or TOML
/// take that default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongSpec {
    pub title: String,
    pub topic: String,
    pub genre: String,
    pub subgenre: String,
    pub mood: String,
    pub custom_mood: String,
    pub perspective: Perspective,
    /// Slash-delimited section labels.
    pub structure: String,
    pub rhyme_scheme: String,
    pub rhyme_variety: u8,
    pub internal_rhyme_density: u8,
    pub cadence_complexity: u8,
    pub imagery_progression: bool,
    pub word_choice: u8,
    pub directness: u8,
    pub profanity: Profanity,
    pub forbidden_words: Vec<String>,
    pub ai_freedom: u8,
    /// Style reference text.
    pub sample_lyrics: String,
}

impl Default for SongSpec {
    fn default() -> Self {
        Self {
            title: String::new(),
            topic: String::new(),
            genre: String::new(),
            subgenre: String::new(),
            mood: String::new(),
            custom_mood: String::new(),
            perspective: Perspective::default(),
            structure: DEFAULT_STRUCTURE.to_string(),
            rhyme_scheme: DEFAULT_RHYME_SCHEME.to_string(),
            rhyme_variety: 50,
            internal_rhyme_density: 25,
            cadence_complexity: 50,
            imagery_progression: false,
            word_choice: 50,
            directness: 50,
            profanity: Profanity::default(),
            forbidden_words: Vec::new(),
            ai_freedom: 50,
            sample_lyrics: String::new(),
        }
    }
}

impl SongSpec {
    #[must_use]
    pub const fn slider(&self, slider: Slider) -> u8 {
        match slider {
            Slider::RhymeVariety => self.rhyme_variety,
            Slider::InternalRhymeDensity => self.internal_rhyme_density,
            Slider::CadenceComplexity => self.cadence_complexity,
            Slider::WordChoice => self.word_choice,
            Slider::Directness => self.directness,
            Slider::AiFreedom => self.ai_freedom,
        }
    }

    /// Set a slider, clamping to `0..=100`.
    pub fn set_slider(&mut self, slider: Slider, value: u8) {
        let value = value.min(SLIDER_MAX);
        let field = match slider {
            Slider::RhymeVariety => &mut self.rhyme_variety,
            Slider::InternalRhymeDensity => &mut self.internal_rhyme_density,
            Slider::CadenceComplexity => &mut self.cadence_complexity,
            Slider::WordChoice => &mut self.word_choice,
            Slider::Directness => &mut self.directness,
            Slider::AiFreedom => &mut self.ai_freedom,
        };
        *field = value;
    }

    /// Custom mood if one was entered, otherwise the selected mood.
    #[must_use]
    pub fn effective_mood(&self) -> Option<&str> {
        [self.custom_mood.as_str(), self.mood.as_str()]
            .into_iter()
            .find(|mood| !mood.is_empty())
    }

    /// Title to save under; blank titles become "Untitled Song".
    #[must_use]
    pub fn save_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            "Untitled Song"
        } else {
            title
        }
    }

    /// Parse a spec from TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Render the spec as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read a spec file. Files ending in `.json` are read as JSON,
    /// everything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        if is_json(path) {
            Ok(serde_json::from_str(&text)?)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// Write a spec file in the format implied by its extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            self.to_toml_string()?
        };
        std::fs::write(path, text)?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
