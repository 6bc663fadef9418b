/// A quick-fill preset for the transform action. Only the fields that
/// are set overwrite the user's choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformPreset {
    pub label: &'static str,
    pub topic: Option<&'static str>,
    pub mood: Option<&'static str>,
    pub genre: Option<&'static str>,
}

pub const TRANSFORM_PRESETS: &[TransformPreset] = &[
    TransformPreset {
        label: "Love Song",
        topic: Some("Romantic love and deep connection"),
        mood: Some("Romantic, heartfelt"),
        genre: None,
    },
    TransformPreset {
        label: "Party Anthem",
        topic: None,
        mood: Some("Energetic, celebratory"),
        genre: Some("Dance/Pop"),
    },
    TransformPreset {
        label: "Melancholic",
        topic: None,
        mood: Some("Sad, introspective, melancholic"),
        genre: None,
    },
    TransformPreset {
        label: "Empowering",
        topic: Some("Self-confidence and overcoming obstacles"),
        mood: Some("Powerful, uplifting"),
        genre: None,
    },
    TransformPreset {
        label: "Summer Vibes",
        topic: Some("Summer adventures and carefree days"),
        mood: Some("Bright, carefree"),
        genre: None,
    },
    TransformPreset {
        label: "Heartbreak",
        topic: Some("Lost love and moving on"),
        mood: Some("Bittersweet, vulnerable"),
        genre: None,
    },
];

impl TransformPreset {
    /// Find a preset by label, ignoring case.
    #[must_use]
    pub fn find(label: &str) -> Option<&'static Self> {
        TRANSFORM_PRESETS
            .iter()
            .find(|preset| preset.label.eq_ignore_ascii_case(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_preset_case_insensitive() {
        let preset = TransformPreset::find("party anthem").unwrap();
        assert_eq!(preset.genre, Some("Dance/Pop"));
        assert!(preset.topic.is_none());
    }
}
