/// A wire value paired with the text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const MOODS: &[&str] = &[
    "Happy",
    "Sad",
    "Angry",
    "Melancholic",
    "Hopeful",
    "Nostalgic",
    "Romantic",
    "Empowering",
    "Rebellious",
    "Peaceful",
    "Anxious",
    "Euphoric",
    "Bittersweet",
    "Dark",
    "Playful",
    "Intense",
];

pub const PERSPECTIVES: &[LabeledOption] = &[
    LabeledOption {
        value: "I",
        label: "First Person (I/Me)",
    },
    LabeledOption {
        value: "You",
        label: "Second Person (You)",
    },
    LabeledOption {
        value: "We",
        label: "First Person Plural (We)",
    },
    LabeledOption {
        value: "3rd",
        label: "Third Person (He/She/They)",
    },
];

/// Structure strings offered as quick presets. The last two are named
/// forms with no separator; they parse to a single fallback section.
pub const STRUCTURE_PRESETS: &[&str] = &[
    "Verse/Chorus/Verse/Chorus/Bridge/Chorus",
    "Verse/Hook/Verse/Hook",
    "Verse/Pre-Chorus/Chorus/Verse/Pre-Chorus/Chorus/Bridge/Chorus",
    "Intro/Verse/Chorus/Verse/Chorus/Outro",
    "Verse/Verse/Chorus/Verse/Chorus",
    "AABA (32-bar)",
    "Through-composed (no repeats)",
];

pub const RHYME_SCHEMES: &[LabeledOption] = &[
    LabeledOption {
        value: "AABB",
        label: "AABB (Couplets)",
    },
    LabeledOption {
        value: "ABAB",
        label: "ABAB (Alternate)",
    },
    LabeledOption {
        value: "ABCB",
        label: "ABCB (Ballad)",
    },
    LabeledOption {
        value: "ABBA",
        label: "ABBA (Enclosed)",
    },
    LabeledOption {
        value: "Loose",
        label: "Loose/Free",
    },
    LabeledOption {
        value: "Monorhyme",
        label: "Monorhyme Burst",
    },
    LabeledOption {
        value: "Internal",
        label: "Internal Focus",
    },
];

pub const PROFANITY_OPTIONS: &[LabeledOption] = &[
    LabeledOption {
        value: "None",
        label: "None",
    },
    LabeledOption {
        value: "Mild",
        label: "Mild",
    },
    LabeledOption {
        value: "Allow",
        label: "Allow",
    },
];

/// Sections offered as rewrite/variation targets.
pub const SECTION_TARGETS: &[&str] = &[
    "Verse 1",
    "Chorus",
    "Verse 2",
    "Bridge",
    "Pre-Chorus",
    "Outro",
    "Intro",
];

/// Find the display label for a wire value in one of the option lists.
#[must_use]
pub fn label_for(options: &[LabeledOption], value: &str) -> Option<&'static str> {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(RHYME_SCHEMES, "ABCB"), Some("ABCB (Ballad)"));
        assert_eq!(label_for(PERSPECTIVES, "3rd"), Some("Third Person (He/She/They)"));
        assert_eq!(label_for(PROFANITY_OPTIONS, "Heavy"), None);
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(MOODS.len(), 16);
        assert_eq!(PERSPECTIVES.len(), 4);
        assert_eq!(STRUCTURE_PRESETS.len(), 7);
        assert_eq!(RHYME_SCHEMES.len(), 7);
        assert_eq!(SECTION_TARGETS.len(), 7);
    }
}
