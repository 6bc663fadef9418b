use std::fmt;

use serde::{Deserialize, Serialize};

/// A kind of song section in the fixed palette.
///
/// Each kind has a stable id (used on the wire and in templates), a
/// display label (used in the serialized structure string), and a short
/// code for compact palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    Intro,
    Verse,
    PreChorus,
    Chorus,
    PostChorus,
    Bridge,
    Instrumental,
    Breakdown,
    Hook,
    Outro,
}

impl SectionType {
    /// All section kinds, in palette order.
    pub const ALL: [Self; 10] = [
        Self::Intro,
        Self::Verse,
        Self::PreChorus,
        Self::Chorus,
        Self::PostChorus,
        Self::Bridge,
        Self::Instrumental,
        Self::Breakdown,
        Self::Hook,
        Self::Outro,
    ];

    /// The kind substituted for any token that matches nothing in the
    /// catalog.
    pub const FALLBACK: Self = Self::Verse;

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Verse => "verse",
            Self::PreChorus => "pre-chorus",
            Self::Chorus => "chorus",
            Self::PostChorus => "post-chorus",
            Self::Bridge => "bridge",
            Self::Instrumental => "instrumental",
            Self::Breakdown => "breakdown",
            Self::Hook => "hook",
            Self::Outro => "outro",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intro => "Intro",
            Self::Verse => "Verse",
            Self::PreChorus => "Pre-Chorus",
            Self::Chorus => "Chorus",
            Self::PostChorus => "Post-Chorus",
            Self::Bridge => "Bridge",
            Self::Instrumental => "Instrumental",
            Self::Breakdown => "Breakdown",
            Self::Hook => "Hook",
            Self::Outro => "Outro",
        }
    }

    /// Short palette code (e.g. `PC` for Pre-Chorus).
    #[must_use]
    pub const fn short(self) -> &'static str {
        match self {
            Self::Intro => "INT",
            Self::Verse => "V",
            Self::PreChorus => "PC",
            Self::Chorus => "C",
            Self::PostChorus => "PO",
            Self::Bridge => "BR",
            Self::Instrumental => "INS",
            Self::Breakdown => "BD",
            Self::Hook => "H",
            Self::Outro => "OUT",
        }
    }

    /// Look up a kind by its exact id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Match a free-form token against the catalog.
    ///
    /// The token is trimmed and lowercased with spaces turned into
    /// hyphens, then compared against ids; failing that, the trimmed
    /// token is compared case-insensitively against labels.
    #[must_use]
    pub fn match_token(token: &str) -> Option<Self> {
        let trimmed = token.trim();
        let normalized = trimmed.to_lowercase().replace(' ', "-");
        Self::from_id(&normalized).or_else(|| {
            Self::ALL
                .into_iter()
                .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
        })
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in SectionType::ALL.iter().enumerate() {
            for b in &SectionType::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
                assert_ne!(a.short(), b.short());
            }
        }
    }

    #[test]
    fn test_from_id() {
        assert_eq!(SectionType::from_id("pre-chorus"), Some(SectionType::PreChorus));
        assert_eq!(SectionType::from_id("Pre-Chorus"), None);
        assert_eq!(SectionType::from_id("solo"), None);
    }

    #[test]
    fn test_match_token_normalizes_case_and_spaces() {
        assert_eq!(SectionType::match_token("  Chorus "), Some(SectionType::Chorus));
        assert_eq!(SectionType::match_token("PRE CHORUS"), Some(SectionType::PreChorus));
        assert_eq!(SectionType::match_token("post-chorus"), Some(SectionType::PostChorus));
        assert_eq!(SectionType::match_token("Verse 1"), None);
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&SectionType::PostChorus).unwrap();
        assert_eq!(json, "\"post-chorus\"");
        let back: SectionType = serde_json::from_str("\"instrumental\"").unwrap();
        assert_eq!(back, SectionType::Instrumental);
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(SectionType::PreChorus.to_string(), "Pre-Chorus");
    }
}
