//! Song structure model.
//!
//! A [`Structure`] is the ordered list of sections that make up a song's
//! arrangement. It is exchanged with the backend as a slash-delimited
//! string of display labels (`"Verse/Chorus/Bridge"`).
//!
//! Parsing that string is deliberately lenient: it never fails. Tokens
//! that match no known [`SectionType`] become [`SectionType::FALLBACK`]
//! (a verse), and blank input yields the default structure. Callers that
//! need to reject bad input must validate before parsing.

pub mod editor;
pub mod section;
pub mod template;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use editor::StructureEditor;
pub use section::SectionType;
pub use template::{Template, DEFAULT_TEMPLATE, DEFAULT_TEMPLATE_ID, TEMPLATES};

/// Separator between section labels in the serialized form.
pub const SEPARATOR: char = '/';

/// One element of a structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    /// A section from the catalog.
    Known(SectionType),
    /// An id outside the catalog, carried through untouched.
    Label(String),
}

impl Section {
    /// Resolve an id against the catalog, keeping unknown ids as labels.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        SectionType::from_id(id).map_or_else(|| Self::Label(id.to_string()), Self::Known)
    }

    /// The id used in templates and sequences.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Known(kind) => kind.id(),
            Self::Label(label) => label,
        }
    }

    /// The text written into the serialized structure.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Known(kind) => kind.label(),
            Self::Label(label) => label,
        }
    }

    /// Short palette code; opaque labels have none.
    #[must_use]
    pub fn short(&self) -> &str {
        match self {
            Self::Known(kind) => kind.short(),
            Self::Label(_) => "?",
        }
    }

    #[must_use]
    pub const fn kind(&self) -> Option<SectionType> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Label(_) => None,
        }
    }
}

impl From<SectionType> for Section {
    fn from(kind: SectionType) -> Self {
        Self::Known(kind)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw structure input as it may arrive from a form or a stored spec:
/// either serialized text or an already-split list of ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StructureInput {
    Text(String),
    Sequence(Vec<String>),
}

/// An ordered sequence of song sections. Position is the list index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StructureInput", into = "String")]
pub struct Structure {
    sections: Vec<Section>,
}

impl Structure {
    /// An empty structure.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Build a structure from catalog kinds.
    #[must_use]
    pub fn from_types(kinds: impl IntoIterator<Item = SectionType>) -> Self {
        Self {
            sections: kinds.into_iter().map(Section::Known).collect(),
        }
    }

    /// Pass a pre-split id sequence through unchanged.
    ///
    /// Known ids resolve to their [`SectionType`]; anything else is kept
    /// as an opaque [`Section::Label`].
    #[must_use]
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            sections: ids
                .into_iter()
                .map(|id| Section::from_id(id.as_ref()))
                .collect(),
        }
    }

    /// Parse a serialized structure string. Never fails.
    ///
    /// The input is split on `/`; text without a separator is a single
    /// token. Each token is matched with [`SectionType::match_token`] and
    /// unmatched tokens become [`SectionType::FALLBACK`]. Blank input
    /// yields [`Structure::default`].
    #[must_use]
    pub fn deserialize(input: &str) -> Self {
        if input.trim().is_empty() {
            return Self::default();
        }

        let sections = input
            .split(SEPARATOR)
            .map(|token| {
                SectionType::match_token(token).unwrap_or_else(|| {
                    log::debug!(
                        "Unrecognized section token {:?}, using {}",
                        token,
                        SectionType::FALLBACK.id()
                    );
                    SectionType::FALLBACK
                })
            })
            .map(Section::Known)
            .collect();

        Self { sections }
    }

    /// Resolve either form of raw input.
    #[must_use]
    pub fn from_input(input: StructureInput) -> Self {
        match input {
            StructureInput::Text(text) => Self::deserialize(&text),
            StructureInput::Sequence(ids) => Self::from_ids(ids),
        }
    }

    /// Join each section's display label with `/`.
    #[must_use]
    pub fn serialize(&self) -> String {
        let labels: Vec<&str> = self.sections.iter().map(Section::label).collect();
        labels.join("/")
    }

    /// Append a section to the end.
    pub fn add_section(&mut self, section: impl Into<Section>) {
        self.sections.push(section.into());
    }

    /// Remove the section at `index`, returning it. Out-of-range indexes
    /// leave the structure unchanged.
    pub fn remove_section(&mut self, index: usize) -> Option<Section> {
        if index < self.sections.len() {
            Some(self.sections.remove(index))
        } else {
            None
        }
    }

    /// Move the section at `from` to position `to`, shifting the sections
    /// in between. Returns `false` (and changes nothing) when the indexes
    /// are equal or either is out of range.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.sections.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let moved = self.sections.remove(from);
        self.sections.insert(to, moved);
        true
    }

    /// Replace the whole sequence with a template's. Unknown template ids
    /// are ignored and `false` is returned.
    pub fn apply_template(&mut self, template_id: &str) -> bool {
        let Some(template) = Template::find(template_id) else {
            log::debug!("Ignoring unknown structure template {:?}", template_id);
            return false;
        };
        self.sections = template.sections.iter().copied().map(Section::Known).collect();
        true
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Ids of every section, in order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.sections.iter().map(Section::id).collect()
    }
}

impl Default for Structure {
    /// The `pop-simple` arrangement: verse, chorus, verse, chorus, bridge,
    /// chorus.
    fn default() -> Self {
        Self::from_types(Template::default_template().sections.iter().copied())
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::serialize(self))
    }
}

impl FromStr for Structure {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::deserialize(s))
    }
}

impl From<StructureInput> for Structure {
    fn from(input: StructureInput) -> Self {
        Self::from_input(input)
    }
}

impl From<Structure> for String {
    fn from(structure: Structure) -> Self {
        structure.serialize()
    }
}

impl<'a> IntoIterator for &'a Structure {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::SectionType::{Bridge, Chorus, Hook, Intro, Outro, Verse};
    use super::*;

    fn kinds(structure: &Structure) -> Vec<Option<SectionType>> {
        structure.iter().map(Section::kind).collect()
    }

    #[test]
    fn test_deserialize_labels() {
        let structure = Structure::deserialize("Verse/Chorus/Bridge");
        assert_eq!(structure, Structure::from_types([Verse, Chorus, Bridge]));
    }

    #[test]
    fn test_deserialize_unknown_token_falls_back_to_verse() {
        let structure = Structure::deserialize("totally-unknown-token");
        assert_eq!(structure, Structure::from_types([Verse]));
    }

    #[test]
    fn test_deserialize_mixed_tokens_degrade_individually() {
        let structure = Structure::deserialize("Intro/Guitar Solo/ hook /Verse 2/OUTRO");
        assert_eq!(
            kinds(&structure),
            vec![Some(Intro), Some(Verse), Some(Hook), Some(Verse), Some(Outro)]
        );
    }

    #[test]
    fn test_deserialize_normalizes_spaces_to_hyphens() {
        let structure = Structure::deserialize("pre chorus/Post Chorus");
        assert_eq!(
            structure,
            Structure::from_types([SectionType::PreChorus, SectionType::PostChorus])
        );
    }

    #[test]
    fn test_deserialize_empty_segments_become_verse() {
        let structure = Structure::deserialize("Chorus//");
        assert_eq!(structure, Structure::from_types([Chorus, Verse, Verse]));
    }

    #[test]
    fn test_deserialize_blank_is_default() {
        assert_eq!(Structure::deserialize(""), Structure::default());
        assert_eq!(Structure::deserialize("   "), Structure::default());
    }

    #[test]
    fn test_deserialize_preset_without_separator() {
        // Named presets with no separator are a single unmatched token.
        let structure = Structure::deserialize("AABA (32-bar)");
        assert_eq!(structure, Structure::from_types([Verse]));
    }

    #[test]
    fn test_round_trip_catalog_structures() {
        for template in TEMPLATES {
            let structure = Structure::from_types(template.sections.iter().copied());
            assert_eq!(Structure::deserialize(&structure.serialize()), structure);
        }
        let every = Structure::from_types(SectionType::ALL);
        assert_eq!(Structure::deserialize(&every.serialize()), every);
    }

    #[test]
    fn test_serialize_uses_labels() {
        let structure = Structure::from_types([Intro, SectionType::PreChorus, Chorus]);
        assert_eq!(structure.serialize(), "Intro/Pre-Chorus/Chorus");
        assert_eq!(structure.to_string(), "Intro/Pre-Chorus/Chorus");
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(Structure::new().serialize(), "");
    }

    #[test]
    fn test_from_ids_passes_through_unknown() {
        let structure = Structure::from_ids(["intro", "guitar-solo", "chorus"]);
        assert_eq!(structure.len(), 3);
        assert_eq!(structure.get(1), Some(&Section::Label("guitar-solo".to_string())));
        assert_eq!(structure.serialize(), "Intro/guitar-solo/Chorus");
        assert_eq!(structure.ids(), vec!["intro", "guitar-solo", "chorus"]);
    }

    #[test]
    fn test_add_section_appends() {
        let mut structure = Structure::new();
        structure.add_section(Verse);
        structure.add_section(Chorus);
        structure.add_section(Verse);
        assert_eq!(structure.serialize(), "Verse/Chorus/Verse");
    }

    #[test]
    fn test_remove_section() {
        let mut structure = Structure::from_types([Intro, Verse, Chorus]);
        assert_eq!(structure.remove_section(1), Some(Section::Known(Verse)));
        assert_eq!(structure, Structure::from_types([Intro, Chorus]));
    }

    #[test]
    fn test_remove_section_out_of_range_is_noop() {
        let mut structure = Structure::from_types([Intro, Verse, Chorus]);
        assert_eq!(structure.remove_section(3), None);
        assert_eq!(structure.remove_section(usize::MAX), None);
        assert_eq!(structure, Structure::from_types([Intro, Verse, Chorus]));
    }

    #[test]
    fn test_reorder_forward() {
        let mut structure = Structure::from_types([Intro, Verse, Chorus, Bridge]);
        assert!(structure.reorder(1, 3));
        assert_eq!(structure, Structure::from_types([Intro, Chorus, Bridge, Verse]));
    }

    #[test]
    fn test_reorder_backward() {
        let mut structure = Structure::from_types([Intro, Verse, Chorus, Bridge]);
        assert!(structure.reorder(3, 0));
        assert_eq!(structure, Structure::from_types([Bridge, Intro, Verse, Chorus]));
    }

    #[test]
    fn test_reorder_same_index_and_out_of_range_are_noops() {
        let original = Structure::from_types([Intro, Verse, Chorus]);
        let mut structure = original.clone();
        assert!(!structure.reorder(1, 1));
        assert!(!structure.reorder(0, 3));
        assert!(!structure.reorder(5, 0));
        assert_eq!(structure, original);
    }

    #[test]
    fn test_reorder_preserves_multiset() {
        let mut structure = Structure::from_types([Verse, Chorus, Verse, Chorus, Bridge, Chorus]);
        let mut before = structure.ids().into_iter().map(String::from).collect::<Vec<_>>();
        for (from, to) in [(0, 5), (4, 1), (2, 3), (5, 0)] {
            structure.reorder(from, to);
        }
        let mut after = structure.ids().into_iter().map(String::from).collect::<Vec<_>>();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_apply_template_replaces_content() {
        let mut structure = Structure::from_types([Outro, Outro, Hook]);
        assert!(structure.apply_template("pop-simple"));
        assert_eq!(
            structure,
            Structure::from_types([Verse, Chorus, Verse, Chorus, Bridge, Chorus])
        );
    }

    #[test]
    fn test_apply_unknown_template_is_noop() {
        let mut structure = Structure::from_types([Outro]);
        assert!(!structure.apply_template("does-not-exist"));
        assert_eq!(structure, Structure::from_types([Outro]));
    }

    #[test]
    fn test_serialized_label_count_tracks_mutations() {
        let mut structure = Structure::new();
        let ops: [(u8, usize, usize); 9] = [
            (0, 0, 0),
            (0, 0, 0),
            (0, 0, 0),
            (2, 0, 2),
            (1, 7, 0),
            (1, 1, 0),
            (0, 0, 0),
            (2, 2, 0),
            (1, 0, 0),
        ];
        for (op, a, b) in ops {
            match op {
                0 => structure.add_section(SectionType::ALL[structure.len() % 10]),
                1 => {
                    structure.remove_section(a);
                }
                _ => {
                    structure.reorder(a, b);
                }
            }
            let serialized = structure.serialize();
            let count = if serialized.is_empty() {
                0
            } else {
                serialized.split('/').count()
            };
            assert_eq!(count, structure.len());
        }
    }

    #[test]
    fn test_serde_accepts_text_or_sequence() {
        let from_text: Structure = serde_json::from_str("\"Verse/Hook\"").unwrap();
        assert_eq!(from_text, Structure::from_types([Verse, Hook]));

        let from_seq: Structure = serde_json::from_str(r#"["intro","solo"]"#).unwrap();
        assert_eq!(from_seq.serialize(), "Intro/solo");

        let json = serde_json::to_string(&Structure::from_types([Verse, Chorus])).unwrap();
        assert_eq!(json, "\"Verse/Chorus\"");
    }

    #[test]
    fn test_from_str_never_fails() {
        let structure: Structure = "???".parse().unwrap();
        assert_eq!(structure, Structure::from_types([Verse]));
    }
}
