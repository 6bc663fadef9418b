use super::{Section, Structure};

/// A mutable view over a [`Structure`] bound to the text field that
/// mirrors it.
///
/// Every mutation re-serializes the structure into the bound field, so
/// whoever owns that field sees the current arrangement as text. Binding
/// alone leaves the field as it was.
/// Obtain one from [`SongForm::structure_editor`].
///
/// [`SongForm::structure_editor`]: crate::spec::SongForm::structure_editor
#[derive(Debug)]
pub struct StructureEditor<'a> {
    structure: &'a mut Structure,
    serialized: &'a mut String,
}

impl<'a> StructureEditor<'a> {
    /// Bind a structure to its serialized mirror. The mirror is only
    /// rewritten by the first mutation.
    pub fn bind(structure: &'a mut Structure, serialized: &'a mut String) -> Self {
        Self {
            structure,
            serialized,
        }
    }

    pub fn add_section(&mut self, section: impl Into<Section>) {
        self.structure.add_section(section);
        self.emit();
    }

    pub fn remove_section(&mut self, index: usize) -> Option<Section> {
        let removed = self.structure.remove_section(index);
        if removed.is_some() {
            self.emit();
        }
        removed
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let moved = self.structure.reorder(from, to);
        if moved {
            self.emit();
        }
        moved
    }

    pub fn apply_template(&mut self, template_id: &str) -> bool {
        let applied = self.structure.apply_template(template_id);
        if applied {
            self.emit();
        }
        applied
    }

    /// Replace the structure by parsing text, with the usual fallback.
    pub fn replace_with(&mut self, input: &str) {
        *self.structure = Structure::deserialize(input);
        self.emit();
    }

    #[must_use]
    pub fn structure(&self) -> &Structure {
        &*self.structure
    }

    #[must_use]
    pub fn serialized(&self) -> &str {
        self.serialized.as_str()
    }

    fn emit(&mut self) {
        *self.serialized = self.structure.serialize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::SectionType;

    #[test]
    fn test_bind_leaves_text_until_mutation() {
        let mut structure = Structure::from_types([SectionType::Intro]);
        let mut text = String::from("Intro (long)");
        let mut editor = StructureEditor::bind(&mut structure, &mut text);
        assert_eq!(editor.serialized(), "Intro (long)");
        assert!(!editor.reorder(0, 0));
        assert_eq!(editor.serialized(), "Intro (long)");
        editor.add_section(SectionType::Outro);
        assert_eq!(editor.serialized(), "Intro/Outro");
        drop(editor);
        assert_eq!(text, "Intro/Outro");
    }

    #[test]
    fn test_every_mutation_emits() {
        let mut structure = Structure::new();
        let mut text = String::new();
        {
            let mut editor = StructureEditor::bind(&mut structure, &mut text);
            editor.add_section(SectionType::Verse);
            assert_eq!(editor.serialized(), "Verse");
            editor.add_section(SectionType::Chorus);
            editor.add_section(SectionType::Bridge);
            assert!(editor.reorder(2, 0));
            assert_eq!(editor.serialized(), "Bridge/Verse/Chorus");
            assert!(editor.remove_section(1).is_some());
            assert_eq!(editor.serialized(), "Bridge/Chorus");
            assert!(editor.apply_template("verse-hook"));
            assert_eq!(editor.serialized(), "Verse/Hook/Verse/Hook");
            editor.replace_with("Outro/???");
            assert_eq!(editor.serialized(), "Outro/Verse");
        }
        assert_eq!(text, structure.serialize());
    }

    #[test]
    fn test_noops_leave_text_alone() {
        let mut structure = Structure::from_types([SectionType::Verse]);
        let mut text = String::from("Verse");
        let mut editor = StructureEditor::bind(&mut structure, &mut text);
        assert!(editor.remove_section(4).is_none());
        assert!(!editor.reorder(0, 0));
        assert!(!editor.apply_template("nope"));
        assert_eq!(editor.serialized(), "Verse");
    }
}
