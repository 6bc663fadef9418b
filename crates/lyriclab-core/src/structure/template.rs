use super::section::SectionType::{
    self, Breakdown, Bridge, Chorus, Hook, Instrumental, Intro, Outro, PreChorus, Verse,
};

/// A named preset structure for a common song form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub sections: &'static [SectionType],
}

/// The arrangement a new song starts with.
pub const DEFAULT_TEMPLATE: Template = Template {
    id: "pop-simple",
    name: "Pop (Simple)",
    sections: &[Verse, Chorus, Verse, Chorus, Bridge, Chorus],
};

/// Id of the template used when there is nothing to parse.
pub const DEFAULT_TEMPLATE_ID: &str = DEFAULT_TEMPLATE.id;

/// The built-in templates, in menu order.
pub const TEMPLATES: &[Template] = &[
    Template {
        id: "pop",
        name: "Pop",
        sections: &[
            Intro, Verse, PreChorus, Chorus, Verse, PreChorus, Chorus, Bridge, Chorus, Outro,
        ],
    },
    DEFAULT_TEMPLATE,
    Template {
        id: "rap",
        name: "Hip-Hop/Rap",
        sections: &[Intro, Verse, Hook, Verse, Hook, Verse, Hook, Outro],
    },
    Template {
        id: "trap",
        name: "Trap",
        sections: &[Intro, Hook, Verse, Hook, Verse, Hook, Breakdown, Hook, Outro],
    },
    Template {
        id: "ballad",
        name: "Ballad",
        sections: &[Intro, Verse, Verse, Chorus, Verse, Chorus, Bridge, Chorus, Outro],
    },
    Template {
        id: "rock",
        name: "Rock",
        sections: &[
            Intro,
            Verse,
            Chorus,
            Verse,
            Chorus,
            Instrumental,
            Bridge,
            Chorus,
            Chorus,
            Outro,
        ],
    },
    Template {
        id: "edm",
        name: "EDM/Electronic",
        sections: &[
            Intro, Breakdown, Chorus, Verse, Breakdown, Chorus, Bridge, Chorus, Outro,
        ],
    },
    Template {
        id: "rnb",
        name: "R&B",
        sections: &[
            Intro, Verse, PreChorus, Chorus, Verse, PreChorus, Chorus, Bridge, Chorus, Outro,
        ],
    },
    Template {
        id: "verse-hook",
        name: "Verse-Hook",
        sections: &[Verse, Hook, Verse, Hook],
    },
    Template {
        id: "aaba",
        name: "AABA (Jazz)",
        sections: &[Verse, Verse, Bridge, Verse],
    },
];

impl Template {
    /// Find a template by id.
    #[must_use]
    pub fn find(id: &str) -> Option<&'static Self> {
        TEMPLATES.iter().find(|template| template.id == id)
    }

    /// The template backing the default song structure.
    #[must_use]
    pub fn default_template() -> &'static Self {
        &DEFAULT_TEMPLATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_template() {
        let template = Template::find("trap").unwrap();
        assert_eq!(template.name, "Trap");
        assert_eq!(template.sections.len(), 9);
        assert_eq!(template.sections[6], Breakdown);
    }

    #[test]
    fn test_find_unknown_template() {
        assert!(Template::find("polka").is_none());
    }

    #[test]
    fn test_default_template_matches_id() {
        assert_eq!(Template::default_template().id, DEFAULT_TEMPLATE_ID);
        assert_eq!(Template::find(DEFAULT_TEMPLATE_ID), Some(&DEFAULT_TEMPLATE));
    }

    #[test]
    fn test_template_ids_unique() {
        for (i, a) in TEMPLATES.iter().enumerate() {
            assert!(TEMPLATES[i + 1..].iter().all(|b| b.id != a.id));
        }
    }
}
