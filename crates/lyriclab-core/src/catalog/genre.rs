/// A top-level genre and the sub-genres offered under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre {
    pub name: &'static str,
    pub subgenres: &'static [&'static str],
}

impl Genre {
    /// Look up a genre by exact name.
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Self> {
        GENRES.iter().find(|genre| genre.name == name)
    }

    /// Sub-genres for `name`, or an empty slice when the genre is unset
    /// or unknown.
    #[must_use]
    pub fn subgenres_of(name: &str) -> &'static [&'static str] {
        Self::find(name)
            .map(|genre| genre.subgenres)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_subgenre(&self, subgenre: &str) -> bool {
        self.subgenres.contains(&subgenre)
    }
}

pub const GENRES: &[Genre] = &[
    Genre {
        name: "Rock",
        subgenres: &[
            "Classic Rock",
            "Indie Rock",
            "Alternative Rock",
            "Hard Rock",
            "Punk Rock",
            "Progressive Rock",
            "Grunge",
        ],
    },
    Genre {
        name: "Pop",
        subgenres: &[
            "Synth Pop",
            "Electropop",
            "Dance Pop",
            "Indie Pop",
            "Art Pop",
            "Trap Pop",
            "K-Pop",
        ],
    },
    Genre {
        name: "Hip-Hop/Rap",
        subgenres: &[
            "Trap",
            "Boom Bap",
            "Conscious Rap",
            "Gangsta Rap",
            "Pop Rap",
            "Mumble Rap",
            "Country Hip-Hop",
        ],
    },
    Genre {
        name: "Country",
        subgenres: &[
            "Traditional Country",
            "Country Pop",
            "Country Rock",
            "Outlaw Country",
            "Country Hip-Hop",
            "Bro-Country",
        ],
    },
    Genre {
        name: "R&B",
        subgenres: &[
            "Contemporary R&B",
            "Neo-Soul",
            "Quiet Storm",
            "New Jack Swing",
            "Alternative R&B",
        ],
    },
    Genre {
        name: "Electronic",
        subgenres: &[
            "House",
            "Techno",
            "Dubstep",
            "Drum & Bass",
            "Trance",
            "Ambient",
            "EDM",
        ],
    },
    Genre {
        name: "Metal",
        subgenres: &[
            "Heavy Metal",
            "Death Metal",
            "Black Metal",
            "Thrash Metal",
            "Nu Metal",
            "Metalcore",
            "Power Metal",
        ],
    },
    Genre {
        name: "Emo",
        subgenres: &["Midwest Emo", "Screamo", "Post-Hardcore", "Emo Pop", "Emo Rap"],
    },
    Genre {
        name: "Jazz",
        subgenres: &["Bebop", "Smooth Jazz", "Jazz Fusion", "Vocal Jazz", "Acid Jazz"],
    },
    Genre {
        name: "Folk",
        subgenres: &[
            "Indie Folk",
            "Folk Rock",
            "Americana",
            "Contemporary Folk",
            "Freak Folk",
        ],
    },
    Genre {
        name: "Punk",
        subgenres: &["Pop Punk", "Hardcore Punk", "Post-Punk", "Ska Punk", "Crust Punk"],
    },
    Genre {
        name: "Alternative",
        subgenres: &["Shoegaze", "Dream Pop", "Post-Rock", "Noise Rock", "Slowcore"],
    },
    Genre {
        name: "Latin",
        subgenres: &["Reggaeton", "Latin Pop", "Bachata", "Salsa", "Latin Trap"],
    },
    Genre {
        name: "Soul",
        subgenres: &[
            "Classic Soul",
            "Southern Soul",
            "Psychedelic Soul",
            "Blue-Eyed Soul",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_count() {
        assert_eq!(GENRES.len(), 14);
    }

    #[test]
    fn test_subgenres_of_known_genre() {
        let subs = Genre::subgenres_of("Jazz");
        assert_eq!(subs.first(), Some(&"Bebop"));
        assert!(Genre::find("Jazz").unwrap().has_subgenre("Vocal Jazz"));
    }

    #[test]
    fn test_subgenres_of_unknown_or_empty_genre() {
        assert!(Genre::subgenres_of("").is_empty());
        assert!(Genre::subgenres_of("Polka").is_empty());
    }
}
