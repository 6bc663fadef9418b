//! Static option catalogs offered by the song form.

pub mod genre;
pub mod options;
pub mod transform;

pub use genre::{Genre, GENRES};
pub use options::{
    label_for, LabeledOption, MOODS, PERSPECTIVES, PROFANITY_OPTIONS, RHYME_SCHEMES, SECTION_TARGETS,
    STRUCTURE_PRESETS,
};
pub use transform::{TransformPreset, TRANSFORM_PRESETS};
