//! The song specification and the form that edits it.

pub mod form;
pub mod song_spec;

pub use form::{SongForm, SpecUpdate};
pub use song_spec::{
    Perspective, Profanity, Slider, SongSpec, DEFAULT_RHYME_SCHEME, DEFAULT_STRUCTURE, SLIDER_MAX,
};
