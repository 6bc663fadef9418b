//! Core model for LyricLab.
//!
//! This crate holds everything that does not talk to the network: the
//! song structure model and its editor, the song specification form, the
//! option catalogs offered to the writer, and the saved-song library types
//! exchanged with the server.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod library;
pub mod lyrics;
pub mod spec;
pub mod structure;

pub use error::{Error, Result};
pub use library::{NewSong, Song, SongId, SongStatus, SongUpdate, User};
pub use spec::{SongForm, SongSpec, SpecUpdate};
pub use structure::{Section, SectionType, Structure, StructureEditor, Template};
