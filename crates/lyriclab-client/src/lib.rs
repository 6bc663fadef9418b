//! Client side of LyricLab.
//!
//! Talks to the LyricLab API (lyrics generation, the song library and
//! sign-in), loads configuration, and provides the [`Studio`] editing
//! session that ties a song spec and its lyrics to the generation calls.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod auth;
pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod lyrics;
pub mod songs;
pub mod studio;

pub use auth::{Session, SessionStore};
pub use backend::LyricsBackend;
pub use client::{ApiClient, DEFAULT_API_URL};
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use lyrics::{TransformOptions, Variation, VariationSet};
pub use studio::{Notice, NoticeLevel, Studio};
