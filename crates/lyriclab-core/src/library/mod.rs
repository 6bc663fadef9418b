//! Saved songs and the library view over them.

pub mod filter;
pub mod ids;
pub mod song;
pub mod user;

pub use filter::{LibraryFilter, StatusFilter, UsedFilter};
pub use ids::{SongId, UserId};
pub use song::{NewSong, Song, SongStatus, SongUpdate, VersionSnapshot, MAX_VERSION_HISTORY};
pub use user::User;
