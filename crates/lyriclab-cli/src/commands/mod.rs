pub mod auth;
pub mod config;
pub mod lyrics;
pub mod songs;
pub mod spec;
pub mod structure;

use anyhow::Result;
use lyriclab_client::{ApiClient, ApiError, Config, SessionStore};

/// Build an API client carrying the configured token, or else the one
/// saved by `lyriclab login`.
pub fn connect(config: &Config) -> Result<ApiClient> {
    let mut client = ApiClient::from_config(config)?;
    if client.session_token().is_none() {
        match SessionStore::default().load()? {
            Some(session) => client.set_session_token(Some(session.token)),
            None => log::debug!("No saved session; requests will be anonymous"),
        }
    }
    Ok(client)
}

/// A follow-up line for errors the user can act on.
pub fn hint(error: &anyhow::Error) -> Option<&'static str> {
    let api = error.downcast_ref::<ApiError>()?;
    if api.is_transient() {
        Some("The LyricLab server is busy or unreachable; try again in a moment.")
    } else if api.is_not_found() {
        Some("Run 'lyriclab songs list' to see the ids of your saved songs.")
    } else {
        None
    }
}
