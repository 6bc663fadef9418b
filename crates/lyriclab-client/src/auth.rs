//! Sign-in session handling.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use lyriclab_core::User;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session_token";

#[derive(Debug, Serialize)]
struct SessionRequest<'a> {
    session_id: &'a str,
}

/// A signed-in session, as kept on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
}

impl ApiClient {
    /// Exchange a session id from the identity provider for a session. The
    /// returned token is also attached to this client.
    pub async fn create_session(&mut self, session_id: &str) -> ApiResult<Session> {
        let builder = self
            .request(Method::POST, "auth/session")
            .json(&SessionRequest { session_id });
        let response = self.send_raw(builder).await?;

        let token = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(session_token_from_cookie)
            .ok_or_else(|| ApiError::Parse {
                message: format!("response did not set the {SESSION_COOKIE} cookie"),
            })?;

        let user: User = response.json().await.map_err(|e| ApiError::Parse {
            message: e.to_string(),
        })?;

        log::info!("Signed in as {} <{}>", user.name, user.email);
        self.set_session_token(Some(token.clone()));
        Ok(Session {
            token,
            user,
            created_at: Utc::now(),
        })
    }

    /// The user the current session belongs to.
    pub async fn current_user(&self) -> ApiResult<User> {
        self.send_json(self.request(Method::GET, "auth/me")).await
    }

    /// End the session on the server and forget the token locally.
    ///
    /// The server looks the session up by cookie, so the token goes out as
    /// `session_token` as well as in the bearer header.
    pub async fn logout(&mut self) -> ApiResult<()> {
        let mut builder = self.request(Method::POST, "auth/logout");
        if let Some(token) = self.session_token() {
            builder = builder.header(COOKIE, format!("{SESSION_COOKIE}={token}"));
        }
        let result = self.send_empty(builder).await;
        self.set_session_token(None);
        result
    }
}

/// Pull the session token out of one `Set-Cookie` header value.
fn session_token_from_cookie(header: &str) -> Option<String> {
    let pair = header.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;
    let value = value.trim().trim_matches('"');
    (name.trim() == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
}

/// Persists the session between invocations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(crate::config::session_file_path())
    }
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved session, or `None` when nobody is signed in.
    pub fn load(&self) -> ApiResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            ApiError::Session(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let session = serde_json::from_str(&text).map_err(|e| {
            ApiError::Session(format!("corrupt session file {}: {e}", self.path.display()))
        })?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::Session(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        let text = serde_json::to_string_pretty(session)
            .map_err(|e| ApiError::Session(e.to_string()))?;
        std::fs::write(&self.path, text).map_err(|e| {
            ApiError::Session(format!("cannot write {}: {e}", self.path.display()))
        })?;
        log::debug!("Saved session to {}", self.path.display());
        Ok(())
    }

    /// Remove the saved session. Returns `false` if there was none.
    pub fn clear(&self) -> ApiResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path).map_err(|e| {
            ApiError::Session(format!("cannot remove {}: {e}", self.path.display()))
        })?;
        Ok(true)
    }
}
