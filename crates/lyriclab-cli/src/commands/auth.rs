use anyhow::{Context, Result};
use lyriclab_client::{ApiClient, Config, SessionStore};

use super::connect;

/// Exchange a session id for a session token and save it.
pub async fn run_login(config: &Config, session_id: &str) -> Result<()> {
    let mut client = ApiClient::from_config(config)?;
    let session = client
        .create_session(session_id.trim())
        .await
        .context("Sign-in failed")?;

    let store = SessionStore::default();
    store.save(&session)?;

    println!("✓ Signed in as {} <{}>", session.user.name, session.user.email);
    println!("  Session saved to {}", store.path().display());
    Ok(())
}

/// End the session. The saved token is removed even if the server call
/// fails.
pub async fn run_logout(config: &Config) -> Result<()> {
    let mut client = connect(config)?;
    let result = if client.session_token().is_some() {
        client.logout().await
    } else {
        Ok(())
    };

    let removed = SessionStore::default().clear()?;
    if let Err(error) = result {
        log::warn!("Logout request failed: {}", error);
    }

    if removed {
        println!("✓ Signed out");
    } else {
        println!("Not signed in.");
    }
    Ok(())
}

pub async fn run_whoami(config: &Config) -> Result<()> {
    let client = connect(config)?;
    let user = client.current_user().await?;

    println!("{} <{}>", user.name, user.email);
    println!("  user id: {}", user.user_id);
    if let Some(picture) = &user.picture {
        println!("  picture: {picture}");
    }
    Ok(())
}
