//! Song library endpoints.

use reqwest::Method;

use lyriclab_core::{NewSong, Song, SongId, SongUpdate};

use crate::client::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    /// All of the user's songs, newest first.
    pub async fn list_songs(&self) -> ApiResult<Vec<Song>> {
        self.send_json(self.request(Method::GET, "songs")).await
    }

    pub async fn get_song(&self, id: &SongId) -> ApiResult<Song> {
        self.send_json(self.request(Method::GET, &song_path(id))).await
    }

    pub async fn create_song(&self, song: &NewSong) -> ApiResult<Song> {
        let builder = self.request(Method::POST, "songs").json(song);
        let created: Song = self.send_json(builder).await?;
        log::info!("Created song {} ({})", created.song_id, created.title);
        Ok(created)
    }

    /// Apply a partial update. The server records the previous lyrics in the
    /// version history when `lyrics_text` changes.
    pub async fn update_song(&self, id: &SongId, update: &SongUpdate) -> ApiResult<Song> {
        let builder = self.request(Method::PUT, &song_path(id)).json(update);
        self.send_json(builder).await
    }

    pub async fn delete_song(&self, id: &SongId) -> ApiResult<()> {
        self.send_empty(self.request(Method::DELETE, &song_path(id)))
            .await?;
        log::info!("Deleted song {}", id);
        Ok(())
    }

    /// Copy a song; the copy is a fresh draft titled "<title> (Copy)".
    pub async fn duplicate_song(&self, id: &SongId) -> ApiResult<Song> {
        let path = format!("{}/duplicate", song_path(id));
        self.send_json(self.request(Method::POST, &path)).await
    }
}

fn song_path(id: &SongId) -> String {
    format!("songs/{id}")
}
