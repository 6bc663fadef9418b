//! API client tests against a mocked LyricLab server.

use std::time::Duration;

use lyriclab_client::{ApiClient, ApiError, Studio, TransformOptions};
use lyriclab_core::{SongId, SongSpec, SongStatus, SongUpdate, SpecUpdate};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

const TOKEN: &str = "sess_test";

fn client_for(server: &ServerGuard) -> ApiClient {
    ApiClient::new(format!("{}/api", server.url()), Duration::from_secs(5))
        .unwrap()
        .with_session_token(TOKEN)
}

fn song_json(id: &str, title: &str, status: &str) -> serde_json::Value {
    json!({
        "song_id": id,
        "user_id": "user_1",
        "title": title,
        "lyrics_text": "[CHORUS]\nhold on",
        "song_spec_json": {"title": title},
        "status": status,
        "used_in_final_track": false,
        "created_at": "2025-05-01T08:00:00+00:00",
        "updated_at": "2025-05-01T08:00:00+00:00",
        "version_history": []
    })
}

#[tokio::test]
async fn test_generate_sends_spec_with_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/lyrics/generate")
        .match_header("authorization", "Bearer sess_test")
        .match_body(Matcher::PartialJson(json!({
            "song_spec": {"genre": "Pop", "structure": "Verse/Chorus/Verse/Chorus/Bridge/Chorus"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"lyrics": "[VERSE 1]\nneon rain"}"#)
        .create_async()
        .await;

    let spec = SongSpec {
        genre: "Pop".to_string(),
        ..SongSpec::default()
    };
    let lyrics = client_for(&server).generate_lyrics(&spec).await.unwrap();

    assert_eq!(lyrics, "[VERSE 1]\nneon rain");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_maps_detail() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/songs")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Session expired"}"#)
        .create_async()
        .await;

    let err = client_for(&server).list_songs().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(err.to_string().contains("Session expired"));
}

#[tokio::test]
async fn test_missing_song_is_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/songs/song_gone")
        .with_status(404)
        .with_body(r#"{"detail": "Song not found"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .get_song(&SongId::new("song_gone"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_server_error_without_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/lyrics/rewrite")
        .with_status(502)
        .create_async()
        .await;

    let err = client_for(&server)
        .rewrite_lyrics(&SongSpec::default(), "la")
        .await
        .unwrap_err();
    match err {
        ApiError::Http { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_variation_count_is_clamped() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/lyrics/variations")
        .match_body(Matcher::PartialJson(json!({
            "count": 6,
            "section": "Chorus",
            "section_rhyme_scheme": "ABAB + Internal"
        })))
        .with_status(200)
        .with_body(
            json!({
                "variations": [{"index": 1, "lyrics": "a"}, {"index": 2, "lyrics": "b"}],
                "total_requested": 6,
                "total_generated": 2
            })
            .to_string(),
        )
        .create_async()
        .await;

    let set = client_for(&server)
        .generate_variations(
            &SongSpec::default(),
            "la",
            Some("Chorus"),
            Some("ABAB + Internal"),
            12,
        )
        .await
        .unwrap();

    assert_eq!(set.variations.len(), 2);
    assert_eq!(set.total_generated, 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_transform_request_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/lyrics/transform")
        .match_body(Matcher::Json(json!({
            "current_lyrics": "old words",
            "new_topic": "road trip",
            "new_mood": null,
            "new_genre": "Country",
            "keep_cadence": false,
            "keep_rhyme_scheme": true,
            "keep_structure": true,
            "additional_instructions": null
        })))
        .with_status(200)
        .with_body(r#"{"lyrics": "new words"}"#)
        .create_async()
        .await;

    let options = TransformOptions::new()
        .with_topic("road trip")
        .with_genre("Country")
        .keep_cadence(false);
    let lyrics = client_for(&server)
        .transform_lyrics("old words", &options)
        .await
        .unwrap();

    assert_eq!(lyrics, "new words");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_partial_update_sends_only_set_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/songs/song_1")
        .match_body(Matcher::Json(json!({"used_in_final_track": true})))
        .with_status(200)
        .with_body(song_json("song_1", "Harbor", "draft").to_string())
        .create_async()
        .await;

    let update = SongUpdate::new().with_used_in_final_track(true);
    let song = client_for(&server)
        .update_song(&SongId::new("song_1"), &update)
        .await
        .unwrap();

    assert_eq!(song.title, "Harbor");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_and_duplicate_songs() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/songs")
        .with_status(200)
        .with_body(
            json!([
                song_json("song_2", "Newer", "done"),
                song_json("song_1", "Older", "draft")
            ])
            .to_string(),
        )
        .create_async()
        .await;
    let duplicate = server
        .mock("POST", "/api/songs/song_1/duplicate")
        .with_status(200)
        .with_body(song_json("song_3", "Older (Copy)", "draft").to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let songs = client.list_songs().await.unwrap();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].status, SongStatus::Done);

    let copy = client.duplicate_song(&songs[1].song_id).await.unwrap();
    assert_eq!(copy.title, "Older (Copy)");
    duplicate.assert_async().await;
}

#[tokio::test]
async fn test_create_session_reads_cookie() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/session")
        .match_body(Matcher::Json(json!({"session_id": "abc"})))
        .with_status(200)
        .with_header(
            "set-cookie",
            "session_token=sess_fresh; HttpOnly; Path=/; SameSite=none; Secure",
        )
        .with_body(
            json!({
                "user_id": "user_1",
                "email": "ana@example.com",
                "name": "Ana",
                "picture": null,
                "created_at": "2025-01-01T00:00:00+00:00"
            })
            .to_string(),
        )
        .create_async()
        .await;
    let me = server
        .mock("GET", "/api/auth/me")
        .match_header("authorization", "Bearer sess_fresh")
        .with_status(200)
        .with_body(r#"{"user_id": "user_1", "email": "ana@example.com", "name": "Ana"}"#)
        .create_async()
        .await;

    let mut client = ApiClient::new(format!("{}/api", server.url()), Duration::from_secs(5)).unwrap();
    let session = client.create_session("abc").await.unwrap();
    assert_eq!(session.token, "sess_fresh");
    assert_eq!(session.user.name, "Ana");
    assert_eq!(client.session_token(), Some("sess_fresh"));

    let user = client.current_user().await.unwrap();
    assert_eq!(user.email, "ana@example.com");
    me.assert_async().await;
}

#[tokio::test]
async fn test_logout_forgets_token_even_on_failure() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/logout")
        .match_header("cookie", "session_token=sess_test")
        .match_header("authorization", "Bearer sess_test")
        .with_status(500)
        .create_async()
        .await;

    let mut client = client_for(&server);
    assert!(client.logout().await.is_err());
    assert!(client.session_token().is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_studio_save_done_on_new_song() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/api/songs")
        .match_body(Matcher::PartialJson(json!({
            "title": "Harbor",
            "lyrics_text": "[CHORUS]\nhold on"
        })))
        .with_status(201)
        .with_body(song_json("song_9", "Harbor", "draft").to_string())
        .create_async()
        .await;
    let mark_done = server
        .mock("PUT", "/api/songs/song_9")
        .match_body(Matcher::Json(json!({"status": "done"})))
        .with_status(200)
        .with_body(song_json("song_9", "Harbor", "done").to_string())
        .create_async()
        .await;

    let mut studio = Studio::new(client_for(&server)).with_lyrics("[CHORUS]\nhold on");
    studio.update_field(SpecUpdate::Title("Harbor".to_string()));
    let notice = studio.save(SongStatus::Done).await.unwrap();

    assert_eq!(notice.message, "Song saved and marked as done!");
    assert_eq!(studio.current_song_id(), Some(&SongId::new("song_9")));
    create.assert_async().await;
    mark_done.assert_async().await;
}
