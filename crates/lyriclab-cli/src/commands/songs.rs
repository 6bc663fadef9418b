use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use lyriclab_client::Config;
use lyriclab_core::library::{LibraryFilter, StatusFilter, UsedFilter};
use lyriclab_core::{Song, SongId, SongStatus, SongUpdate};

use super::connect;
use super::lyrics::{open_studio, report, SessionArgs};

fn format_song_row(song: &Song) -> String {
    let used = if song.used_in_final_track { "used" } else { "" };
    format!(
        "{:<20} {:<6} {:<5} {:<16} {}",
        song.song_id,
        song.status,
        used,
        song.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        song.title
    )
}

pub async fn run_list(
    config: &Config,
    query: Option<String>,
    status: StatusFilter,
    used: UsedFilter,
) -> Result<()> {
    let client = connect(config)?;
    let songs = client.list_songs().await?;

    let filter = LibraryFilter::new()
        .with_query(query.unwrap_or_default())
        .with_status(status)
        .with_used(used);
    let shown = filter.apply(&songs);

    if songs.is_empty() {
        println!("No saved songs yet. Generate some lyrics and run 'lyriclab songs save'.");
        return Ok(());
    }

    println!("\n🎵 Songs    {} of {}\n", shown.len(), songs.len());
    println!(
        "{:<20} {:<6} {:<5} {:<16} {}",
        "ID", "STATUS", "USED", "UPDATED", "TITLE"
    );
    for song in shown {
        println!("{}", format_song_row(song));
    }
    Ok(())
}

pub async fn run_show(config: &Config, id: &str, with_spec: bool) -> Result<()> {
    let client = connect(config)?;
    let song = client.get_song(&SongId::new(id)).await?;

    println!("{}", song.title);
    println!("  id: {}", song.song_id);
    println!("  status: {}", song.status);
    println!(
        "  used in final track: {}",
        if song.used_in_final_track { "yes" } else { "no" }
    );
    println!("  created: {}", song.created_at.format("%Y-%m-%d %H:%M"));
    println!("  updated: {}", song.updated_at.format("%Y-%m-%d %H:%M"));
    println!("  structure: {}", song.spec.structure);
    println!("  versions saved: {}\n", song.version_history.len());
    println!("{}", song.lyrics_text.trim_end());

    if with_spec {
        println!("\n# Spec\n{}", song.spec.to_toml_string()?);
    }
    Ok(())
}

/// Save through the studio so new songs and "done" follow the same rules as
/// the editor.
pub async fn run_save(config: &Config, args: &SessionArgs, done: bool) -> Result<()> {
    let mut studio = open_studio(config, args).await?;
    let status = if done {
        SongStatus::Done
    } else {
        SongStatus::Draft
    };
    let notice = studio.save(status).await?;
    report(&notice);
    if let Some(id) = studio.current_song_id() {
        println!("{id}");
    }
    Ok(())
}

pub async fn run_edit(
    config: &Config,
    id: &str,
    title: Option<String>,
    lyrics: Option<PathBuf>,
) -> Result<()> {
    let mut update = SongUpdate::new();
    if let Some(title) = title {
        update = update.with_title(title);
    }
    if let Some(path) = lyrics {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read lyrics file {}", path.display()))?;
        update = update.with_lyrics(text);
    }
    if update.is_empty() {
        bail!("Nothing to change; pass --title and/or --lyrics");
    }

    let client = connect(config)?;
    let song = client.update_song(&SongId::new(id), &update).await?;
    println!("✓ Updated {}", song.title);
    Ok(())
}

pub async fn run_status(config: &Config, id: &str, status: Option<SongStatus>) -> Result<()> {
    let client = connect(config)?;
    let id = SongId::new(id);
    let status = match status {
        Some(status) => status,
        None => client.get_song(&id).await?.status.toggled(),
    };
    let song = client
        .update_song(&id, &SongUpdate::new().with_status(status))
        .await?;
    println!("✓ {} is now {}", song.title, song.status);
    Ok(())
}

pub async fn run_used(config: &Config, id: &str, used: Option<bool>) -> Result<()> {
    let client = connect(config)?;
    let id = SongId::new(id);
    let used = match used {
        Some(used) => used,
        None => !client.get_song(&id).await?.used_in_final_track,
    };
    let song = client
        .update_song(&id, &SongUpdate::new().with_used_in_final_track(used))
        .await?;
    if song.used_in_final_track {
        println!("✓ {} marked as used in a final track", song.title);
    } else {
        println!("✓ {} no longer marked as used", song.title);
    }
    Ok(())
}

pub async fn run_duplicate(config: &Config, id: &str) -> Result<()> {
    let client = connect(config)?;
    let copy = client.duplicate_song(&SongId::new(id)).await?;
    println!("✓ Created {} ({})", copy.title, copy.song_id);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

pub async fn run_delete(config: &Config, id: &str, yes: bool) -> Result<()> {
    let client = connect(config)?;
    let id = SongId::new(id);

    if !yes {
        let song = client.get_song(&id).await?;
        if !confirm(&format!("Delete \"{}\"?", song.title))? {
            println!("Kept {}.", song.title);
            return Ok(());
        }
    }

    client.delete_song(&id).await?;
    println!("✓ Deleted {id}");
    Ok(())
}

pub async fn run_history(config: &Config, id: &str) -> Result<()> {
    let client = connect(config)?;
    let song = client.get_song(&SongId::new(id)).await?;

    if song.version_history.is_empty() {
        println!("No earlier versions of {}.", song.title);
        return Ok(());
    }

    println!("Earlier versions of {} (newest first)\n", song.title);
    let count = song.version_history.len();
    for (offset, snapshot) in song.history_newest_first().enumerate() {
        println!(
            "── Version {} · saved {} ──",
            count - offset,
            snapshot.saved_at.format("%Y-%m-%d %H:%M")
        );
        println!("{}\n", snapshot.lyrics_text.trim_end());
    }
    println!("Run 'lyriclab songs restore {} <version>' to bring one back.", song.song_id);
    Ok(())
}

/// Versions are numbered from 1 (oldest) as `songs history` shows them.
pub async fn run_restore(config: &Config, id: &str, version: usize) -> Result<()> {
    let client = connect(config)?;
    let id = SongId::new(id);
    let song = client.get_song(&id).await?;

    let Some(update) = version
        .checked_sub(1)
        .and_then(|index| song.restore_update(index))
    else {
        bail!(
            "No version {version}; {} has {} saved",
            song.title,
            song.version_history.len()
        );
    };

    let restored = client.update_song(&id, &update).await?;
    println!("✓ Restored version {version} of {}", restored.title);
    Ok(())
}
