use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use lyriclab_client::lyrics::join_rhyme_overrides;
use lyriclab_client::{ApiClient, Config, Notice, NoticeLevel, Studio, TransformOptions};
use lyriclab_core::catalog::TransformPreset;
use lyriclab_core::lyrics::unique_section_headers;
use lyriclab_core::{SongForm, SongId, SongSpec};

use super::connect;

/// Where a command gets its spec and lyrics from, and where the result goes.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SessionArgs {
    /// Song spec file (TOML, or JSON by extension); defaults apply when omitted
    #[arg(long, short = 's')]
    pub spec: Option<PathBuf>,

    /// File holding the current lyrics
    #[arg(long, short = 'l')]
    pub lyrics: Option<PathBuf>,

    /// Start from a saved song; --spec and --lyrics override its parts
    #[arg(long)]
    pub song: Option<String>,

    /// Write the resulting lyrics to this file instead of stdout
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

/// What a transform should change.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TransformArgs {
    /// Start from a preset: Love Song, Party Anthem, Melancholic, Empowering, Summer Vibes, Heartbreak
    #[arg(long)]
    pub preset: Option<String>,

    #[arg(long)]
    pub topic: Option<String>,

    #[arg(long)]
    pub mood: Option<String>,

    #[arg(long)]
    pub genre: Option<String>,

    /// Let the cadence change
    #[arg(long)]
    pub free_cadence: bool,

    /// Let the rhyme scheme change
    #[arg(long)]
    pub free_rhyme: bool,

    /// Let the section structure change
    #[arg(long)]
    pub free_structure: bool,

    /// Anything else the rewrite should take into account
    #[arg(long)]
    pub instructions: Option<String>,
}

impl TransformArgs {
    pub fn options(&self) -> Result<TransformOptions> {
        let mut options = match &self.preset {
            Some(label) => {
                let preset = TransformPreset::find(label)
                    .with_context(|| format!("Unknown transform preset: {label}"))?;
                TransformOptions::from_preset(preset)
            }
            None => TransformOptions::new(),
        };
        if let Some(topic) = &self.topic {
            options = options.with_topic(topic);
        }
        if let Some(mood) = &self.mood {
            options = options.with_mood(mood);
        }
        if let Some(genre) = &self.genre {
            options = options.with_genre(genre);
        }
        if let Some(instructions) = &self.instructions {
            options = options.with_instructions(instructions);
        }
        Ok(options
            .keep_cadence(!self.free_cadence)
            .keep_rhyme_scheme(!self.free_rhyme)
            .keep_structure(!self.free_structure))
    }
}

/// Build a studio from a saved song and/or local files.
pub async fn open_studio(config: &Config, args: &SessionArgs) -> Result<Studio<ApiClient>> {
    let client = connect(config)?;

    let mut studio = match &args.song {
        Some(id) => {
            let song = client.get_song(&SongId::new(id.as_str())).await?;
            log::debug!("Continuing song {} ({})", song.song_id, song.title);
            Studio::from_song(client, &song)
        }
        None => Studio::new(client),
    };

    if let Some(path) = &args.spec {
        let spec = SongSpec::load(path)
            .with_context(|| format!("Failed to read spec file {}", path.display()))?;
        studio = studio.with_form(SongForm::from_spec(spec));
    }

    if let Some(path) = &args.lyrics {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lyrics file {}", path.display()))?;
        studio.set_lyrics(text);
    }

    Ok(studio)
}

pub fn report(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success => eprintln!("✓ {notice}"),
        NoticeLevel::Warning => eprintln!("! {notice}"),
    }
}

/// Headers of `lyrics` that do not name `section`, or `None` when the
/// section is present (or the lyrics carry no headers at all).
fn missing_section(lyrics: &str, section: &str) -> Option<Vec<String>> {
    let headers = unique_section_headers(lyrics);
    let wanted = section.trim();
    if headers.is_empty() || headers.iter().any(|h| h.eq_ignore_ascii_case(wanted)) {
        None
    } else {
        Some(headers)
    }
}

/// Hint at the headers the lyrics actually use; the request still goes out.
fn check_section(studio: &Studio<ApiClient>, section: &str) {
    if let Some(headers) = missing_section(studio.lyrics(), section) {
        log::warn!("Section {} not found among lyric headers", section);
        eprintln!("! No [{}] header in the lyrics; found: {}", section, headers.join(", "));
    }
}

/// Print or write out the studio's lyrics.
fn emit_lyrics(studio: &Studio<ApiClient>, out: Option<&PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, studio.lyrics())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("  Lyrics written to {}", path.display());
        }
        None => println!("{}", studio.lyrics()),
    }
    Ok(())
}

pub async fn run_generate(config: &Config, args: &SessionArgs) -> Result<()> {
    let mut studio = open_studio(config, args).await?;
    let notice = studio.generate().await?;
    report(&notice);
    emit_lyrics(&studio, args.out.as_ref())
}

pub async fn run_rewrite(config: &Config, args: &SessionArgs) -> Result<()> {
    let mut studio = open_studio(config, args).await?;
    let notice = studio.rewrite().await?;
    report(&notice);
    emit_lyrics(&studio, args.out.as_ref())
}

pub async fn run_rewrite_section(
    config: &Config,
    args: &SessionArgs,
    section: &str,
    rhymes: &[String],
) -> Result<()> {
    let mut studio = open_studio(config, args).await?;
    check_section(&studio, section);
    let rhyme_override = join_rhyme_overrides(rhymes);
    let notice = studio
        .rewrite_section(section, rhyme_override.as_deref())
        .await?;
    report(&notice);
    emit_lyrics(&studio, args.out.as_ref())
}

pub async fn run_variations(
    config: &Config,
    args: &SessionArgs,
    section: Option<&str>,
    rhymes: &[String],
    count: u8,
    pick: Option<usize>,
) -> Result<()> {
    let mut studio = open_studio(config, args).await?;
    if let Some(section) = section {
        check_section(&studio, section);
    }
    let rhyme_override = join_rhyme_overrides(rhymes);
    let notice = studio
        .generate_variations(section, rhyme_override.as_deref(), count)
        .await?;
    report(&notice);

    if let Some(number) = pick {
        let available = studio.variations().len();
        let Some(applied) = number
            .checked_sub(1)
            .and_then(|position| studio.select_variation(position))
        else {
            bail!("No variation {number}; {available} available");
        };
        report(&applied);
        return emit_lyrics(&studio, args.out.as_ref());
    }

    for (position, variation) in studio.variations().iter().enumerate() {
        println!("── Variation {} ──", position + 1);
        println!("{}\n", variation.lyrics.trim_end());
    }
    if !studio.variations().is_empty() {
        eprintln!("  Use --pick N to keep one.");
    }
    Ok(())
}

pub async fn run_edit(
    config: &Config,
    args: &SessionArgs,
    section: Option<&str>,
    prompt: &str,
) -> Result<()> {
    let mut studio = open_studio(config, args).await?;
    if let Some(section) = section {
        check_section(&studio, section);
    }
    let notice = studio.custom_edit(section, prompt).await?;
    report(&notice);
    emit_lyrics(&studio, args.out.as_ref())
}

pub async fn run_transform(
    config: &Config,
    args: &SessionArgs,
    transform: &TransformArgs,
) -> Result<()> {
    let options = transform.options()?;
    let mut studio = open_studio(config, args).await?;
    let notice = studio.transform(&options).await?;
    report(&notice);
    emit_lyrics(&studio, args.out.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_args_defaults_keep_everything() {
        let options = TransformArgs::default().options().unwrap();
        assert_eq!(options, TransformOptions::new());
    }

    #[test]
    fn test_transform_args_preset_with_override() {
        let args = TransformArgs {
            preset: Some("party anthem".to_string()),
            genre: Some("Disco".to_string()),
            free_structure: true,
            ..TransformArgs::default()
        };
        let options = args.options().unwrap();
        assert_eq!(options.new_mood.as_deref(), Some("Energetic, celebratory"));
        assert_eq!(options.new_genre.as_deref(), Some("Disco"));
        assert!(!options.keep_structure);
        assert!(options.keep_cadence);
    }

    #[test]
    fn test_unknown_preset_fails() {
        let args = TransformArgs {
            preset: Some("Polka Party".to_string()),
            ..TransformArgs::default()
        };
        assert!(args.options().is_err());
    }

    #[test]
    fn test_missing_section() {
        let lyrics = "[VERSE 1]\nfirst\n\n[CHORUS]\nhook\n";
        assert_eq!(missing_section(lyrics, "chorus"), None);
        assert_eq!(missing_section(lyrics, " Verse 1 "), None);
        assert_eq!(
            missing_section(lyrics, "Bridge"),
            Some(vec!["VERSE 1".to_string(), "CHORUS".to_string()])
        );
        assert_eq!(missing_section("no headers here", "Bridge"), None);
    }

    #[tokio::test]
    async fn test_open_studio_reads_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let spec_path = dir.path().join("song.toml");
        let lyrics_path = dir.path().join("lyrics.txt");
        std::fs::write(&spec_path, "title = \"Tide\"\nstructure = \"verse/hook\"\n").unwrap();
        std::fs::write(&lyrics_path, "[HOOK]\nroll in").unwrap();

        let args = SessionArgs {
            spec: Some(spec_path),
            lyrics: Some(lyrics_path),
            ..SessionArgs::default()
        };
        let studio = open_studio(&Config::default(), &args).await.unwrap();
        assert_eq!(studio.form().spec().title, "Tide");
        assert_eq!(studio.form().spec().structure, "verse/hook");
        assert_eq!(studio.form().structure().serialize(), "Verse/Hook");
        assert_eq!(studio.lyrics(), "[HOOK]\nroll in");
        assert!(studio.current_song_id().is_none());
    }
}
