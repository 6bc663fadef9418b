use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use lyriclab_client::Config;
use lyriclab_core::library::{StatusFilter, UsedFilter};
use lyriclab_core::SongStatus;

mod commands;
mod tui;

use commands::lyrics::{SessionArgs, TransformArgs};

#[derive(Debug, Parser)]
#[command(name = "lyriclab", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the LyricLab API (default: http://localhost:8000/api)
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Sign in with a session id from the LyricLab web sign-in
    ///
    /// The id is exchanged for a session token, which is saved under the
    /// platform data directory and sent with every later command.
    Login {
        /// Session id handed out by the identity provider
        session_id: String,
    },
    /// Sign out and forget the saved session
    Logout,
    /// Show who is signed in
    Whoami,

    /// Write new lyrics from a song spec
    Generate {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Rewrite the whole song
    Rewrite {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Rewrite one section of the song
    ///
    /// Pass --rhyme several times to combine rhyme schemes for the section,
    /// e.g. --rhyme AABB --rhyme Internal.
    RewriteSection {
        /// Section to rewrite, e.g. "Verse 1" or "Chorus"
        section: String,

        /// Rhyme scheme override for this section
        #[arg(long = "rhyme")]
        rhymes: Vec<String>,

        #[command(flatten)]
        session: SessionArgs,
    },
    /// Generate alternative versions of the song or one section
    Variations {
        /// Limit the variations to one section
        #[arg(long)]
        section: Option<String>,

        /// Rhyme scheme override (repeatable)
        #[arg(long = "rhyme")]
        rhymes: Vec<String>,

        /// How many variations to ask for (1-6)
        #[arg(long, short = 'n', default_value_t = lyriclab_client::lyrics::DEFAULT_VARIATIONS)]
        count: u8,

        /// Use variation N (1-based) as the new lyrics
        #[arg(long)]
        pick: Option<usize>,

        #[command(flatten)]
        session: SessionArgs,
    },
    /// Apply free-text instructions to the song or one section
    Edit {
        /// What to change, e.g. "make the chorus more hopeful"
        prompt: String,

        /// Limit the edit to one section
        #[arg(long)]
        section: Option<String>,

        #[command(flatten)]
        session: SessionArgs,
    },
    /// Move the lyrics to a new topic, mood or genre
    Transform {
        #[command(flatten)]
        transform: TransformArgs,

        #[command(flatten)]
        session: SessionArgs,
    },

    /// Manage saved songs
    #[command(subcommand)]
    Songs(SongsCommand),

    /// Work with song structures
    #[command(subcommand)]
    Structure(StructureCommand),

    /// Create and edit song spec files
    #[command(subcommand)]
    Spec(SpecCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, clap::Subcommand)]
enum SongsCommand {
    /// List saved songs, newest first
    List {
        /// Only titles containing this text (case-insensitive)
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// all, draft or done
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// all, used or unused
        #[arg(long, default_value = "all")]
        used: UsedFilter,
    },
    /// Show a song's lyrics and details
    Show {
        id: String,

        /// Print the stored spec as TOML as well
        #[arg(long)]
        spec: bool,
    },
    /// Save lyrics as a new song, or update the song given with --song
    Save {
        /// Mark the song as done instead of draft
        #[arg(long)]
        done: bool,

        #[command(flatten)]
        session: SessionArgs,
    },
    /// Change a song's title or lyrics
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// File with the new lyrics
        #[arg(long)]
        lyrics: Option<PathBuf>,
    },
    /// Set a song's status, or toggle it when no status is given
    Status {
        id: String,
        status: Option<SongStatus>,
    },
    /// Mark whether a song is used in a final track, or toggle it
    Used { id: String, used: Option<bool> },
    /// Copy a song
    Duplicate { id: String },
    /// Delete a song
    Delete {
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// List the saved prior versions of a song's lyrics
    History { id: String },
    /// Put a prior version back as the current lyrics
    Restore {
        id: String,

        /// Version number as shown by `songs history`
        version: usize,
    },
}

#[derive(Debug, clap::Subcommand)]
enum StructureCommand {
    /// List the section types
    Sections,
    /// List the structure templates
    Templates,
    /// Parse a structure string and show how it is understood
    Parse { text: String },
    /// Edit the structure of a spec file interactively
    Edit {
        /// Spec file to edit (created with defaults if missing)
        #[arg(default_value = "song.toml")]
        file: PathBuf,
    },
}

#[derive(Debug, clap::Subcommand)]
enum SpecCommand {
    /// Write a spec file with default values
    Init {
        #[arg(default_value = "song.toml")]
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show a spec file
    Show {
        #[arg(default_value = "song.toml")]
        file: PathBuf,
    },
    /// Set one field of a spec file
    ///
    /// Keys are the spec field names, e.g. genre, custom_mood, structure,
    /// rhyme_variety or forbidden_words (comma-separated).
    Set {
        key: String,
        value: String,

        #[arg(long, short = 'f', default_value = "song.toml")]
        file: PathBuf,
    },
    /// List the values offered for spec fields
    Options {
        /// Only this field (genres, moods, perspectives, structures, rhymes, profanity, sections, presets)
        field: Option<String>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Print one value, or the whole config file
    Get { key: Option<String> },
    /// Set a value in the config file
    Set { key: String, value: String },
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn setup_logging(config: &Config) {
    if let Err(error) = twyg::setup(config.logging.clone()) {
        eprintln!("Could not set up logging: {error:?}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_with_api_url(cli.api_url)?;
    setup_logging(&config);

    let result = run(cli.command, &config).await;
    if let Some(hint) = result.as_ref().err().and_then(commands::hint) {
        eprintln!("{hint}");
    }
    result
}

async fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Login { session_id } => commands::auth::run_login(config, &session_id).await?,
        Commands::Logout => commands::auth::run_logout(config).await?,
        Commands::Whoami => commands::auth::run_whoami(config).await?,

        Commands::Generate { session } => commands::lyrics::run_generate(config, &session).await?,
        Commands::Rewrite { session } => commands::lyrics::run_rewrite(config, &session).await?,
        Commands::RewriteSection {
            section,
            rhymes,
            session,
        } => commands::lyrics::run_rewrite_section(config, &session, &section, &rhymes).await?,
        Commands::Variations {
            section,
            rhymes,
            count,
            pick,
            session,
        } => {
            commands::lyrics::run_variations(
                config,
                &session,
                section.as_deref(),
                &rhymes,
                count,
                pick,
            )
            .await?;
        }
        Commands::Edit {
            prompt,
            section,
            session,
        } => commands::lyrics::run_edit(config, &session, section.as_deref(), &prompt).await?,
        Commands::Transform { transform, session } => {
            commands::lyrics::run_transform(config, &session, &transform).await?;
        }

        Commands::Songs(command) => match command {
            SongsCommand::List {
                query,
                status,
                used,
            } => commands::songs::run_list(config, query, status, used).await?,
            SongsCommand::Show { id, spec } => commands::songs::run_show(config, &id, spec).await?,
            SongsCommand::Save { done, session } => {
                commands::songs::run_save(config, &session, done).await?;
            }
            SongsCommand::Edit { id, title, lyrics } => {
                commands::songs::run_edit(config, &id, title, lyrics).await?;
            }
            SongsCommand::Status { id, status } => {
                commands::songs::run_status(config, &id, status).await?;
            }
            SongsCommand::Used { id, used } => commands::songs::run_used(config, &id, used).await?,
            SongsCommand::Duplicate { id } => commands::songs::run_duplicate(config, &id).await?,
            SongsCommand::Delete { id, yes } => commands::songs::run_delete(config, &id, yes).await?,
            SongsCommand::History { id } => commands::songs::run_history(config, &id).await?,
            SongsCommand::Restore { id, version } => {
                commands::songs::run_restore(config, &id, version).await?;
            }
        },

        Commands::Structure(command) => match command {
            StructureCommand::Sections => commands::structure::show_sections(),
            StructureCommand::Templates => commands::structure::show_templates(),
            StructureCommand::Parse { text } => commands::structure::parse_structure(&text),
            StructureCommand::Edit { file } => commands::structure::run_editor(file)?,
        },

        Commands::Spec(command) => match command {
            SpecCommand::Init { file, force } => commands::spec::init_spec(&file, force)?,
            SpecCommand::Show { file } => commands::spec::show_spec(&file)?,
            SpecCommand::Set { key, value, file } => commands::spec::set_field(&file, &key, &value)?,
            SpecCommand::Options { field } => commands::spec::show_options(field.as_deref())?,
        },

        Commands::Config(command) => match command {
            ConfigCommand::Show => commands::config::show_config()?,
            ConfigCommand::Get { key } => commands::config::get_config(key)?,
            ConfigCommand::Set { key, value } => commands::config::set_config(&key, &value)?,
            ConfigCommand::Path => commands::config::show_path(),
            ConfigCommand::Example => commands::config::show_example(),
            ConfigCommand::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
