use std::path::Path;

use anyhow::{bail, Context, Result};
use lyriclab_core::catalog::{
    self, Genre, GENRES, MOODS, PERSPECTIVES, PROFANITY_OPTIONS, RHYME_SCHEMES, SECTION_TARGETS,
    STRUCTURE_PRESETS, TRANSFORM_PRESETS,
};
use lyriclab_core::spec::Slider;
use lyriclab_core::{SongForm, SongSpec, SpecUpdate};

fn load(file: &Path) -> Result<SongSpec> {
    SongSpec::load(file).with_context(|| format!("Failed to read spec file {}", file.display()))
}

pub fn init_spec(file: &Path, force: bool) -> Result<()> {
    if file.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            file.display()
        );
    }
    SongSpec::default()
        .save(file)
        .with_context(|| format!("Failed to write {}", file.display()))?;
    println!("✓ Created spec file: {}", file.display());
    println!("\nSet fields with 'lyriclab spec set <key> <value>'.");
    Ok(())
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "<not set>"
    } else {
        value
    }
}

pub fn show_spec(file: &Path) -> Result<()> {
    let spec = load(file)?;

    println!("{}\n", spec.save_title());
    println!("  topic: {}", or_unset(&spec.topic));
    println!("  genre: {}", or_unset(&spec.genre));
    println!("  subgenre: {}", or_unset(&spec.subgenre));
    println!("  mood: {}", spec.effective_mood().unwrap_or("<not set>"));
    println!(
        "  perspective: {}",
        catalog::label_for(PERSPECTIVES, spec.perspective.as_str())
            .unwrap_or(spec.perspective.as_str())
    );
    println!("  structure: {}", spec.structure);
    println!(
        "  rhyme scheme: {}",
        catalog::label_for(RHYME_SCHEMES, &spec.rhyme_scheme).unwrap_or(&spec.rhyme_scheme)
    );
    println!(
        "  imagery progression: {}",
        if spec.imagery_progression { "on" } else { "off" }
    );
    println!("  profanity: {}", spec.profanity);
    if !spec.forbidden_words.is_empty() {
        println!("  forbidden words: {}", spec.forbidden_words.join(", "));
    }

    println!("\nSliders:");
    for slider in Slider::ALL {
        let (label, low, high) = slider.describe();
        println!(
            "  {:<24} {:>3}  ({} ← → {})",
            label,
            spec.slider(slider),
            low,
            high
        );
    }

    if !spec.sample_lyrics.trim().is_empty() {
        println!("\nStyle reference:\n{}", spec.sample_lyrics.trim_end());
    }
    Ok(())
}

/// Set one field, applying the same rules as the editor form. A missing
/// file starts from defaults.
pub fn set_field(file: &Path, key: &str, value: &str) -> Result<()> {
    let spec = if file.exists() {
        load(file)?
    } else {
        SongSpec::default()
    };
    let update = SpecUpdate::parse(key, value)?;

    let mut form = SongForm::from_spec(spec);
    form.update_field(update);
    let spec = form.spec();

    if key == "genre" && !value.is_empty() && Genre::find(value).is_none() {
        log::warn!("\"{}\" is not one of the listed genres", value);
    }
    if key == "subgenre" && !value.is_empty() && !form.available_subgenres().contains(&value) {
        log::warn!(
            "\"{}\" is not a listed sub-genre of {}",
            value,
            or_unset(&spec.genre)
        );
    }

    spec.save(file)
        .with_context(|| format!("Failed to write {}", file.display()))?;

    let shown = match key {
        "structure" => spec.structure.clone(),
        "forbidden_words" => spec.forbidden_words.join(", "),
        _ => value.to_string(),
    };
    println!("✓ Updated {key} = {shown}");
    println!("  in {}", file.display());
    Ok(())
}

fn print_list(title: &str, items: impl IntoIterator<Item = String>) {
    println!("{title}:");
    for item in items {
        println!("  {item}");
    }
    println!();
}

pub fn show_options(field: Option<&str>) -> Result<()> {
    let wanted = |name: &str| field.is_none_or(|f| f.eq_ignore_ascii_case(name));
    let mut shown = false;

    if wanted("genres") {
        print_list(
            "Genres",
            GENRES.iter().map(|genre| {
                if genre.subgenres.is_empty() {
                    genre.name.to_string()
                } else {
                    format!("{} ({})", genre.name, genre.subgenres.join(", "))
                }
            }),
        );
        shown = true;
    }
    if wanted("moods") {
        print_list("Moods", MOODS.iter().map(|m| (*m).to_string()));
        shown = true;
    }
    if wanted("perspectives") {
        print_list(
            "Perspectives",
            PERSPECTIVES
                .iter()
                .map(|o| format!("{:<4} {}", o.value, o.label)),
        );
        shown = true;
    }
    if wanted("structures") {
        print_list(
            "Structures",
            STRUCTURE_PRESETS.iter().map(|s| (*s).to_string()),
        );
        shown = true;
    }
    if wanted("rhymes") {
        print_list(
            "Rhyme schemes",
            RHYME_SCHEMES
                .iter()
                .map(|o| format!("{:<10} {}", o.value, o.label)),
        );
        shown = true;
    }
    if wanted("profanity") {
        print_list(
            "Profanity",
            PROFANITY_OPTIONS
                .iter()
                .map(|o| format!("{:<6} {}", o.value, o.label)),
        );
        shown = true;
    }
    if wanted("sections") {
        print_list(
            "Rewrite targets",
            SECTION_TARGETS.iter().map(|s| (*s).to_string()),
        );
        shown = true;
    }
    if wanted("presets") {
        print_list(
            "Transform presets",
            TRANSFORM_PRESETS.iter().map(|p| p.label.to_string()),
        );
        shown = true;
    }

    if !shown {
        bail!(
            "Unknown option list: {}\n\nValid lists: genres, moods, perspectives, structures, rhymes, profanity, sections, presets",
            field.unwrap_or_default()
        );
    }
    Ok(())
}
