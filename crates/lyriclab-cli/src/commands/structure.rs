use std::path::PathBuf;

use anyhow::Result;
use lyriclab_core::structure::{SectionType, Structure, SEPARATOR, TEMPLATES};

pub fn show_sections() {
    println!("{:<14} {:<14} {}", "ID", "LABEL", "SHORT");
    for kind in SectionType::ALL {
        println!("{:<14} {:<14} {}", kind.id(), kind.label(), kind.short());
    }
}

pub fn show_templates() {
    for template in TEMPLATES {
        let sequence = Structure::from_types(template.sections.iter().copied());
        println!("{:<12} {:<18} {}", template.id, template.name, sequence);
    }
}

/// Tokens of `text` that will not be recognized as a section.
fn unknown_tokens(text: &str) -> Vec<&str> {
    text.split(SEPARATOR)
        .map(str::trim)
        .filter(|token| SectionType::match_token(token).is_none())
        .collect()
}

pub fn parse_structure(text: &str) {
    let structure = Structure::deserialize(text);

    println!("{structure}\n");
    for (index, section) in structure.iter().enumerate() {
        println!("  {:>2}. {:<12} {}", index + 1, section.label(), section.id());
    }

    if text.trim().is_empty() {
        println!("\n(blank input; using the default structure)");
        return;
    }
    for token in unknown_tokens(text) {
        println!(
            "\n! \"{token}\" is not a known section; read as {}",
            SectionType::FALLBACK.label()
        );
    }
}

pub fn run_editor(file: PathBuf) -> Result<()> {
    crate::tui::run_tui(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(unknown_tokens("Verse/ pre chorus /Solo/hook"), vec!["Solo"]);
        assert!(unknown_tokens("intro/outro").is_empty());
    }
}
