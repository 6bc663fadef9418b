use std::path::Path;

use anyhow::{Context, Result};
use lyriclab_client::{config, Config};
use toml_edit::{value, DocumentMut, Item, Table};

const VALID_KEYS: &str =
    "api_url, session_token, timeout_secs, logging.level, logging.coloured, logging.report_caller";

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  api_url: {}", config.api_url);
    println!(
        "  session_token: {}",
        if config.session_token.is_some() {
            "<set>"
        } else {
            "<not set>"
        }
    );
    println!("  timeout_secs: {}", config.timeout_secs);
    println!("  logging.level: {:?}", config.logging.level());
    println!("  logging.coloured: {}", config.logging.coloured());
    println!("  session file: {}", config::session_file_path().display());

    println!("\nPriority: CLI args > ENV vars (LYRICLAB_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value, or print the whole file.
pub fn get_config(key: Option<String>) -> Result<()> {
    if let Some(key) = key {
        let config = Config::load()?;

        match key.as_str() {
            "api_url" => println!("{}", config.api_url),
            "session_token" => println!(
                "{}",
                config
                    .session_token
                    .unwrap_or_else(|| String::from("<not set>"))
            ),
            "timeout_secs" => println!("{}", config.timeout_secs),
            "logging.level" => println!("{:?}", config.logging.level()),
            "logging.coloured" => println!("{}", config.logging.coloured()),
            _ => {
                anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, VALID_KEYS);
            }
        }
    } else {
        let config_path = config::config_file_path();

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'lyriclab config init' to create it.");
        }
    }

    Ok(())
}

/// Apply `key = value` to a config document, keeping its comments and
/// layout.
fn apply_setting(doc: &mut DocumentMut, key: &str, raw: &str) -> Result<()> {
    match key {
        "api_url" | "session_token" => {
            doc[key] = value(raw);
        }
        "timeout_secs" => {
            let secs: i64 = raw
                .trim()
                .parse()
                .with_context(|| format!("timeout_secs must be a whole number, got {raw}"))?;
            doc[key] = value(secs);
        }
        "logging.level" | "logging.coloured" | "logging.report_caller" => {
            let field = key.trim_start_matches("logging.");
            if !doc.contains_table("logging") {
                doc["logging"] = Item::Table(Table::new());
            }
            if field == "level" {
                doc["logging"][field] = value(raw);
            } else {
                let flag: bool = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{key} must be true or false, got {raw}"))?;
                doc["logging"][field] = value(flag);
            }
        }
        _ => {
            anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, VALID_KEYS);
        }
    }
    Ok(())
}

fn update_file(config_path: &Path, key: &str, raw: &str) -> Result<()> {
    let contents = std::fs::read_to_string(config_path).context("Failed to read config file")?;
    let mut doc: DocumentMut = contents.parse().context("Config file is not valid TOML")?;
    apply_setting(&mut doc, key, raw)?;
    std::fs::write(config_path, doc.to_string()).context("Failed to write config file")?;
    Ok(())
}

/// Set a config value.
pub fn set_config(key: &str, raw: &str) -> Result<()> {
    let config_path = config::config_file_path();

    config::ensure_config_file()?;
    update_file(&config_path, key, raw)?;

    let shown = if key == "session_token" { "<set>" } else { raw };
    println!("✓ Updated {} = {}", key, shown);
    println!("  in {}", config_path.display());

    Ok(())
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure lyriclab.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
