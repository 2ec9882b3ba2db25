use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use noor_core::settings::JsonFileStore;
use noor_core::tables::{is_hadith_language, HADITH_LANGUAGES};
use noor_core::{EditionCatalog, InterfaceLanguage, Noor, Selector, Settings};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod files;

#[derive(Parser)]
#[command(name = "noor")]
#[command(version, about = "Random Quran verses and Hadith narrations as markdown callouts")]
struct Cli {
    /// Settings file (defaults to <config dir>/noor/settings.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print (or insert) a random Quran verse
    Quran {
        /// Seed for a reproducible selection
        #[arg(long)]
        seed: Option<u32>,
        /// Markdown file to insert the quote into
        #[arg(short, long)]
        insert: Option<PathBuf>,
    },
    /// Print (or insert) a random hadith
    Hadith {
        /// Seed for a reproducible selection
        #[arg(long)]
        seed: Option<u32>,
        /// Markdown file to insert the quote into
        #[arg(short, long)]
        insert: Option<PathBuf>,
    },
    /// Print (or insert) the hadith with a given hadeethenc.com id
    HadithById {
        id: u32,
        /// Markdown file to insert the quote into
        #[arg(short, long)]
        insert: Option<PathBuf>,
    },
    /// Regenerate the dhikr file with one verse and one hadith
    Dhikr {
        /// File to write (defaults to the dhikr file in settings)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u32>,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// List available reciters
    Reciters,
    /// List available translations
    Translations {
        /// Only translations in this language code
        #[arg(short, long)]
        language: Option<String>,
    },
    /// List languages hadiths can be fetched in
    HadithLanguages,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the effective settings
    Show,
    /// Change one or more settings
    Set(SettingsUpdate),
}

#[derive(Args, Default)]
struct SettingsUpdate {
    #[arg(long)]
    reciter: Option<String>,
    #[arg(long)]
    translation_language: Option<String>,
    #[arg(long)]
    translation: Option<String>,
    #[arg(long)]
    hadith_language: Option<String>,
    #[arg(long)]
    show_translation: Option<bool>,
    /// native (Arabic) or translated (English) headers
    #[arg(long, value_parser = parse_interface)]
    interface: Option<InterfaceLanguage>,
    #[arg(long)]
    dhikr_file: Option<String>,
    #[arg(long)]
    max_hadith_attempts: Option<u32>,
}

fn parse_interface(s: &str) -> std::result::Result<InterfaceLanguage, String> {
    InterfaceLanguage::from_str(s).ok_or_else(|| format!("expected 'native' or 'translated', got '{}'", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = open_store(cli.config.as_deref())?;
    let catalog = EditionCatalog::default();
    let settings = Settings::load(&store)
        .with_context(|| format!("Failed to load settings from {}", store.path().display()))?
        .normalized(&catalog);
    tracing::debug!(path = %store.path().display(), "settings loaded");

    match cli.command {
        Commands::Quran { seed, insert } => {
            let noor = build_noor(settings, seed);
            let quote = noor.random_quran_quote().await?;
            emit(&quote, insert.as_deref()).await?
        }
        Commands::Hadith { seed, insert } => {
            let noor = build_noor(settings, seed);
            let quote = noor.random_hadith_quote().await?;
            emit(&quote, insert.as_deref()).await?
        }
        Commands::HadithById { id, insert } => {
            let noor = build_noor(settings, None);
            let quote = noor.hadith_quote_by_id(id).await?;
            emit(&quote, insert.as_deref()).await?
        }
        Commands::Dhikr { output, seed } => {
            let path = output.unwrap_or_else(|| PathBuf::from(&settings.dhikr_filepath));
            let noor = build_noor(settings, seed);
            let content = noor.dhikr().await?;
            files::replace_file(&path, &content).await?;
            eprintln!("{} {}", "✓ Dhikr written to".green(), path.display());
        }
        Commands::Settings { action } => match action {
            SettingsAction::Show => show_settings(&settings, &store),
            SettingsAction::Set(update) => {
                let updated = apply_update(settings, &catalog, update)?;
                updated
                    .save(&store)
                    .with_context(|| format!("Failed to save settings to {}", store.path().display()))?;
                show_settings(&updated, &store);
            }
        },
        Commands::Reciters => list_reciters(&catalog),
        Commands::Translations { language } => list_translations(&catalog, language.as_deref()),
        Commands::HadithLanguages => list_hadith_languages(),
    }

    Ok(())
}

/// Validate the requested changes against the edition tables and apply them.
fn apply_update(settings: Settings, catalog: &EditionCatalog, update: SettingsUpdate) -> Result<Settings> {
    let mut updated = settings;
    if let Some(reciter) = update.reciter {
        if catalog.reciter(&reciter).is_none() {
            return Err(anyhow!("Unknown reciter '{}'. See `noor reciters`", reciter));
        }
        updated.reciter = reciter;
    }
    if let Some(language) = update.translation_language {
        if catalog.translations_for(&language).is_empty() {
            return Err(anyhow!(
                "No translations in language '{}'. See `noor translations`",
                language
            ));
        }
        if language != updated.translation_language {
            // Picking a new language resets the translation to its first edition
            updated.translation_option = String::new();
        }
        updated.translation_language = language;
    }
    if let Some(translation) = update.translation {
        let edition = catalog
            .translation(&translation)
            .ok_or_else(|| anyhow!("Unknown translation '{}'. See `noor translations`", translation))?;
        updated.translation_language = edition.language.to_string();
        updated.translation_option = translation;
    }
    if let Some(language) = update.hadith_language {
        if !is_hadith_language(&language) {
            return Err(anyhow!(
                "Unknown hadith language '{}'. See `noor hadith-languages`",
                language
            ));
        }
        updated.hadith_language = language;
    }
    if let Some(show) = update.show_translation {
        updated.show_translation = show;
    }
    if let Some(interface) = update.interface {
        updated.interface_language = interface;
    }
    if let Some(path) = update.dhikr_file {
        updated.dhikr_filepath = path;
    }
    if let Some(attempts) = update.max_hadith_attempts {
        updated.max_hadith_attempts = attempts;
    }

    Ok(updated.normalized(catalog))
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    // stdout carries the markdown, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_store(config: Option<&Path>) -> Result<JsonFileStore> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => JsonFileStore::default_path()
            .ok_or_else(|| anyhow!("Could not determine config directory; pass --config"))?,
    };
    Ok(JsonFileStore::new(path))
}

fn build_noor(settings: Settings, seed: Option<u32>) -> Noor {
    match seed {
        Some(seed) => Noor::new(
            Arc::new(noor_core::QuranClient::new()),
            Arc::new(noor_core::HadithClient::new()),
            Selector::seeded(seed),
            settings,
        ),
        None => Noor::from_settings(settings),
    }
}

async fn emit(quote: &str, insert: Option<&Path>) -> Result<()> {
    match insert {
        Some(path) => {
            files::insert_into_file(path, quote).await?;
            eprintln!("{} {}", "✓ Quote inserted into".green(), path.display());
        }
        None => print!("{}", quote),
    }
    Ok(())
}

fn show_settings(settings: &Settings, store: &JsonFileStore) {
    println!("\n{}", "⚙️  Noor Settings".bold().blue());
    println!("{}", "=".repeat(40).dimmed());
    println!("  {:<22}{}", "reciter", settings.reciter.green());
    println!("  {:<22}{}", "translation language", settings.translation_language.green());
    println!("  {:<22}{}", "translation", settings.translation_option.green());
    println!("  {:<22}{}", "hadith language", settings.hadith_language.green());
    println!("  {:<22}{}", "show translation", settings.show_translation.to_string().green());
    println!("  {:<22}{}", "interface", settings.interface_language.as_str().green());
    println!("  {:<22}{}", "dhikr file", settings.dhikr_filepath.green());
    println!("  {:<22}{}", "max hadith attempts", settings.max_hadith_attempts.to_string().green());
    println!("\n{} {}", "Stored in".dimmed(), store.path().display().to_string().dimmed());
}

fn list_reciters(catalog: &EditionCatalog) {
    println!("\n{}", "🎙  Available Reciters".bold().blue());
    println!("{}", "=".repeat(40).dimmed());

    for reciter in catalog.reciters() {
        println!("  • {} {}", reciter.identifier.green(), reciter.english_name.dimmed());
    }
}

fn list_translations(catalog: &EditionCatalog, language: Option<&str>) {
    println!("\n{}", "📚 Available Translations".bold().blue());
    println!("{}", "=".repeat(40).dimmed());

    let languages: Vec<&str> = match language {
        Some(language) => vec![language],
        None => catalog.languages().collect(),
    };

    for language in languages {
        let editions = catalog.translations_for(language);
        if editions.is_empty() {
            println!("{}", format!("No translations for '{}'", language).red());
            continue;
        }

        println!("\n{}", language.bold().green());
        for edition in editions {
            println!("  • {} {}", edition.identifier, edition.english_name.dimmed());
        }
    }
}

fn list_hadith_languages() {
    println!("\n{}", "🌐 Hadith Languages".bold().blue());
    println!("{}", "=".repeat(40).dimmed());

    for (code, english, native) in HADITH_LANGUAGES {
        println!("  • {} {} ({})", code.green(), english, native.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_translation_language_is_rejected() {
        let catalog = EditionCatalog::default();
        let update = SettingsUpdate {
            translation_language: Some("xx".to_string()),
            ..Default::default()
        };

        let err = apply_update(Settings::default(), &catalog, update).unwrap_err();
        assert!(err.to_string().contains("'xx'"));
    }

    #[test]
    fn test_new_translation_language_picks_its_first_edition() {
        let catalog = EditionCatalog::default();
        let update = SettingsUpdate {
            translation_language: Some("fr".to_string()),
            ..Default::default()
        };

        let updated = apply_update(Settings::default(), &catalog, update).unwrap();
        assert_eq!(updated.translation_language, "fr");
        assert_eq!(
            Some(updated.translation_option.as_str()),
            catalog.default_translation("fr").map(|e| e.identifier)
        );
    }

    #[test]
    fn test_unknown_reciter_and_hadith_language_are_rejected() {
        let catalog = EditionCatalog::default();
        let reciter = SettingsUpdate {
            reciter: Some("ar.nobody".to_string()),
            ..Default::default()
        };
        assert!(apply_update(Settings::default(), &catalog, reciter).is_err());

        let hadith = SettingsUpdate {
            hadith_language: Some("xx".to_string()),
            ..Default::default()
        };
        assert!(apply_update(Settings::default(), &catalog, hadith).is_err());
    }
}
