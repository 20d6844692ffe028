//! ashes-markup - format forum post or card effect markup as HTML

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use ashes_markup_config::Config;
use ashes_markup_engine::{FormatOptions, Formatter};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ashes-markup")]
#[command(version, about = "Format Ashes markup as sanitized HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    ashes-markup post.txt                 Format a forum post
    ashes-markup --effect card.txt        Format card effect text
    echo '[[fire]]' | ashes-markup        Read from stdin
    ashes-markup --init-config            Write the default config file")]
struct Cli {
    /// Markup file to read; stdin when omitted
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Format as card effect text (effect boxes, bold ability names)
    #[arg(short, long)]
    effect: bool,

    /// Wrap the output in paragraphs even when it is a single paragraph
    #[arg(short = 'p', long)]
    ensure_paragraphs: bool,

    /// Mark card references as legacy cards
    #[arg(short, long)]
    legacy: bool,

    /// Config file to use instead of ~/.config/ashes-markup/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default config to the config path and exit
    #[arg(long, conflicts_with_all = ["input", "effect", "ensure_paragraphs", "legacy"])]
    init_config: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(html) => {
            println!("{html}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    if cli.init_config {
        let path = write_default_config(cli.config.as_deref())?;
        return Ok(format!("Wrote default config to {}", path.display()));
    }

    let config = load_config(cli.config.as_deref())?;
    let formatter = config
        .formatter()
        .context("Invalid formatter configuration")?;

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    Ok(format_text(&formatter, cli, &text))
}

fn config_location(path: Option<&Path>) -> PathBuf {
    match path {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Load the config from `path` (or the default location), falling back to
/// the built-in settings when the file does not exist.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let loaded = match path {
        Some(path) => {
            let expanded = config_location(Some(path));
            log::info!("Config path: {}", expanded.display());
            Config::load_from_path(&expanded)?
        }
        None => Config::load()?,
    };

    Ok(loaded.unwrap_or_else(|| {
        log::debug!("No config file found, using defaults");
        Config::default()
    }))
}

/// Write the built-in settings to `path` (or the default location).
fn write_default_config(path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = config_location(path);
    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }
    Config::default()
        .save_to_path(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote default config to {}", path.display());
    Ok(path)
}

fn format_text(formatter: &Formatter, cli: &Cli, text: &str) -> String {
    if cli.effect {
        formatter.format_effect(text, cli.legacy)
    } else {
        formatter.format(
            text,
            FormatOptions {
                ensure_paragraphs: cli.ensure_paragraphs,
                legacy: cli.legacy,
            },
        )
    }
}
