use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use mdsite_config::Config;
use mdsite_engine::{
    Converter,
    site::{Template, build_site},
};

/// Build a static HTML site from a directory of markdown files
#[derive(Parser, Debug)]
#[command(name = "mdsite")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing markdown sources
    source_dir: Option<PathBuf>,

    /// Directory to write HTML pages into
    dest_dir: Option<PathBuf>,

    /// Directory containing template.html
    template_dir: Option<PathBuf>,

    /// Configuration file path (defaults to ~/.config/mdsite/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip documents with headings deeper than h6 or no content
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Effective build settings after merging arguments over the config file.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    source_dir: PathBuf,
    dest_dir: PathBuf,
    template_dir: Option<PathBuf>,
    strict: bool,
}

fn resolve(cli: Cli, config: Option<Config>) -> Result<Settings> {
    let (cfg_source, cfg_dest, cfg_template, cfg_strict) = match config {
        Some(c) => (Some(c.source_dir), Some(c.dest_dir), c.template_dir, c.strict),
        None => (None, None, None, false),
    };

    let Some(source_dir) = cli.source_dir.or(cfg_source) else {
        bail!("no source directory given and none configured");
    };
    let Some(dest_dir) = cli.dest_dir.or(cfg_dest) else {
        bail!("no destination directory given and none configured");
    };

    Ok(Settings {
        source_dir,
        dest_dir,
        template_dir: cli.template_dir.or(cfg_template),
        strict: cli.strict || cfg_strict,
    })
}

fn load_config(path: Option<&PathBuf>) -> Result<Option<Config>> {
    match path {
        Some(path) => {
            let config = Config::load_from_path(path)?
                .with_context(|| format!("config file {} not found", path.display()))?;
            Ok(Some(config))
        }
        None => Ok(Config::load()?),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    if config.is_some() {
        log::debug!("Loaded config");
    }
    let settings = resolve(cli, config)?;
    log::info!(
        "Building {} -> {}",
        settings.source_dir.display(),
        settings.dest_dir.display()
    );

    let template = Template::load_or_default(settings.template_dir.as_deref())?;
    let converter = Converter::new()?;
    let report = build_site(
        &settings.source_dir,
        &settings.dest_dir,
        &template,
        &converter,
        settings.strict,
    )?;

    println!("Wrote {} page(s)", report.written.len());
    if !report.rejected.is_empty() {
        println!("Skipped {} document(s):", report.rejected.len());
        for (path, reason) in &report.rejected {
            println!("  {}: {reason}", path.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
