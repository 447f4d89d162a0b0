//! emopick CLI application entry point
//!
//! Runs the emoji picker full-screen and prints the chosen shortcode, so it
//! composes with shells and editors:
//!
//! ```bash
//! # Pick interactively (default command)
//! emopick
//!
//! # Insert the glyph itself
//! printf '%s' "$(emopick pick --print-glyph)"
//!
//! # Non-interactive filtering
//! emopick list smil
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/emopick/config.toml` on Linux) or from `--config`. Run
//! `emopick config init` to write the defaults.

use colored::Colorize;
use emopick::{
    PickerError,
    cli::{Cli, Commands, ConfigCommands},
    config::PickerConfig,
    glyphs::GlyphTable,
    picker::FilterSelectList,
    ui::PickerRunner,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, PickerError>;

/// Install the tracing subscriber
///
/// Without a log file, output shares stderr with the picker, so only
/// warnings are shown unless `--debug` or `RUST_LOG` asks for more.
fn init_logging(cli: &Cli) -> Result<()> {
    let default_directive = match (cli.debug, cli.log_file.is_some()) {
        (true, _) => "emopick=debug",
        (false, true) => "emopick=info",
        (false, false) => "emopick=warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let registry = tracing_subscriber::registry().with(filter);
    if let Some(path) = &cli.log_file {
        let file = File::options().create(true).append(true).open(path)?;
        registry
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }

    tracing::info!("Starting emopick v{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(PickerConfig::config_path()?),
    }
}

/// Load the glyph table, preferring an explicit file over the built-in one
fn load_table(path: Option<&Path>) -> Result<GlyphTable> {
    let table = match path {
        Some(path) => GlyphTable::load(path)?,
        None => GlyphTable::builtin(),
    };

    if table.is_empty() {
        return Err(PickerError::InvalidInput("glyph table is empty".into()));
    }
    Ok(table)
}

fn load_config(cli: &Cli) -> Result<PickerConfig> {
    Ok(PickerConfig::load_from(&config_path(cli)?)?)
}

/// Build a picker with `query` already applied
fn picker_for(table: GlyphTable, config: &PickerConfig, query: Option<&str>) -> FilterSelectList {
    FilterSelectList::new(table.into_entries())
        .with_delay(config.debounce())
        .with_query(query.unwrap_or_default())
}

fn handle_pick(
    mut config: PickerConfig,
    query: Option<&str>,
    debounce_ms: Option<u64>,
    glyphs: Option<&Path>,
    print_glyph: bool,
) -> Result<ExitCode> {
    if let Some(ms) = debounce_ms {
        config.debounce_ms = ms;
        config.validate()?;
    }

    let table = load_table(glyphs.or(config.glyphs.as_deref()))?;
    let picker = picker_for(table, &config, query);

    let outcome = PickerRunner::new(config.theme())
        .with_title(config.title.as_str())
        .with_size(config.width_percent, config.height)
        .run(picker)?;

    match &outcome.selection {
        Some(entry) if print_glyph => println!("{}", entry.value),
        Some(entry) => println!("{}", entry.key),
        None => {}
    }
    Ok(ExitCode::from(outcome.exit_status()))
}

fn handle_list(
    config: &PickerConfig,
    query: Option<&str>,
    json: bool,
    glyphs: Option<&Path>,
) -> Result<ExitCode> {
    let table = load_table(glyphs.or(config.glyphs.as_deref()))?;
    let picker = picker_for(table, config, query);

    if json {
        let entries: Vec<_> = picker.view().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(if entries.is_empty() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    if picker.view_len() == 0 {
        eprintln!("{} No matching emoji", "!".yellow());
        return Ok(ExitCode::FAILURE);
    }

    for entry in picker.view() {
        println!("{}\t{}", entry.value, entry.key);
    }
    Ok(ExitCode::SUCCESS)
}

/// `path` and `init` never read the file, so a broken config can be replaced
fn handle_config_command(cli: &Cli, command: ConfigCommands) -> Result<ExitCode> {
    let path = config_path(cli)?;

    match command {
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Show => print!("{}", load_config(cli)?.to_toml()?),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(PickerError::InvalidInput(format!(
                    "{} already exists, use --force to overwrite",
                    path.display()
                )));
            }
            PickerConfig::default().save_to(&path)?;
            println!("{} Wrote {}", "✓".green(), path.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse_args();
    init_logging(&cli)?;

    match cli.get_command() {
        Commands::Pick {
            query,
            debounce_ms,
            glyphs,
            print_glyph,
        } => handle_pick(
            load_config(&cli)?,
            query.as_deref(),
            debounce_ms,
            glyphs.as_deref(),
            print_glyph,
        ),
        Commands::List {
            query,
            json,
            glyphs,
        } => handle_list(
            &load_config(&cli)?,
            query.as_deref(),
            json,
            glyphs.as_deref(),
        ),
        Commands::Config { command } => handle_config_command(&cli, command),
    }
}
