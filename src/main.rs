use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use macrokit::config::Config;
use macrokit::constants::{CONFIG_GENERATED, ERROR_INVALID_DATE};
use macrokit::logger;
use macrokit::ui::{run_inline_preview, AnsiRenderer, KeyValueRow, LastEditedView, RatatuiRenderer};
use macrokit::utils::datetime::DateLike;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "macrokit", version)]
#[command(about = "Date display helpers for the last-edited page macro", long_about = None)]
struct Cli {
    /// Config file (default: ./macrokit.toml, then the XDG config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the display locale (en-US, en-GB, de-DE, ja-JP)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Override the IANA time zone (e.g. Europe/Paris)
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// Mirror log records to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format an ISO-8601 date for display (unparseable input is echoed back)
    Format {
        /// Date string, e.g. 2024-01-05T15:45:00.000Z
        iso: String,
    },
    /// Normalize a date string or epoch milliseconds to canonical ISO-8601
    Iso {
        /// Date string, or epoch milliseconds with --millis
        input: String,
        /// Read the input as milliseconds since the Unix epoch (fractions truncate)
        #[arg(long)]
        millis: bool,
    },
    /// Print a label/value row with the label in bold
    Row {
        label: String,
        value: String,
        /// Disable ANSI styling
        #[arg(long)]
        plain: bool,
    },
    /// Show the canonical and display forms of a date
    Inspect {
        input: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Draw the last-edited macro in the terminal
    Preview {
        /// Last-edited timestamp (default: now)
        #[arg(long)]
        at: Option<String>,
    },
    /// Write a default configuration file
    InitConfig {
        /// Destination (default: the XDG config directory)
        path: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct Inspection {
    input: String,
    iso: Option<String>,
    display: String,
    timezone: String,
    locale: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config file must not prevent writing a fresh one
    if let Commands::InitConfig { path } = &cli.command {
        return init_config(path.clone());
    }

    let config = load_config(&cli)?;
    logger::init(&config.logging, cli.verbose)?;
    log::debug!(
        "Using locale {} and timezone {}",
        config.display.locale,
        config.display.timezone
    );

    run(cli.command, &config)
}

fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Format { iso } => {
            let formatter = config.display.formatter()?;
            println!("{}", formatter.format_display_date(&iso));
        }
        Commands::Iso { input, millis } => {
            let normalizer = config.display.normalizer()?;
            let date = if millis {
                let ms = input.trim();
                match ms.parse::<i64>() {
                    Ok(ms) => DateLike::Millis(ms),
                    Err(_) => ms
                        .parse::<f64>()
                        .map(DateLike::from)
                        .with_context(|| format!("'{}' is not a number of milliseconds", input))?,
                }
            } else {
                DateLike::Text(input)
            };
            println!("{}", normalizer.to_iso_string(date)?);
        }
        Commands::Row { label, value, plain } => {
            let renderer = if plain {
                AnsiRenderer::plain_text()
            } else {
                AnsiRenderer::new()
            };
            println!("{}", KeyValueRow::new(label, value).render(&renderer));
        }
        Commands::Inspect { input, json } => {
            let formatter = config.display.formatter()?;
            let normalizer = config.display.normalizer()?;
            let inspection = Inspection {
                iso: normalizer.to_iso_string(input.as_str()).ok(),
                display: formatter.format_display_date(&input),
                timezone: formatter.timezone().name().to_string(),
                locale: formatter.locale().to_string(),
                input,
            };

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&inspection).context("Failed to serialize inspection")?
                );
            } else {
                let renderer = AnsiRenderer::new();
                let iso = inspection.iso.as_deref().unwrap_or(ERROR_INVALID_DATE);
                println!("{}", KeyValueRow::new("input", inspection.input.as_str()).render(&renderer));
                println!("{}", KeyValueRow::new("iso", iso).render(&renderer));
                println!("{}", KeyValueRow::new("display", inspection.display.as_str()).render(&renderer));
                let zone = format!("{} ({})", inspection.timezone, inspection.locale);
                println!("{}", KeyValueRow::new("zone", zone).render(&renderer));
            }
        }
        Commands::Preview { at } => {
            let mut view = LastEditedView::from_config(config)?;
            if let Some(at) = at {
                view = view.edited_at(at);
            }
            run_inline_preview(view.render(&RatatuiRenderer::new()))?;
        }
        Commands::InitConfig { path } => init_config(path)?,
    }

    Ok(())
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::get_default_config_path()?,
    };
    Config::generate_default_config(&path)?;
    println!("{}: {}", CONFIG_GENERATED, path.display());
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    config.with_overrides(cli.locale.clone(), cli.timezone.clone())
}
