//! `Snipkeep` CLI - Command-line interface for the `Snipkeep` snippet manager
//!
//! Provides commands for saving line ranges of source files as tagged
//! snippets, copying them to the clipboard, and showing, listing and
//! deleting saved snippets.

use std::fmt::Write as _;
use std::io::{self, Write as _};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use snipkeep_core::config::{AppSettings, ConfigManager, ListFormat};
use snipkeep_core::error::{ConfigError, ExtractError, OptionsError, StoreError};
use snipkeep_core::{SaveOptions, Snippet, SnippetManager};

/// Snippet manager is a CLI tool for saving code snippets
#[derive(Parser)]
#[command(name = "snippet")]
#[command(author, version, about = "Snippet manager is a CLI tool for saving code snippets")]
#[command(
    long_about = "A CLI tool that helps developers save and retrieve commonly used code snippets."
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding snippets.json and config.toml (default: ~/.snippets)
    #[arg(short, long, global = true, env = "SNIPKEEP_DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Save a new snippet
    #[command(about = "Save lines of a file as a new snippet")]
    Save {
        /// Tag to identify the snippet
        #[arg(short, long)]
        tag: String,

        /// File to save code from
        #[arg(short = 'f', long = "filepath", visible_alias = "file")]
        file: String,

        /// Line to start saving code (omit to save the whole file)
        #[arg(short = 's', long = "startline", allow_hyphen_values = true)]
        start: Option<String>,

        /// Line to end saving code (defaults to the start line)
        #[arg(short = 'e', long = "endline", allow_hyphen_values = true)]
        end: Option<String>,
    },

    /// Copy an existing snippet to the clipboard
    #[command(about = "Copy an existing snippet to the clipboard")]
    Copy {
        /// Tag of the snippet
        #[arg(short, long)]
        tag: String,
    },

    /// Print a snippet's code
    #[command(about = "Print the code of a snippet")]
    Show {
        /// Tag of the snippet
        #[arg(short, long)]
        tag: String,
    },

    /// List all snippets
    #[command(about = "List all saved snippets")]
    List {
        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Delete a snippet
    #[command(about = "Delete a snippet")]
    Delete {
        /// Tag of the snippet
        #[arg(short, long)]
        tag: String,
    },

    /// Manage settings
    #[command(subcommand, about = "Show or initialize settings")]
    Config(ConfigCommands),
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective settings
    #[command(about = "Show paths and effective settings")]
    Show,

    /// Write the default settings file
    #[command(about = "Write a config.toml with default settings")]
    Init {
        /// Overwrite an existing config.toml
        #[arg(long)]
        force: bool,
    },
}

/// Output format for the list command
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
    /// Output as CSV
    Csv,
}

impl From<OutputFormat> for ListFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
            OutputFormat::Csv => Self::Csv,
        }
    }
}

fn main() {
    // Initialize logging with environment filter (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = ConfigManager::from_override(cli.dir)
        .map_err(CliError::from)
        .and_then(|config| run(&config, cli.command));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

/// Dispatches a parsed command
fn run(config: &ConfigManager, command: Commands) -> Result<(), CliError> {
    tracing::debug!(dir = %config.config_dir().display(), "Using snippet directory");
    match command {
        Commands::Save {
            tag,
            file,
            start,
            end,
        } => cmd_save(config, &tag, &file, start.as_deref(), end.as_deref()),
        Commands::Copy { tag } => cmd_copy(config, &tag),
        Commands::Show { tag } => cmd_show(config, &tag),
        Commands::List { format } => cmd_list(config, format),
        Commands::Delete { tag } => cmd_delete(config, &tag),
        Commands::Config(subcmd) => cmd_config(config, subcmd),
    }
}

// ============================================================================
// Snippet commands
// ============================================================================

/// Save command handler
fn cmd_save(
    config: &ConfigManager,
    tag: &str,
    file: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(), CliError> {
    let options = SaveOptions::parse(tag, file, start, end)?;
    let code = options.extract()?;

    let mut manager = SnippetManager::open(config)?;
    manager.insert(&options.tag, &code)?;

    println!("Snippet saved successfully with tag '{}'", options.tag);
    Ok(())
}

/// Copy command handler
fn cmd_copy(config: &ConfigManager, tag: &str) -> Result<(), CliError> {
    let settings = config.load_settings()?;
    let manager = SnippetManager::open(config)?;
    let snippet = find_snippet(&manager, tag)?;

    if settings.clipboard.enabled {
        copy_to_clipboard(&snippet.code)?;
        println!("Snippet with tag '{tag}' copied to clipboard.");
    } else {
        write_code(&mut io::stdout().lock(), &snippet.code)?;
    }
    Ok(())
}

/// Show command handler
fn cmd_show(config: &ConfigManager, tag: &str) -> Result<(), CliError> {
    let manager = SnippetManager::open(config)?;
    let snippet = find_snippet(&manager, tag)?;
    write_code(&mut io::stdout().lock(), &snippet.code)
}

/// List command handler
fn cmd_list(config: &ConfigManager, format: Option<OutputFormat>) -> Result<(), CliError> {
    let settings = config.load_settings()?;
    let manager = SnippetManager::open(config)?;
    let snippets = manager.list_all();

    let format = format.map_or(settings.list.format, ListFormat::from);
    let output = match format {
        ListFormat::Table => format_snippet_table(snippets, settings.list.preview_width),
        ListFormat::Json => format_snippet_json(snippets)?,
        ListFormat::Csv => format_snippet_csv(snippets),
    };
    println!("{output}");
    Ok(())
}

/// Delete command handler
fn cmd_delete(config: &ConfigManager, tag: &str) -> Result<(), CliError> {
    let mut manager = SnippetManager::open(config)?;
    let removed = manager.delete_by_tag(tag)?;
    println!("Deleted snippet '{}'", removed.tag);
    Ok(())
}

/// Looks up a snippet by its exact tag
fn find_snippet<'a>(manager: &'a SnippetManager, tag: &str) -> Result<&'a Snippet, CliError> {
    manager
        .find_by_tag(tag)
        .ok_or_else(|| CliError::Store(StoreError::NotFound(tag.to_string())))
}

/// Writes snippet code exactly as stored, without adding a newline
fn write_code(out: &mut impl io::Write, code: &str) -> Result<(), CliError> {
    out.write_all(code.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Places text on the system clipboard
fn copy_to_clipboard(text: &str) -> Result<(), CliError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| CliError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| CliError::Clipboard(e.to_string()))
}

// ============================================================================
// Output formatting
// ============================================================================

/// Format snippets as a table
fn format_snippet_table(snippets: &[Snippet], preview_width: usize) -> String {
    if snippets.is_empty() {
        return "No snippets found.".to_string();
    }

    let tag_width = snippets
        .iter()
        .map(|s| s.tag.chars().count())
        .max()
        .unwrap_or(3)
        .max(3);

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<tag_width$}  {:>5}  {:<16}  PREVIEW",
        "TAG", "LINES", "CREATED"
    );
    let _ = writeln!(
        output,
        "{:-<tag_width$}  {:-<5}  {:-<16}  {:-<preview_width$}",
        "", "", "", ""
    );

    for snippet in snippets {
        let _ = writeln!(
            output,
            "{:<tag_width$}  {:>5}  {:<16}  {}",
            snippet.tag,
            snippet.line_count(),
            snippet.created_at.format("%Y-%m-%d %H:%M"),
            preview(snippet.first_line(), preview_width)
        );
    }

    output.trim_end().to_string()
}

/// Shortens a line to at most `width` characters
fn preview(line: &str, width: usize) -> String {
    let line = line.trim();
    if line.chars().count() <= width {
        return line.to_string();
    }
    let keep = width.saturating_sub(3);
    format!("{}...", line.chars().take(keep).collect::<String>())
}

/// Format snippets as JSON
fn format_snippet_json(snippets: &[Snippet]) -> Result<String, CliError> {
    serde_json::to_string_pretty(snippets)
        .map_err(|e| CliError::Serialize(format!("Failed to serialize: {e}")))
}

/// Format snippets as CSV
fn format_snippet_csv(snippets: &[Snippet]) -> String {
    let mut output = String::from("tag,created_at,lines,code\n");
    for snippet in snippets {
        let _ = writeln!(
            output,
            "{},{},{},{}",
            escape_csv_field(&snippet.tag),
            snippet.created_at.to_rfc3339(),
            snippet.line_count(),
            escape_csv_field(&snippet.code)
        );
    }
    output.trim_end().to_string()
}

/// Escape a CSV field if it contains special characters
fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

// ============================================================================
// Config commands
// ============================================================================

/// Config command handler
fn cmd_config(config: &ConfigManager, subcmd: ConfigCommands) -> Result<(), CliError> {
    match subcmd {
        ConfigCommands::Show => cmd_config_show(config),
        ConfigCommands::Init { force } => cmd_config_init(config, force),
    }
}

/// Show paths and effective settings
fn cmd_config_show(config: &ConfigManager) -> Result<(), CliError> {
    let settings = config.load_settings()?;
    let rendered = toml::to_string_pretty(&settings)
        .map_err(|e| CliError::Serialize(format!("Failed to serialize: {e}")))?;

    println!("Directory: {}", config.config_dir().display());
    println!("Store:     {}", config.store_path().display());
    println!("Settings:  {}", config.settings_path().display());
    println!();
    print!("{rendered}");
    Ok(())
}

/// Write the default settings file
fn cmd_config_init(config: &ConfigManager, force: bool) -> Result<(), CliError> {
    let path = config.settings_path();
    if path.exists() && !force {
        return Err(CliError::Config(ConfigError::Write(format!(
            "{} already exists, use --force to overwrite it",
            path.display()
        ))));
    }

    config.save_settings(&AppSettings::default())?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}

// ============================================================================
// Errors
// ============================================================================

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, validation, file or clipboard errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Lookup failure - the tag does not exist or is already taken
    pub const TAG_FAILURE: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Snippet store error
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Line extraction error
    #[error("{0}")]
    Extract(#[from] ExtractError),

    /// Invalid save options
    #[error("{0}")]
    Options(#[from] OptionsError),

    /// Clipboard error
    #[error("Error copying to clipboard: {0}")]
    Clipboard(String),

    /// Output serialization error
    #[error("{0}")]
    Serialize(String),

    /// Writing to standard output failed
    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 1: General error (configuration, validation, file, clipboard)
    /// - 2: Tag failure (tag not found, tag already exists)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Store(StoreError::NotFound(_) | StoreError::DuplicateTag(_)) => {
                exit_codes::TAG_FAILURE
            }
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
