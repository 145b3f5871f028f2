//! file-tree: render recorded directory scans as ASCII trees.
//!
//! The scanner service records its responses as JSON; this binary replays
//! them, prints the tree, and keeps the last session so it can be shown or
//! exported again without rescanning.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use file_tree_generator::app::{self, export, persistence, state::SessionState};
use file_tree_generator::config::{self, settings, TreeSettings};
use file_tree_generator::core::OutputMode;
use file_tree_generator::scan::ReplaySource;

/// Render scanned directory listings as ASCII trees
///
/// Examples:
///   file-tree render scan.json            # Print the tree of a recorded scan
///   file-tree render scan.json --markup   # Print the on-screen markup instead
///   file-tree export --dir ~/Desktop      # Save the last tree as a text file
///   file-tree settings set --exclude "target, *.log"
#[derive(Parser, Debug)]
#[command(name = "file-tree")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Directory holding settings.json and session.json
    ///
    /// Defaults to the platform configuration directory.
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a recorded scan response and remember it as the current session
    Render {
        /// JSON file with the scanner's response
        #[arg(value_name = "SCAN_JSON")]
        scan: PathBuf,

        /// Path the scan was requested for; checked against the recording
        #[arg(long)]
        path: Option<String>,

        /// Print markup instead of plain text
        #[arg(long)]
        markup: bool,

        /// Annotate entries with their size
        #[arg(long, conflicts_with = "hide_size")]
        show_size: bool,

        /// Leave out size annotations
        #[arg(long)]
        hide_size: bool,
    },

    /// Render the current session again without rescanning
    Replay {
        /// Print markup instead of plain text
        #[arg(long)]
        markup: bool,
    },

    /// Print the summary and file table of the current session
    Table,

    /// Write the current session's tree to a text file
    Export {
        /// Target directory (defaults to the download directory)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Show or change the tree settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Clear the current session
    Clear {
        /// Also reset settings to their defaults
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Print the current settings as JSON
    Show,

    /// Update one or more settings
    Set {
        #[arg(long)]
        show_size: Option<bool>,

        /// Maximum scan depth; 0 or negative means unlimited
        #[arg(long, allow_hyphen_values = true)]
        max_depth: Option<String>,

        /// Comma-separated exclude patterns
        #[arg(long)]
        exclude: Option<String>,
    },
}

/// Resolved locations of the persisted files.
struct Paths {
    settings: Option<PathBuf>,
    session: Option<PathBuf>,
}

impl Paths {
    fn new(config_dir: Option<PathBuf>) -> Self {
        match config_dir {
            Some(dir) => Self {
                settings: Some(dir.join("settings.json")),
                session: Some(dir.join("session.json")),
            },
            None => Self {
                settings: None,
                session: None,
            },
        }
    }

    /// Session to render a new scan into, with the current settings file.
    fn load_state(&self) -> Result<SessionState> {
        let settings = settings::load_settings(self.settings.as_deref())?;
        let state = persistence::load_session(self.session.as_deref())?;
        Ok(state.with_settings(settings))
    }

    /// Cached session as it was last rendered.
    fn restore_state(&self) -> Result<SessionState> {
        persistence::restore_session(self.settings.as_deref(), self.session.as_deref())
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the tree.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let paths = Paths::new(cli.config_dir);

    match cli.command {
        Command::Render {
            scan,
            path,
            markup,
            show_size,
            hide_size,
        } => {
            let mut state = paths.load_state()?;
            if show_size || hide_size {
                state.settings.show_size = show_size;
            }

            let source = ReplaySource::new(scan);
            let state = match path {
                Some(path) => app::scan_directory(
                    SessionState {
                        path_input: path,
                        ..state
                    },
                    &source,
                )?,
                None => {
                    let result = source.load()?;
                    SessionState {
                        path_input: result.root_path.clone(),
                        ..state
                    }
                    .with_scan(result)
                }
            };

            print_tree(&state, markup)?;
            persistence::save_session(&state, paths.session.as_deref())?;
        }
        Command::Replay { markup } => {
            let state = paths.restore_state()?;
            print_tree(&state, markup)?;
        }
        Command::Table => {
            let state = paths.restore_state()?;
            let summary = state.summary();
            println!("Path:  {}", summary.current_path);
            println!("Items: {}", summary.file_count);
            println!("Total: {}", summary.total_size);
            println!();
            for row in state.file_table() {
                println!(
                    "{:<40} {:<10} {:>12} {:>5}",
                    row.name, row.kind, row.size, row.depth
                );
            }
        }
        Command::Export { dir } => {
            let state = paths.restore_state()?;
            let dir = dir.unwrap_or_else(export::default_export_directory);
            let path = export::export_tree(&state, &dir)?;
            println!("{}", path.display());
        }
        Command::Settings { action } => {
            let mut current = settings::load_settings(paths.settings.as_deref())?;
            if let SettingsAction::Set {
                show_size,
                max_depth,
                exclude,
            } = action
            {
                current = apply_settings(current, show_size, max_depth, exclude);
                settings::save_settings(&current, paths.settings.as_deref())?;
            }
            println!("{}", serde_json::to_string_pretty(&current)?);
        }
        Command::Clear { all } => {
            if all {
                persistence::clear_session(paths.session.as_deref())?;
                settings::save_settings(&TreeSettings::default(), paths.settings.as_deref())?;
                tracing::info!("All data cleared");
            } else {
                let state = persistence::load_session(paths.session.as_deref())?.clear_results();
                persistence::save_session(&state, paths.session.as_deref())?;
                tracing::info!("Results cleared");
            }
        }
    }

    Ok(())
}

fn print_tree(state: &SessionState, markup: bool) -> Result<()> {
    let output = if markup {
        state.display_markup()?
    } else {
        state.render()?.plain_text
    };
    tracing::debug!(
        "Printing {:?} tree",
        if markup { OutputMode::Markup } else { OutputMode::PlainText }
    );
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn apply_settings(
    current: TreeSettings,
    show_size: Option<bool>,
    max_depth: Option<String>,
    exclude: Option<String>,
) -> TreeSettings {
    TreeSettings {
        show_size: show_size.unwrap_or(current.show_size),
        max_depth: max_depth
            .as_deref()
            .map(config::parse_max_depth)
            .unwrap_or(current.max_depth),
        exclude_patterns: exclude
            .as_deref()
            .map(config::parse_exclude_patterns)
            .unwrap_or(current.exclude_patterns),
    }
}
