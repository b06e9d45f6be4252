// src/cli/args.rs
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Directory holding the notes store (optional)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write a default config file to the config path
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Create a new note and print its ID
    New {
        /// Title (defaults to "Untitled Note")
        #[arg(short, long)]
        title: Option<String>,

        /// Markdown content
        #[arg(long)]
        content: Option<String>,
    },

    /// List notes, most recently modified first
    List {
        /// Only notes whose title or content contains this (case-insensitive)
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a note
    Show {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a note's title and/or content
    Edit {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Print the sanitized HTML of a note's content
    Render {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Open a rendered note in the browser
    View {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Show or change the colour theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },

    /// Show or change whether the note list starts collapsed
    Sidebar {
        #[arg(value_enum)]
        action: Option<SidebarAction>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    Collapse,
    Expand,
    Toggle,
}
