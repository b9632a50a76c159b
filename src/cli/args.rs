// src/cli/args.rs
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Directory holding the note store (optional)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub store: Option<PathBuf>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Markdown body given inline or read from a file
#[derive(ClapArgs, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct MarkdownSource {
    /// Markdown body
    #[arg(short, long, value_name = "TEXT")]
    pub markdown: Option<String>,

    /// Read the markdown body from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, optionally filtered
    List {
        /// Case-insensitive title substring
        #[arg(long, value_name = "TEXT")]
        title: Option<String>,

        /// Only notes carrying this tag label (repeatable; all must match)
        #[arg(long = "tag", value_name = "LABEL")]
        tags: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note
    New {
        /// Note title
        #[arg(short, long)]
        title: String,

        #[command(flatten)]
        body: MarkdownSource,

        /// Tag label; unknown labels create a new tag (repeatable)
        #[arg(long = "tag", value_name = "LABEL")]
        tags: Vec<String>,
    },

    /// Show a single note
    Show {
        /// Note ID to show
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output note as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Render to HTML and open in the browser
        #[arg(long)]
        html: bool,
    },

    /// Edit a note; omitted fields keep their current value
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        #[command(flatten)]
        body: MarkdownSource,

        /// Replace tags with these labels (repeatable)
        #[arg(long = "tag", value_name = "LABEL", conflicts_with = "clear_tags")]
        tags: Vec<String>,

        /// Remove all tags from the note
        #[arg(long)]
        clear_tags: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Manage tags
    #[command(subcommand)]
    Tag(TagCommand),

    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum TagCommand {
    /// List all tags
    List,

    /// Add a tag
    Add {
        #[arg(value_name = "LABEL")]
        label: String,
    },

    /// Change a tag's label
    Rename {
        #[arg(value_name = "TAG_ID")]
        tag_id: String,

        #[arg(value_name = "LABEL")]
        label: String,
    },

    /// Delete a tag; notes keep working and just lose the tag
    Delete {
        #[arg(value_name = "TAG_ID")]
        tag_id: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Write a default config file
    Init,
}
