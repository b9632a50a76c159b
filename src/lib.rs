// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::cli::args::{Args, Command, ConfigCommand, MarkdownSource, TagCommand};
use anyhow::{Context, Result};
use application::{NoteDeleter, NoteDraft, NoteEdit, NoteEditor, NoteLister, NoteViewer, TagManager};
use infrastructure::config::{default_config_path, Config};
use infrastructure::renderer::ContentRenderer;
use infrastructure::{FileStorage, LocalNoteRepository};
use ports::{ConsolePresenter, HtmlPresenter};
use std::path::Path;
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting marknote with arguments");

    let config_path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };

    let store = args.store.as_deref();
    let console = ConsolePresenter::new();

    match args.command {
        Command::List { title, tags, json } => {
            let mut lister = NoteLister::new(open_repository(store, &config_path)?);
            let notes = lister.list_notes_by_labels(title.as_deref(), &tags)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else {
                println!("{}", console.render_list(&notes));
            }
        }
        Command::New { title, body, tags } => {
            let mut editor = NoteEditor::new(open_repository(store, &config_path)?);
            let note = editor.create_note(NoteDraft {
                title,
                markdown: read_markdown(&body)?.unwrap_or_default(),
                tag_labels: tags,
            })?;
            println!("{}", note.id);
        }
        Command::Show {
            note_id,
            json,
            html,
        } => {
            let mut viewer = NoteViewer::new(open_repository(store, &config_path)?);
            info!(%note_id, "Viewing note");
            let note = viewer.view_note(&note_id)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&note)?);
            } else if html {
                let page = HtmlPresenter::new().render(&note);
                let mut renderer = ContentRenderer::new();
                let temp_path = renderer.create_temp_file(&page)?;
                renderer.open_in_browser(&temp_path)?;
            } else {
                println!("{}", console.render_note(&note));
            }
        }
        Command::Edit {
            note_id,
            title,
            body,
            tags,
            clear_tags,
        } => {
            let tag_labels = if clear_tags {
                Some(vec![])
            } else if tags.is_empty() {
                None
            } else {
                Some(tags)
            };
            let mut editor = NoteEditor::new(open_repository(store, &config_path)?);
            let note = editor.edit_note(
                &note_id,
                NoteEdit {
                    title,
                    markdown: read_markdown(&body)?,
                    tag_labels,
                },
            )?;
            println!("{}", console.render_note(&note));
        }
        Command::Delete { note_id } => {
            let mut deleter = NoteDeleter::new(open_repository(store, &config_path)?);
            let title = deleter.delete_note(&note_id)?;
            println!("Deleted note {note_id} ({title})");
        }
        Command::Tag(command) => {
            let manager = TagManager::new(open_repository(store, &config_path)?);
            run_tag_command(manager, command, &console)?
        }
        Command::Config(ConfigCommand::Init) => init_config(&config_path)?,
    }

    Ok(())
}

fn run_tag_command(
    mut manager: TagManager<LocalNoteRepository<FileStorage>>,
    command: TagCommand,
    console: &ConsolePresenter,
) -> Result<()> {
    match command {
        TagCommand::List => println!("{}", console.render_tags(&manager.list_tags()?)),
        TagCommand::Add { label } => {
            let tag = manager.add_tag(&label)?;
            println!("{}", tag.id);
        }
        TagCommand::Rename { tag_id, label } => {
            let tag = manager.rename_tag(&tag_id, &label)?;
            println!("Renamed tag {} to {}", tag.id, tag.label);
        }
        TagCommand::Delete { tag_id } => {
            manager.delete_tag(&tag_id)?;
            println!("Deleted tag {tag_id}");
        }
    }
    Ok(())
}

/// Open the file-backed store named by the CLI override or the config file
pub fn open_repository(
    store: Option<&Path>,
    config_path: &Path,
) -> Result<LocalNoteRepository<FileStorage>> {
    let config = Config::load_or_default(config_path)?;
    let store_dir = config.store_dir(store)?;
    debug!(?store_dir, "Using note store");

    LocalNoteRepository::open_with_keys(
        FileStorage::new(&store_dir),
        &config.storage.notes_key,
        &config.storage.tags_key,
    )
    .with_context(|| format!("Failed to open note store at {}", store_dir.display()))
}

fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }
    Config::create_default(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Markdown from `--markdown` or `--file`, if either was given
pub fn read_markdown(source: &MarkdownSource) -> Result<Option<String>> {
    match (&source.markdown, &source.file) {
        (Some(text), _) => Ok(Some(text.clone())),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file {}", path.display()))
            .map(Some),
        (None, None) => Ok(None),
    }
}
