// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::application::{Clock, KeyValueStore, NoteRepository, Preferences, Session, StateStore};
use crate::cli::args::{Args, Command, SidebarAction, ThemeAction};
use crate::domain::{DomainError, Note, NotePatch, Theme};
use crate::infrastructure::markdown::{HtmlSanitizer, MarkdownParser};
use crate::infrastructure::{BrowserPreview, Config, FileStore, RenderPipeline};
use crate::ports::HtmlPresenter;
use crate::util::text::{format_timestamp, single_line};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting mdnotes with arguments");

    let config_path = match &args.config {
        Some(path) => {
            debug!(?path, "Using provided config path");
            path.clone()
        }
        None => Config::default_path()?,
    };
    let config = Config::load_or_default(&config_path)?;

    let data_dir = config.resolve_data_dir(args.data_dir.as_deref())?;
    debug!(?data_dir, "Using data directory");

    // Both halves share one backend; clones address the same files.
    let store = StateStore::new(FileStore::new(&data_dir));
    let notes = NoteRepository::open(store.clone());
    let preferences = Preferences::new(store, config.ambient_theme());
    let mut session = Session::new(notes, preferences);
    let pipeline = RenderPipeline::new(config.render_options());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&mut session, &pipeline, &config_path, args.command, &mut out)
}

/// Run one command against an open session, writing user-facing output to `out`.
///
/// `config_path` is only written by `init`.
pub fn execute<S, C, P, Z, W>(
    session: &mut Session<S, C>,
    pipeline: &RenderPipeline<P, Z>,
    config_path: &Path,
    command: Command,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    P: MarkdownParser,
    Z: HtmlSanitizer,
    W: Write,
{
    match command {
        Command::Init { force } => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}, use --force to overwrite",
                    config_path.display()
                );
            }
            Config::create_default(config_path)?;
            info!(?config_path, "Wrote default config");
            writeln!(out, "{}", config_path.display())?;
        }
        Command::New { title, content } => {
            let note = session.new_note();
            let patch = NotePatch { title, content };
            if !patch.is_empty() {
                session.update_active(patch);
            }
            info!(note_id = %note.id, "Created note");
            writeln!(out, "{}", note.id)?;
        }
        Command::List { search, json } => {
            session.set_search(search.unwrap_or_default());
            let notes = session.visible_notes();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&notes)?)?;
            } else if notes.is_empty() {
                if session.search().trim().is_empty() {
                    writeln!(out, "No notes yet.")?;
                } else {
                    writeln!(out, "No notes matching '{}'.", session.search())?;
                }
            } else {
                for note in notes {
                    writeln!(out, "{}", list_row(note))?;
                }
            }
        }
        Command::Show { note_id, json } => {
            let note = find_note(session, &note_id)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(note)?)?;
            } else {
                writeln!(out, "# {}", note.display_title())?;
                writeln!(out, "id: {}", note.id)?;
                writeln!(out, "modified: {}", format_timestamp(note.last_modified))?;
                writeln!(out)?;
                writeln!(out, "{}", note.content)?;
            }
        }
        Command::Edit {
            note_id,
            title,
            content,
        } => {
            find_note(session, &note_id)?;
            session.notes_mut().update(&note_id, NotePatch { title, content });
            info!(note_id = %note_id, "Updated note");
            writeln!(out, "Updated note {note_id}")?;
        }
        Command::Delete { note_id } => {
            if session.delete_note(&note_id) {
                info!(note_id = %note_id, "Deleted note");
                writeln!(out, "Deleted note {note_id}")?;
            } else {
                writeln!(out, "Note {note_id} not found, nothing deleted")?;
            }
        }
        Command::Render { note_id } => {
            find_note(session, &note_id)?;
            session.select(note_id);
            writeln!(out, "{}", session.preview_active(pipeline))?;
        }
        Command::View { note_id } => {
            let note = find_note(session, &note_id)?.clone();
            session.select(note_id);
            let body = session.preview_active(pipeline);
            let page = HtmlPresenter::new().render(&note, &body, session.preferences().theme());

            let mut preview = BrowserPreview::new();
            let path = preview.write_page("note.html", &page)?;
            info!(note_id = %note.id, ?path, "Opening note preview");
            preview
                .open_in_browser(&path)
                .with_context(|| format!("Failed to open preview for note {}", note.id))?;
        }
        Command::Theme { action } => {
            let preferences = session.preferences_mut();
            let theme = match action {
                None => preferences.theme(),
                Some(ThemeAction::Toggle) => preferences.toggle_theme(),
                Some(ThemeAction::Light) => set_theme(preferences, Theme::Light),
                Some(ThemeAction::Dark) => set_theme(preferences, Theme::Dark),
            };
            writeln!(out, "{theme}")?;
        }
        Command::Sidebar { action } => {
            let preferences = session.preferences_mut();
            let collapsed = match action {
                None => preferences.sidebar_collapsed(),
                Some(SidebarAction::Toggle) => preferences.toggle_sidebar(),
                Some(SidebarAction::Collapse) => {
                    preferences.set_sidebar_collapsed(true);
                    true
                }
                Some(SidebarAction::Expand) => {
                    preferences.set_sidebar_collapsed(false);
                    false
                }
            };
            writeln!(out, "{}", if collapsed { "collapsed" } else { "expanded" })?;
        }
    }
    Ok(())
}

fn find_note<'a, S: KeyValueStore, C: Clock>(
    session: &'a Session<S, C>,
    id: &str,
) -> Result<&'a Note> {
    session
        .notes()
        .find_by_id(id)
        .ok_or_else(|| DomainError::NoteNotFound(id.to_string()).into())
}

fn set_theme<S: KeyValueStore>(preferences: &mut Preferences<S>, theme: Theme) -> Theme {
    preferences.set_theme(theme);
    theme
}

fn list_row(note: &Note) -> String {
    let snippet = note.snippet();
    format!(
        "{}\t{}\t{}",
        note.id,
        single_line(note.display_title()),
        if snippet.is_empty() { "No content" } else { snippet.as_str() }
    )
}
