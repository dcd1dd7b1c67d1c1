use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{error, info, warn};

use crate::{
    line::draw_line,
    message::Message,
    persist,
    state::EditorState,
    store::TileStore,
    undo::{get_undo_action, UndoAction},
};

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Help,
    Quit,
}

/// Applies one message to the session, recording its inverse for undo
/// when it succeeds.
pub fn update(state: &mut EditorState, message: Message) -> Result<Outcome> {
    let undo_action = get_undo_action(state, &message)?;
    let outcome = apply(state, message)?;
    if let UndoAction::Ok(inverse) = undo_action {
        state.undo_stack.push(inverse);
    }
    Ok(outcome)
}

fn apply(state: &mut EditorState, message: Message) -> Result<Outcome> {
    match message {
        Message::SelectTile(n) => {
            state.tile_idx = TileStore::check_index(n)?;
        }
        Message::SetPixel {
            tile_idx,
            x,
            y,
            value,
        } => {
            state.store[tile_idx].set(x, y, value)?;
        }
        Message::DrawLine {
            tile_idx,
            x1,
            y1,
            x2,
            y2,
            value,
        } => {
            draw_line(&mut state.store[tile_idx], x1, y1, x2, y2, value)?;
        }
        Message::SaveTiles(path) => {
            let path = resolve_path(state, path)?;
            persist::save_tiles(&state.store, &path)?;
            remember_file(state, path);
        }
        Message::LoadTiles(path) => {
            let path = resolve_path(state, path)?;
            state.store = persist::load_tiles(&path)?;
            remember_file(state, path);
        }
        Message::ExportPng(path) => {
            persist::export_png(&state.store, &path)?;
        }
        Message::Undo => match state.undo_stack.pop() {
            Some(inverse) => {
                info!("Undoing last change.");
                apply(state, inverse)?;
            }
            None => warn!("Nothing to undo."),
        },
        Message::Help => return Ok(Outcome::Help),
        Message::Quit => return Ok(Outcome::Quit),
        Message::RestoreTile { tile_idx, tile } => {
            state.store[tile_idx] = tile;
        }
        Message::RestoreStore(store) => {
            state.store = *store;
        }
    }
    Ok(Outcome::Continue)
}

fn resolve_path(state: &EditorState, path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None => state
            .global_config
            .last_file
            .clone()
            .context("No file given and no previous file to reuse."),
    }
}

fn remember_file(state: &mut EditorState, path: PathBuf) {
    if state.global_config.last_file.as_ref() != Some(&path) {
        state.global_config.last_file = Some(path);
        state.global_config.modified = true;
    }
    if let Err(e) = persist::save_global_config(state) {
        error!("Error saving global config: {:#}", e);
    }
}
