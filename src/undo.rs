use crate::{message::Message, state::EditorState};

use anyhow::Result;

#[derive(Debug)]
pub enum UndoAction {
    None,
    Ok(Message),
}

pub fn get_undo_action(state: &EditorState, message: &Message) -> Result<UndoAction> {
    // Only messages that change the tile data are undoable; tile
    // selection, file output and help are not.
    let action = match message {
        Message::SelectTile(_) => UndoAction::None,
        &Message::SetPixel {
            tile_idx, x, y, ..
        } => UndoAction::Ok(Message::SetPixel {
            tile_idx,
            x,
            y,
            value: state.store[tile_idx].get(x, y)? as i32,
        }),
        &Message::DrawLine { tile_idx, .. } => UndoAction::Ok(Message::RestoreTile {
            tile_idx,
            tile: state.store[tile_idx],
        }),
        Message::SaveTiles(_) => UndoAction::None,
        Message::LoadTiles(_) => UndoAction::Ok(Message::RestoreStore(Box::new(state.store.clone()))),
        Message::ExportPng(_) => UndoAction::None,
        Message::Undo => UndoAction::None,
        Message::Help => UndoAction::None,
        Message::Quit => UndoAction::None,
        // Only produced as inverses, never recorded themselves.
        Message::RestoreTile { .. } => UndoAction::None,
        Message::RestoreStore(_) => UndoAction::None,
    };
    Ok(action)
}
