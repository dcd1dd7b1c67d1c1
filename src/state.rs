use anyhow::{Context, Result};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    common::TileIdx,
    message::Message,
    persist,
    store::TileStore,
    tile::Tile,
};

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct GlobalConfig {
    #[serde(skip_serializing, skip_deserializing)]
    pub modified: bool,
    pub last_file: Option<PathBuf>,
}

pub struct EditorState {
    pub global_config_path: PathBuf,
    pub global_config: GlobalConfig,

    // Document:
    pub store: TileStore,

    // Editing session:
    pub tile_idx: TileIdx,
    pub undo_stack: Vec<Message>,
}

impl EditorState {
    pub fn new(global_config_path: PathBuf) -> Self {
        EditorState {
            global_config_path,
            global_config: GlobalConfig::default(),
            store: TileStore::new(),
            tile_idx: 0,
            undo_stack: vec![],
        }
    }

    pub fn current_tile(&self) -> &Tile {
        &self.store[self.tile_idx]
    }
}

fn get_global_config_path() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("", "", "TGBEdit")
        .context("Unable to open global config directory.")?;
    let config_dir = project_dirs.config_dir();
    let config_path = config_dir.join("config.json");
    Ok(config_path)
}

pub fn get_initial_state(config_path: Option<PathBuf>) -> Result<EditorState> {
    let config_path = match config_path {
        Some(p) => p,
        None => get_global_config_path()?,
    };
    let mut editor_state = EditorState::new(config_path);
    persist::load_global_config(&mut editor_state)?;
    Ok(editor_state)
}
