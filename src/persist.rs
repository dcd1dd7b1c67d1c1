use std::{fs, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use json_pretty_compact::PrettyCompactFormatter;
use log::info;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Serializer;

use crate::{
    common::{PixelValue, TILE_SIZE},
    state::EditorState,
    store::TileStore,
};

pub const SHEET_TILES_PER_ROW: usize = 16;
pub const SHEET_WIDTH: usize = SHEET_TILES_PER_ROW * TILE_SIZE;
pub const SHEET_HEIGHT: usize = SHEET_WIDTH;

fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    info!("Saving {}", path.display());
    let formatter = PrettyCompactFormatter::new();
    let mut data_bytes = vec![];
    let mut ser = Serializer::with_formatter(&mut data_bytes, formatter);
    data.serialize(&mut ser)?;
    fs::create_dir_all(path.parent().context("invalid parent directory")?)?;
    fs::write(path, &data_bytes)?;
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    info!("Loading {}", path.display());
    let data_bytes = std::fs::read(path)?;
    let data: T = serde_json::from_slice(&data_bytes)?;
    Ok(data)
}

pub fn load_global_config(state: &mut EditorState) -> Result<()> {
    if !state.global_config_path.exists() {
        info!(
            "No global config at {}, using defaults.",
            state.global_config_path.display()
        );
        return Ok(());
    }
    state.global_config = load_json(&state.global_config_path).with_context(|| {
        format!(
            "Unable to read global config {}",
            state.global_config_path.display()
        )
    })?;
    Ok(())
}

pub fn save_global_config(state: &mut EditorState) -> Result<()> {
    if state.global_config.modified {
        save_json(&state.global_config_path, &state.global_config)?;
        state.global_config.modified = false;
    }
    Ok(())
}

pub fn save_tiles(store: &TileStore, path: &Path) -> Result<()> {
    info!("Saving tiles to {}", path.display());
    fs::write(path, store.serialize_all())
        .with_context(|| format!("Unable to write {}", path.display()))?;
    Ok(())
}

pub fn load_tiles(path: &Path) -> Result<TileStore> {
    info!("Loading tiles from {}", path.display());
    let data = fs::read(path).with_context(|| format!("Unable to read {}", path.display()))?;
    let store = TileStore::from_bytes(&data)
        .with_context(|| format!("Invalid tile file {}", path.display()))?;
    Ok(store)
}

fn shade(p: PixelValue) -> u8 {
    // 0 is the lightest shade on the console, 3 the darkest.
    255 - p * 85
}

/// Lays the tiles out 16 to a row as 8-bit grayscale pixels.
pub fn render_sheet(store: &TileStore) -> Vec<u8> {
    let mut out = vec![0u8; SHEET_WIDTH * SHEET_HEIGHT];
    for (i, tile) in store.iter().enumerate() {
        let x0 = (i % SHEET_TILES_PER_ROW) * TILE_SIZE;
        let y0 = (i / SHEET_TILES_PER_ROW) * TILE_SIZE;
        for (y, row) in tile.pixels().iter().enumerate() {
            for (x, &p) in row.iter().enumerate() {
                out[(y0 + y) * SHEET_WIDTH + x0 + x] = shade(p);
            }
        }
    }
    out
}

pub fn export_png(store: &TileStore, path: &Path) -> Result<()> {
    info!("Exporting tile sheet to {}", path.display());
    let file =
        fs::File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    let mut encoder = png::Encoder::new(
        BufWriter::new(file),
        SHEET_WIDTH as u32,
        SHEET_HEIGHT as u32,
    );
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&render_sheet(store))?;
    writer.finish()?;
    Ok(())
}
