//! The editable document: a fixed set of 256 tiles.

use std::ops::{Index, IndexMut};

use crate::{
    codec::decode,
    common::{TileIdx, STORE_BYTES, TILE_BYTES, TILE_COUNT},
    error::{Result, TileError},
    tile::Tile,
};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TileStore {
    // Always exactly TILE_COUNT entries.
    tiles: Vec<Tile>,
}

impl Default for TileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TileStore {
    pub fn new() -> Self {
        Self {
            tiles: vec![Tile::new(); TILE_COUNT],
        }
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut store = Self::new();
        store.deserialize_all(data)?;
        Ok(store)
    }

    pub fn count(&self) -> usize {
        self.tiles.len()
    }

    pub fn check_index(idx: i32) -> Result<TileIdx> {
        TileIdx::try_from(idx).map_err(|_| {
            TileError::OutOfRange(format!(
                "tile number must be in range 0-{}, got {}",
                TILE_COUNT - 1,
                idx
            ))
        })
    }

    pub fn tile(&self, idx: i32) -> Result<&Tile> {
        Ok(&self[Self::check_index(idx)?])
    }

    pub fn tile_mut(&mut self, idx: i32) -> Result<&mut Tile> {
        Ok(&mut self[Self::check_index(idx)?])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Packs all tiles in index order (4096 bytes).
    pub fn serialize_all(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(STORE_BYTES);
        for tile in &self.tiles {
            data.extend_from_slice(&tile.encode());
        }
        data
    }

    /// Replaces every tile from packed data. Nothing is modified unless the
    /// whole input decodes.
    pub fn deserialize_all(&mut self, data: &[u8]) -> Result<()> {
        if data.len() != STORE_BYTES {
            return Err(TileError::Format(format!(
                "tile file must be exactly {} bytes ({} tiles of {} bytes), got {}",
                STORE_BYTES,
                TILE_COUNT,
                TILE_BYTES,
                data.len()
            )));
        }
        let tiles = data
            .chunks_exact(TILE_BYTES)
            .map(decode)
            .collect::<Result<Vec<Tile>>>()?;
        self.tiles = tiles;
        Ok(())
    }
}

impl Index<TileIdx> for TileStore {
    type Output = Tile;

    fn index(&self, idx: TileIdx) -> &Tile {
        &self.tiles[idx as usize]
    }
}

impl IndexMut<TileIdx> for TileStore {
    fn index_mut(&mut self, idx: TileIdx) -> &mut Tile {
        &mut self.tiles[idx as usize]
    }
}
