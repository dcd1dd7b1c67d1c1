//! Conversion between tiles and the console's packed 2bpp format.
//!
//! Each tile is 16 bytes: for every row, top to bottom, the low bitplane
//! byte followed by the high bitplane byte. The most significant bit of
//! each byte is the leftmost pixel (x = 0).

use crate::{
    common::{TILE_BYTES, TILE_SIZE},
    error::{Result, TileError},
    tile::Tile,
};

pub fn encode(tile: &Tile) -> [u8; TILE_BYTES] {
    let mut tile = *tile;
    tile.clamp();
    let mut out = [0; TILE_BYTES];
    for (y, row) in tile.pixels().iter().enumerate() {
        let mut low = 0u8;
        let mut high = 0u8;
        for (x, &p) in row.iter().enumerate() {
            low |= (p & 1) << (7 - x);
            high |= ((p >> 1) & 1) << (7 - x);
        }
        out[y * 2] = low;
        out[y * 2 + 1] = high;
    }
    out
}

pub fn decode(data: &[u8]) -> Result<Tile> {
    if data.len() != TILE_BYTES {
        return Err(TileError::Format(format!(
            "tile data must be exactly {} bytes, got {}",
            TILE_BYTES,
            data.len()
        )));
    }
    let mut tile = Tile::new();
    for y in 0..TILE_SIZE {
        for x in 0..TILE_SIZE {
            let c0 = (data[y * 2] >> (7 - x)) & 1;
            let c1 = (data[y * 2 + 1] >> (7 - x)) & 1;
            tile.set(x as i32, y as i32, (c0 | (c1 << 1)) as i32)?;
        }
    }
    tile.clamp();
    Ok(tile)
}

impl Tile {
    pub fn encode(&self) -> [u8; TILE_BYTES] {
        encode(self)
    }

    pub fn decode(data: &[u8]) -> Result<Tile> {
        decode(data)
    }

    /// Replaces this tile with decoded data. On error the tile is unchanged.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        *self = decode(data)?;
        Ok(())
    }
}
