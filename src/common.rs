pub type PixelValue = u8; // Pixel value (0-3), index into the 4-shade palette
pub type PixelCoord = u8; // X or Y position within a tile (0-7)
pub type TileIdx = u8; // Index into the tile store (0-255)

pub const TILE_SIZE: usize = 8;
pub const MAX_PIXEL_VALUE: PixelValue = 3;
pub const TILE_BYTES: usize = 16; // 2 bitplane bytes per row
pub const TILE_COUNT: usize = 256;
pub const STORE_BYTES: usize = TILE_BYTES * TILE_COUNT;
