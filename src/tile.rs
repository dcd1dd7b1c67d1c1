//! An 8x8 tile of 2bpp pixels.
use crate::{
    common::{PixelCoord, PixelValue, MAX_PIXEL_VALUE, TILE_SIZE},
    error::{Result, TileError},
};

#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Tile {
    // Indexed [y][x].
    pixels: [[PixelValue; TILE_SIZE]; TILE_SIZE],
}

fn check_coord(name: &str, c: i32) -> Result<PixelCoord> {
    if !(0..TILE_SIZE as i32).contains(&c) {
        return Err(TileError::OutOfRange(format!(
            "{} must be in range 0-{}, got {}",
            name,
            TILE_SIZE - 1,
            c
        )));
    }
    Ok(c as PixelCoord)
}

fn check_value(value: i32) -> Result<PixelValue> {
    if !(0..=MAX_PIXEL_VALUE as i32).contains(&value) {
        return Err(TileError::OutOfRange(format!(
            "pixel value must be in range 0-{}, got {}",
            MAX_PIXEL_VALUE, value
        )));
    }
    Ok(value as PixelValue)
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixels(&self) -> &[[PixelValue; TILE_SIZE]; TILE_SIZE] {
        &self.pixels
    }

    pub fn get(&self, x: i32, y: i32) -> Result<PixelValue> {
        let x = check_coord("x", x)?;
        let y = check_coord("y", y)?;
        Ok(self.pixels[y as usize][x as usize])
    }

    /// Writes one pixel and returns the stored value.
    ///
    /// Out-of-range coordinates or values are rejected up front; the
    /// clamp pass afterwards only restores the invariant for the rest
    /// of the grid.
    pub fn set(&mut self, x: i32, y: i32, value: i32) -> Result<PixelValue> {
        let value = check_value(value)?;
        let x = check_coord("x", x)?;
        let y = check_coord("y", y)?;
        self.pixels[y as usize][x as usize] = value;
        self.clamp();
        Ok(self.pixels[y as usize][x as usize])
    }

    /// Forces every pixel into 0-3. Idempotent.
    pub fn clamp(&mut self) {
        for row in self.pixels.iter_mut() {
            for p in row.iter_mut() {
                if *p > MAX_PIXEL_VALUE {
                    *p = MAX_PIXEL_VALUE;
                }
            }
        }
    }

    pub fn render(&self) -> String {
        let header: String = (0..TILE_SIZE).map(|x| x.to_string()).collect();
        let mut out = format!("  {}\n\n", header);
        for (y, row) in self.pixels.iter().enumerate() {
            let line: String = row.iter().map(|p| p.to_string()).collect();
            out.push_str(&format!("{} {}\n", y, line));
        }
        out
    }

    // Bypasses validation, for exercising clamp.
    #[cfg(test)]
    pub(crate) fn raw_mut(&mut self) -> &mut [[PixelValue; TILE_SIZE]; TILE_SIZE] {
        &mut self.pixels
    }
}
