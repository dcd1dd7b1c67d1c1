//! Axis-aligned line rasterization for the line-draw command.
use crate::{
    error::{Result, TileError},
    tile::Tile,
};

pub type Point = (i32, i32);

/// Returns the points of a horizontal or vertical line, inclusive of both
/// endpoints, in ascending order along the varying axis.
pub fn line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Vec<Point>> {
    match (x1 == x2, y1 == y2) {
        (true, false) => Ok((y1.min(y2)..=y1.max(y2)).map(|y| (x1, y)).collect()),
        (false, true) => Ok((x1.min(x2)..=x1.max(x2)).map(|x| (x, y1)).collect()),
        (true, true) => Err(TileError::Validation(format!(
            "line from ({},{}) to ({},{}) is a single point",
            x1, y1, x2, y2
        ))),
        (false, false) => Err(TileError::Validation(format!(
            "line from ({},{}) to ({},{}) must be horizontal or vertical",
            x1, y1, x2, y2
        ))),
    }
}

/// Draws a line onto `tile`. Every point is validated before the tile is
/// touched, so a failing draw leaves the tile as it was.
pub fn draw_line(
    tile: &mut Tile,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    value: i32,
) -> Result<Vec<Point>> {
    let points = line_points(x1, y1, x2, y2)?;
    let mut scratch = *tile;
    for &(x, y) in &points {
        scratch.set(x, y, value)?;
    }
    *tile = scratch;
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_line_either_direction() {
        let expected = vec![(2, 3), (2, 4), (2, 5), (2, 6)];
        assert_eq!(line_points(2, 3, 2, 6).unwrap(), expected);
        assert_eq!(line_points(2, 6, 2, 3).unwrap(), expected);
    }

    #[test]
    fn test_horizontal_line_either_direction() {
        let expected = vec![(1, 5), (2, 5), (3, 5)];
        assert_eq!(line_points(1, 5, 3, 5).unwrap(), expected);
        assert_eq!(line_points(3, 5, 1, 5).unwrap(), expected);
    }

    #[test]
    fn test_draw_line_sets_points() {
        for (x1, y1, x2, y2) in [(2, 3, 2, 6), (2, 6, 2, 3)] {
            let mut tile = Tile::new();
            draw_line(&mut tile, x1, y1, x2, y2, 1).unwrap();
            for y in 0..8 {
                for x in 0..8 {
                    let on_line = x == 2 && (3..=6).contains(&y);
                    assert_eq!(tile.get(x, y).unwrap(), on_line as u8);
                }
            }
        }
    }

    #[test]
    fn test_diagonal_rejected() {
        let mut tile = Tile::new();
        assert!(matches!(
            draw_line(&mut tile, 1, 1, 4, 4, 2),
            Err(TileError::Validation(_))
        ));
        assert_eq!(tile, Tile::new());
    }

    #[test]
    fn test_single_point_rejected() {
        assert!(matches!(line_points(3, 3, 3, 3), Err(TileError::Validation(_))));
    }

    #[test]
    fn test_out_of_range_line_leaves_tile_unchanged() {
        let mut tile = Tile::new();
        assert!(matches!(
            draw_line(&mut tile, 5, 0, 9, 0, 3),
            Err(TileError::OutOfRange(_))
        ));
        assert!(matches!(
            draw_line(&mut tile, 0, 0, 0, 7, 4),
            Err(TileError::OutOfRange(_))
        ));
        assert_eq!(tile, Tile::new());
    }
}
