use std::path::PathBuf;

use itertools::Itertools;

use crate::{
    common::TileIdx,
    error::{Result, TileError},
    store::TileStore,
    tile::Tile,
};

pub const HELP: &str = "\
COMMANDS:
tN               switches to tile N (0-255)
dX,Y,P           draws pixel (X,Y) in color P (0-3)
nX1,Y1,X2,Y2,P   draws a horizontal or vertical line from (X1,Y1)
                 to (X2,Y2) in color P
sFILE            saves all tiles to FILE (last file if omitted)
lFILE            loads all tiles from FILE (last file if omitted)
eFILE            exports all tiles as a PNG sheet
u                undoes the last change
?                shows this help
q                quits";

#[derive(Debug, Clone)]
pub enum Message {
    SelectTile(i32),
    SetPixel {
        tile_idx: TileIdx,
        x: i32,
        y: i32,
        value: i32,
    },
    DrawLine {
        tile_idx: TileIdx,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        value: i32,
    },
    SaveTiles(Option<PathBuf>),
    LoadTiles(Option<PathBuf>),
    ExportPng(PathBuf),
    Undo,
    Help,
    Quit,
    RestoreTile {
        tile_idx: TileIdx,
        tile: Tile,
    },
    RestoreStore(Box<TileStore>),
}

fn parse_int(token: &str) -> Result<i32> {
    let token = token.trim();
    token
        .parse()
        .map_err(|_| TileError::Parse(format!("invalid number '{}'", token)))
}

fn arg_count_error(cmd: char, expected: usize, args: &str) -> TileError {
    TileError::Validation(format!(
        "'{}' takes {} comma-separated values, got {}",
        cmd,
        expected,
        args.split(',').count()
    ))
}

fn optional_path(args: &str) -> Option<PathBuf> {
    if args.is_empty() {
        None
    } else {
        Some(PathBuf::from(args))
    }
}

/// Parses one line of editor input. Blank lines yield `None`.
///
/// The first character selects the command and the remainder is its
/// argument string. Pixel and line commands apply to `tile_idx`.
pub fn parse_command(input: &str, tile_idx: TileIdx) -> Result<Option<Message>> {
    let input = input.trim();
    let mut chars = input.chars();
    let Some(cmd) = chars.next() else {
        return Ok(None);
    };
    let args = chars.as_str().trim();
    let message = match cmd {
        't' => Message::SelectTile(parse_int(args)?),
        'd' => {
            let (x, y, value) = args
                .split(',')
                .collect_tuple()
                .ok_or_else(|| arg_count_error(cmd, 3, args))?;
            Message::SetPixel {
                tile_idx,
                x: parse_int(x)?,
                y: parse_int(y)?,
                value: parse_int(value)?,
            }
        }
        'n' => {
            let (x1, y1, x2, y2, value) = args
                .split(',')
                .collect_tuple()
                .ok_or_else(|| arg_count_error(cmd, 5, args))?;
            Message::DrawLine {
                tile_idx,
                x1: parse_int(x1)?,
                y1: parse_int(y1)?,
                x2: parse_int(x2)?,
                y2: parse_int(y2)?,
                value: parse_int(value)?,
            }
        }
        's' => Message::SaveTiles(optional_path(args)),
        'l' => Message::LoadTiles(optional_path(args)),
        'e' => Message::ExportPng(
            optional_path(args)
                .ok_or_else(|| TileError::Validation("'e' needs an output file".to_string()))?,
        ),
        'u' => Message::Undo,
        '?' => Message::Help,
        'q' => Message::Quit,
        _ => {
            return Err(TileError::Validation(format!(
                "unknown command '{}', type ? for help",
                cmd
            )))
        }
    };
    Ok(Some(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Option<Message>> {
        parse_command(input, 7)
    }

    #[test]
    fn test_blank_line() {
        assert!(parse("").unwrap().is_none());
        assert!(parse("   \n").unwrap().is_none());
    }

    #[test]
    fn test_parse_draw() {
        match parse("d1, 2,3\n").unwrap() {
            Some(Message::SetPixel {
                tile_idx: 7,
                x: 1,
                y: 2,
                value: 3,
            }) => {}
            m => panic!("unexpected message: {:?}", m),
        }
    }

    #[test]
    fn test_parse_line() {
        match parse("n2,6,2,3,1").unwrap() {
            Some(Message::DrawLine {
                tile_idx: 7,
                x1: 2,
                y1: 6,
                x2: 2,
                y2: 3,
                value: 1,
            }) => {}
            m => panic!("unexpected message: {:?}", m),
        }
    }

    #[test]
    fn test_wrong_arg_count() {
        assert!(matches!(parse("d1,2"), Err(TileError::Validation(_))));
        assert!(matches!(parse("d1,2,3,4"), Err(TileError::Validation(_))));
        assert!(matches!(parse("n1,2,3,4"), Err(TileError::Validation(_))));
    }

    #[test]
    fn test_non_numeric() {
        assert!(matches!(parse("tabc"), Err(TileError::Parse(_))));
        assert!(matches!(parse("t"), Err(TileError::Parse(_))));
        assert!(matches!(parse("d1,x,3"), Err(TileError::Parse(_))));
        assert!(matches!(parse("n1,1,1.5,4,2"), Err(TileError::Parse(_))));
    }

    #[test]
    fn test_negative_numbers_parse() {
        assert!(matches!(parse("t-1"), Ok(Some(Message::SelectTile(-1)))));
    }

    #[test]
    fn test_file_commands() {
        match parse("s tiles.bin").unwrap() {
            Some(Message::SaveTiles(Some(p))) => assert_eq!(p, PathBuf::from("tiles.bin")),
            m => panic!("unexpected message: {:?}", m),
        }
        assert!(matches!(parse("l"), Ok(Some(Message::LoadTiles(None)))));
        assert!(matches!(parse("e"), Err(TileError::Validation(_))));
        assert!(matches!(parse("esheet.png"), Ok(Some(Message::ExportPng(_)))));
    }

    #[test]
    fn test_simple_commands() {
        assert!(matches!(parse("u"), Ok(Some(Message::Undo))));
        assert!(matches!(parse("?"), Ok(Some(Message::Help))));
        assert!(matches!(parse("q"), Ok(Some(Message::Quit))));
        assert!(matches!(parse("x"), Err(TileError::Validation(_))));
    }
}
