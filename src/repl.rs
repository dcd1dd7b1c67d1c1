//! Line-oriented editor loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{error, warn};

use crate::{
    message::{parse_command, HELP},
    state::EditorState,
    update::{update, Outcome},
};

/// Runs commands from `input` until `q` or end of input, rendering the
/// current tile before each prompt. Command errors are reported and the
/// loop continues; only I/O errors end it early.
pub fn run<R: BufRead, W: Write>(state: &mut EditorState, mut input: R, output: &mut W) -> Result<()> {
    let mut buf = vec![];
    loop {
        writeln!(output, "CURRENT TILE: {}", state.tile_idx)?;
        writeln!(output, "{}", state.current_tile().render())?;
        write!(output, ">")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Rejected non-UTF-8 input line");
                writeln!(output, "ERROR: input is not valid UTF-8: {}", e)?;
                continue;
            }
        };
        let message = match parse_command(line, state.tile_idx) {
            Ok(Some(m)) => m,
            Ok(None) => continue,
            Err(e) => {
                warn!("Rejected command {:?}", line.trim());
                writeln!(output, "ERROR: {}", e)?;
                continue;
            }
        };
        match update(state, message) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Help) => writeln!(output, "{}", HELP)?,
            Ok(Outcome::Quit) => break,
            Err(e) => {
                error!("{:#}", e);
                writeln!(output, "ERROR: {:#}", e)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run_script(script: &[u8]) -> (EditorState, String) {
        let mut state = EditorState::new(PathBuf::from("unused_config.json"));
        let mut output = vec![];
        run(&mut state, script, &mut output).unwrap();
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_invalid_utf8_line_keeps_session() {
        let (state, output) = run_script(b"d1,1,2\n\xff\xfe\nd2,2,3\nq\nd3,3,1\n");
        assert_eq!(state.store[0].get(1, 1).unwrap(), 2);
        assert_eq!(state.store[0].get(2, 2).unwrap(), 3);
        assert_eq!(state.store[0].get(3, 3).unwrap(), 0);
        assert!(output.contains("ERROR: input is not valid UTF-8"));
    }

    #[test]
    fn test_blank_lines_and_end_of_input() {
        let (state, output) = run_script(b"\n   \nt5\n");
        assert_eq!(state.tile_idx, 5);
        // One prompt per line read, plus the one answered by end of input.
        assert_eq!(output.matches("CURRENT TILE:").count(), 4);
        assert!(output.ends_with("CURRENT TILE: 5\n  01234567\n\n0 00000000\n1 00000000\n2 00000000\n3 00000000\n4 00000000\n5 00000000\n6 00000000\n7 00000000\n\n>"));
    }

    #[test]
    fn test_tile_rendered_after_command() {
        let (_, output) = run_script(b"n0,4,7,4,3\nq\n");
        assert!(output.contains("4 33333333"));
    }

    #[test]
    fn test_errors_return_to_prompt() {
        let (state, output) = run_script(b"t300\nd1,x,2\nn1,1,4,4,2\nz\nt3\n");
        assert_eq!(state.tile_idx, 3);
        assert_eq!(output.matches("ERROR: ").count(), 4);
        assert!(output.contains("ERROR: tile number must be in range 0-255, got 300"));
    }

    #[test]
    fn test_help_and_quit() {
        let (state, output) = run_script(b"?\nq\nt9\n");
        assert!(output.contains("COMMANDS:"));
        assert_eq!(state.tile_idx, 0);
    }
}
