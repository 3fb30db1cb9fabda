//! Line-oriented input parsing for the console front-end.
//!
//! The engine never sees raw text: everything here turns lines into either a
//! validated integer, the `-1` cancellation sentinel, or end of input.

use std::io::{self, BufRead, Write};

use crate::game_state::checkers_types::Square;
use crate::move_generation::legal_move_shared::{square_from_index, square_is_playable};

/// Entered at a position prompt to abandon the current move.
pub const CANCEL_SENTINEL: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInput {
    Value(i64),
    Invalid,
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionChoice {
    Square(Square),
    Cancel,
    EndOfInput,
}

/// Parses a leading integer the way `strtol` does: leading blanks are
/// skipped, an optional sign and at least one digit are required, and
/// anything after the digits is ignored.
pub fn parse_user_int(line: &str) -> Option<i64> {
    let trimmed = line.trim_start_matches([' ', '\t']);
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    trimmed[..end].parse::<i64>().ok()
}

/// Reads one line and parses it with [`parse_user_int`].
pub fn read_user_int<R: BufRead>(input: &mut R) -> io::Result<UserInput> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(UserInput::EndOfInput);
    }

    Ok(match parse_user_int(&line) {
        Some(value) => UserInput::Value(value),
        None => UserInput::Invalid,
    })
}

/// Reads one line with the trailing newline removed, or `None` at end of input.
pub fn read_trimmed_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

/// Prompts until the user enters a playable square or cancels.
pub fn prompt_position<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<PositionChoice> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let value = match read_user_int(input)? {
            UserInput::EndOfInput => return Ok(PositionChoice::EndOfInput),
            UserInput::Invalid => {
                writeln!(out, "Invalid data type. Please enter an integer 0-63.")?;
                continue;
            }
            UserInput::Value(value) => value,
        };

        if value == CANCEL_SENTINEL {
            return Ok(PositionChoice::Cancel);
        }

        let Some(square) = i32::try_from(value).ok().and_then(square_from_index) else {
            writeln!(out, "Out of range. Please enter 0-63.")?;
            continue;
        };

        if !square_is_playable(i32::from(square)) {
            writeln!(out, "That is not a playable \"#\" dark square! Try another spot.")?;
            continue;
        }

        return Ok(PositionChoice::Square(square));
    }
}
