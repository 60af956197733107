//! Translation of typed characters into partition commands
//!
//! Every character read from the terminal is one logical keystroke, so no
//! press/release coalescing is needed before commands reach the session.

use crate::io::configuration::UNDO_KEYS;

/// Logical keystroke understood by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append a block extent of 1 to 9 pixels
    Digit(usize),
    /// Remove the most recent block extent
    Undo,
}

impl Command {
    /// Map a single character, `None` for keys without a binding
    ///
    /// `0` is unbound: a block cannot be empty.
    pub fn from_char(key: char) -> Option<Self> {
        if UNDO_KEYS.contains(&key) {
            return Some(Self::Undo);
        }
        match key.to_digit(10) {
            Some(digit @ 1..=9) => Some(Self::Digit(digit as usize)),
            _ => None,
        }
    }

    /// Commands for every bound character of a line, in typing order
    pub fn parse_line(line: &str) -> impl Iterator<Item = Self> + '_ {
        line.chars().filter_map(Self::from_char)
    }
}
