use crate::{Coordinate, Puzzle};
use std::fs::File;
use std::io::{BufReader, Read};
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while reading a puzzle.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("`{token}` is not a valid integer")]
    InvalidInteger { token: String },
    #[error("input ended early, expected {what}")]
    MissingValue { what: String },
    #[error("floe count must not be negative, got {0}")]
    NegativeFloeCount(i64),
}

/// Reads a puzzle from a file.
///
/// Whitespace separated integers, in this order:
/// - y of the south pole,
/// - y of the north pole,
/// - jump radius,
/// - number of floes `n`,
/// - `n` pairs `x y`, one per floe.
///
/// Tokens after the last floe are ignored.
///
/// Example input:
/// ```text
/// 100 0 40
/// 2
/// 0 30
/// 0 65
/// ```
pub fn from_file(path: &str) -> Result<Puzzle, InputError> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes any reader.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Puzzle, InputError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    from_str(&input)
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<Puzzle, InputError> {
    let mut tokens = Tokens {
        inner: input.split_whitespace(),
    };

    let south_y = tokens.next::<i32>("south pole")?;
    let north_y = tokens.next::<i32>("north pole")?;
    let radius = tokens.next::<i32>("jump radius")?;

    let count = tokens.next::<i64>("floe count")?;
    let count = usize::try_from(count).map_err(|_| InputError::NegativeFloeCount(count))?;

    let mut floes = Vec::with_capacity(count.min(1 << 16));
    for i in 0..count {
        let x = tokens.next::<i32>(&format!("x of floe {}", i + 1))?;
        let y = tokens.next::<i32>(&format!("y of floe {}", i + 1))?;
        floes.push(Coordinate::new(x, y));
    }

    // anything after the last floe is ignored
    let leftover = tokens.inner.count();
    if leftover > 0 {
        log::warn!("ignoring {} token(s) after the last floe", leftover);
    }

    Ok(Puzzle::new(north_y, south_y, radius, floes))
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl Tokens<'_> {
    fn next<T: FromStr>(&mut self, what: &str) -> Result<T, InputError> {
        let token = self.inner.next().ok_or_else(|| InputError::MissingValue {
            what: what.to_string(),
        })?;
        token.parse().map_err(|_| InputError::InvalidInteger {
            token: token.to_string(),
        })
    }
}
