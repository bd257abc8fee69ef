use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/** Coordinates of a square, `file` is horizontal and `rank` is vertical.
 * No board bounds are checked here. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    file: i32,
    rank: i32,
}

impl Position {
    #[inline]
    pub const fn new(file: i32, rank: i32) -> Self {
        Position { file, rank }
    }

    #[inline]
    pub fn file(&self) -> i32 {
        self.file
    }

    #[inline]
    pub fn rank(&self) -> i32 {
        self.rank
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.file, self.rank)
    }
}

impl From<(i32, i32)> for Position {
    fn from((file, rank): (i32, i32)) -> Self {
        Position::new(file, rank)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError {
    input: String,
}

impl Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid position `{}`, expected `file,rank`", self.input)
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Accepts both `(3,5)` and `3,5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParsePositionError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let inner = match (trimmed.strip_prefix('('), trimmed.strip_suffix(')')) {
            (Some(_), Some(_)) => &trimmed[1..trimmed.len() - 1],
            (None, None) => trimmed,
            _ => return Err(error()),
        };
        let (file, rank) = inner.split_once(',').ok_or_else(error)?;
        let file = file.trim().parse().map_err(|_| error())?;
        let rank = rank.trim().parse().map_err(|_| error())?;
        Ok(Position::new(file, rank))
    }
}
