//! Compass directions stored on maze nodes
//!
//! A node's direction is its single outbound edge in the spanning tree. The
//! `Origin` value doubles as "no edge", which by construction is the same as
//! "this node is the root".

use std::fmt;

/// Display glyph for each direction, indexed by discriminant
pub const SYMBOLS: [char; 5] = ['+', '>', 'v', '<', '^'];

/// Outbound edge of a node, or `Origin` for the tree root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Direction {
    /// No outbound edge; the node is the root
    #[default]
    Origin = 0,
    /// Towards `x + 1`
    Right = 1,
    /// Towards `y + 1`
    Down = 2,
    /// Towards `x - 1`
    Left = 3,
    /// Towards `y - 1`
    Up = 4,
}

impl Direction {
    /// The four directions that name a neighbour
    ///
    /// Order matches the order in which neighbours are offered to the random
    /// shift selector.
    pub const CARDINALS: [Self; 4] = [Self::Right, Self::Left, Self::Down, Self::Up];

    /// Unit step `(dx, dy)` taken when following this direction
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::Origin => (0, 0),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
        }
    }

    /// Direction pointing back the way this one came
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Origin => Self::Origin,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
        }
    }

    /// Whether this is the root marker rather than an edge
    pub const fn is_origin(self) -> bool {
        matches!(self, Self::Origin)
    }

    /// Display glyph from [`SYMBOLS`]
    pub const fn symbol(self) -> char {
        match self {
            Self::Origin => SYMBOLS[0],
            Self::Right => SYMBOLS[1],
            Self::Down => SYMBOLS[2],
            Self::Left => SYMBOLS[3],
            Self::Up => SYMBOLS[4],
        }
    }

    /// Parse a glyph from [`SYMBOLS`]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Origin),
            '>' => Some(Self::Right),
            'v' => Some(Self::Down),
            '<' => Some(Self::Left),
            '^' => Some(Self::Up),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Origin),
            1 => Ok(Self::Right),
            2 => Ok(Self::Down),
            3 => Ok(Self::Left),
            4 => Ok(Self::Up),
            other => Err(other),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Origin => "origin",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
            Self::Up => "up",
        };
        f.write_str(name)
    }
}
