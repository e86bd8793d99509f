use std::fmt;

pub const BOARD_SIZE: usize = 4;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const SPAWN_VALUE: u32 = 2;
pub const DEFAULT_TARGET_VALUE: u32 = 2048;
/// Largest tile a 4x4 board can build when every spawn is a 2.
pub const MAX_TILE_VALUE: u32 = 131072;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector with the origin at the bottom-left corner, y growing upward.
    pub fn vector(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Lost,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the cell for signed coordinates, or `None` when off the board.
    pub fn checked(x: isize, y: isize) -> Option<Self> {
        let size = BOARD_SIZE as isize;
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some(Self::new(x as usize, y as usize))
    }

    pub fn is_valid(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.vector();
        Self::checked(self.x as isize + dx, self.y as isize + dy)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Every cell, x-major then y. Reversing an axis visits the far side first.
pub fn all_cells(flip_x: bool, flip_y: bool) -> impl Iterator<Item = Cell> {
    (0..BOARD_SIZE).flat_map(move |i| {
        let x = if flip_x { BOARD_SIZE - 1 - i } else { i };
        (0..BOARD_SIZE).map(move |j| {
            let y = if flip_y { BOARD_SIZE - 1 - j } else { j };
            Cell::new(x, y)
        })
    })
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    number: u32,
}

impl Tile {
    pub fn new(number: u32) -> Option<Self> {
        if (2..=MAX_TILE_VALUE).contains(&number) && number.is_power_of_two() {
            Some(Self { number })
        } else {
            None
        }
    }

    pub(crate) fn spawned() -> Self {
        Self {
            number: SPAWN_VALUE,
        }
    }

    pub fn number(self) -> u32 {
        self.number
    }

    pub(crate) fn doubled(self) -> Option<Self> {
        self.number
            .checked_mul(2)
            .map(|number| Self { number })
    }
}

/// One tile's journey during a move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TileMove {
    pub from: Cell,
    pub to: Cell,
    /// Value after merging, `None` for a plain slide.
    pub merged_value: Option<u32>,
}

impl TileMove {
    pub fn merged(&self) -> bool {
        self.merged_value.is_some()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SpawnedTile {
    pub cell: Cell,
    pub number: u32,
}

/// Proof that a state-changing move is waiting for its completion.
///
/// Only the board hands these out, and `Board::complete_move` consumes one.
#[derive(PartialEq, Eq, Debug)]
pub struct PendingMove {
    pub(crate) move_id: u64,
}

#[derive(Debug)]
pub struct MoveResult {
    pub moves: Vec<TileMove>,
    /// First merge into the target value during this game.
    pub reached_target: Option<Cell>,
    pub pending: PendingMove,
}

impl MoveResult {
    pub fn merge_count(&self) -> usize {
        self.moves.iter().filter(|m| m.merged()).count()
    }
}

#[derive(Debug)]
pub enum MoveOutcome {
    /// A previous move has not been completed yet.
    Busy,
    Unchanged,
    Moved(MoveResult),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Completion {
    pub spawned: SpawnedTile,
    pub game_over: bool,
}

/// Both phases of a move run back to back.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Turn {
    pub moves: Vec<TileMove>,
    pub reached_target: Option<Cell>,
    pub spawned: SpawnedTile,
    pub game_over: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoardError {
    NoEmptyCell,
    UnexpectedCompletion,
    OutOfBounds(Cell),
    CellOccupied(Cell),
    InvalidTileValue(u32),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NoEmptyCell => write!(f, "No empty cell left to spawn a tile"),
            BoardError::UnexpectedCompletion => {
                write!(f, "Completion does not match the move in flight")
            }
            BoardError::OutOfBounds(cell) => write!(f, "Cell {} is outside the board", cell),
            BoardError::CellOccupied(cell) => write!(f, "Cell {} is already occupied", cell),
            BoardError::InvalidTileValue(value) => {
                write!(
                    f,
                    "Tile value must be a power of 2 between 2 and {}, got {}",
                    MAX_TILE_VALUE, value
                )
            }
        }
    }
}

impl std::error::Error for BoardError {}
