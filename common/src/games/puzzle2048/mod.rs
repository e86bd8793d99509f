mod board;
mod input;
mod session;
mod settings;
mod types;

pub use board::{Board, SpawnSource};
pub use input::{DEFAULT_SWIPE_MIN_DISTANCE, SwipeAdapter};
pub use session::{BoardEvent, Puzzle2048Broadcaster, Puzzle2048Session};
pub use settings::Puzzle2048Settings;
pub use types::{
    BOARD_SIZE, BoardError, CELL_COUNT, Cell, Completion, DEFAULT_TARGET_VALUE, Direction,
    GameStatus, MAX_TILE_VALUE, MoveOutcome, MoveResult, PendingMove, SPAWN_VALUE, SpawnedTile,
    TileMove, Turn, all_cells,
};
