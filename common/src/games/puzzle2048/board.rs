use super::types::{
    BOARD_SIZE, BoardError, Cell, Completion, DEFAULT_TARGET_VALUE, Direction, GameStatus,
    MoveOutcome, MoveResult, PendingMove, SpawnedTile, Tile, TileMove, Turn, all_cells,
};
use crate::games::session_rng::SessionRng;

/// Chooses where a new tile lands.
pub trait SpawnSource {
    /// Returns an index in `0..candidates`. `candidates` is never zero.
    fn pick(&mut self, candidates: usize) -> usize;
}

/// The 4x4 grid and everything that may change it.
///
/// A state-changing move is split in two phases. `move_tiles` slides and merges
/// and leaves the board settling; `complete_move` spawns the new tile once the
/// caller is done presenting the move. Moves requested in between are ignored.
pub struct Board<R: SpawnSource = SessionRng> {
    cells: [[Option<Tile>; BOARD_SIZE]; BOARD_SIZE],
    spawn_source: R,
    target_value: u32,
    in_flight: Option<u64>,
    next_move_id: u64,
    won: bool,
    status: GameStatus,
}

impl Board<SessionRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SessionRng::new(seed), DEFAULT_TARGET_VALUE)
    }
}

impl<R: SpawnSource> Board<R> {
    /// Creates an empty board. Call `reset` to seed the two starting tiles.
    pub fn new(spawn_source: R, target_value: u32) -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            spawn_source,
            target_value,
            in_flight: None,
            next_move_id: 0,
            won: false,
            status: GameStatus::InProgress,
        }
    }

    pub fn reset(&mut self) -> Vec<SpawnedTile> {
        self.cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        self.in_flight = None;
        self.won = false;
        self.status = GameStatus::InProgress;

        let mut spawned = Vec::with_capacity(2);
        spawned.extend(self.spawn_into_empty());
        spawned.extend(self.spawn_into_empty());
        spawned
    }

    pub fn can_move(&self, x: isize, y: isize) -> bool {
        Cell::checked(x, y).is_some_and(|cell| self.get(cell).is_none())
    }

    pub fn can_merge(&self, x: isize, y: isize, number: u32) -> bool {
        Cell::checked(x, y)
            .and_then(|cell| self.get(cell))
            .is_some_and(|tile| tile.number() == number)
    }

    /// Full board with no equal pair among horizontal or vertical neighbours.
    pub fn is_deadlocked(&self) -> bool {
        for cell in all_cells(false, false) {
            let Some(tile) = self.get(cell) else {
                return false;
            };
            let (x, y) = (cell.x as isize, cell.y as isize);
            if self.can_merge(x + 1, y, tile.number()) || self.can_merge(x, y + 1, tile.number()) {
                return false;
            }
        }
        true
    }

    pub fn move_tiles(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_settling() {
            return MoveOutcome::Busy;
        }

        let (dx, dy) = direction.vector();
        let mut merged_this_move = [[false; BOARD_SIZE]; BOARD_SIZE];
        let mut moves = Vec::new();
        let mut reached_target = None;

        for origin in all_cells(dx > 0, dy > 0) {
            let Some(tile) = self.get(origin) else {
                continue;
            };

            let mut current = origin;
            while let Some(next) = current.step(direction)
                && self.can_move(next.x as isize, next.y as isize)
            {
                self.set(current, None);
                self.set(next, Some(tile));
                current = next;
            }

            let mut merged_value = None;
            if let Some(next) = current.step(direction)
                && !merged_this_move[next.x][next.y]
                && self.can_merge(next.x as isize, next.y as isize, tile.number())
                && let Some(merged) = tile.doubled()
            {
                self.set(current, None);
                self.set(next, Some(merged));
                merged_this_move[next.x][next.y] = true;
                current = next;
                merged_value = Some(merged.number());

                if merged.number() == self.target_value && !self.won {
                    self.won = true;
                    reached_target = Some(next);
                }
            }

            if current != origin {
                moves.push(TileMove {
                    from: origin,
                    to: current,
                    merged_value,
                });
            }
        }

        if moves.is_empty() {
            return MoveOutcome::Unchanged;
        }

        let move_id = self.next_move_id;
        self.next_move_id += 1;
        self.in_flight = Some(move_id);

        MoveOutcome::Moved(MoveResult {
            moves,
            reached_target,
            pending: PendingMove { move_id },
        })
    }

    /// Finishes the move in flight: spawns one tile and re-evaluates the game state.
    pub fn complete_move(&mut self, pending: PendingMove) -> Result<Completion, BoardError> {
        if self.in_flight != Some(pending.move_id) {
            return Err(BoardError::UnexpectedCompletion);
        }

        let spawned = self.spawn_tile()?;
        self.in_flight = None;

        let game_over = self.is_deadlocked();
        if game_over {
            self.status = GameStatus::Lost;
        }

        Ok(Completion { spawned, game_over })
    }

    /// Runs both phases of a move. Returns `None` when nothing moved.
    pub fn play(&mut self, direction: Direction) -> Result<Option<Turn>, BoardError> {
        let MoveOutcome::Moved(result) = self.move_tiles(direction) else {
            return Ok(None);
        };
        let completion = self.complete_move(result.pending)?;
        Ok(Some(Turn {
            moves: result.moves,
            reached_target: result.reached_target,
            spawned: completion.spawned,
            game_over: completion.game_over,
        }))
    }

    pub fn spawn_tile(&mut self) -> Result<SpawnedTile, BoardError> {
        self.spawn_into_empty().ok_or(BoardError::NoEmptyCell)
    }

    fn spawn_into_empty(&mut self) -> Option<SpawnedTile> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let cell = empty[self.spawn_source.pick(empty.len()) % empty.len()];
        let tile = Tile::spawned();
        self.set(cell, Some(tile));
        Some(SpawnedTile {
            cell,
            number: tile.number(),
        })
    }

    /// Puts a tile on an empty cell, bypassing move rules.
    pub fn place_tile(&mut self, cell: Cell, number: u32) -> Result<(), BoardError> {
        if !cell.is_valid() {
            return Err(BoardError::OutOfBounds(cell));
        }
        if self.get(cell).is_some() {
            return Err(BoardError::CellOccupied(cell));
        }
        let tile = Tile::new(number).ok_or(BoardError::InvalidTileValue(number))?;
        self.set(cell, Some(tile));
        Ok(())
    }

    pub fn tile_at(&self, cell: Cell) -> Option<u32> {
        if !cell.is_valid() {
            return None;
        }
        self.get(cell).map(Tile::number)
    }

    /// Copy of the grid values, indexed `[x][y]`.
    pub fn snapshot(&self) -> [[Option<u32>; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|column| column.map(|tile| tile.map(Tile::number)))
    }

    pub fn empty_cells(&self) -> Vec<Cell> {
        all_cells(false, false)
            .filter(|&cell| self.get(cell).is_none())
            .collect()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|tile| tile.is_some()).count()
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .map(|tile| tile.number())
            .max()
            .unwrap_or(0)
    }

    pub fn is_settling(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn target_value(&self) -> u32 {
        self.target_value
    }

    fn get(&self, cell: Cell) -> Option<Tile> {
        self.cells[cell.x][cell.y]
    }

    fn set(&mut self, cell: Cell, tile: Option<Tile>) {
        self.cells[cell.x][cell.y] = tile;
    }
}
