use super::board::{Board, SpawnSource};
use super::settings::Puzzle2048Settings;
use super::types::{
    BoardError, Cell, Completion, Direction, MoveOutcome, PendingMove, SpawnedTile, TileMove,
};
use crate::games::session_rng::SessionRng;
use crate::{log, log_debug};

/// What a front end needs to know to mirror and animate the board.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum BoardEvent {
    /// The grid was cleared; the starting tiles follow as `Spawned`.
    Reset,
    TilesMoved(Vec<TileMove>),
    Spawned(SpawnedTile),
    Won { cell: Cell, value: u32 },
    GameOver { highest_tile: u32 },
}

pub trait Puzzle2048Broadcaster {
    fn broadcast(&mut self, event: BoardEvent);
}

impl Puzzle2048Broadcaster for Vec<BoardEvent> {
    fn broadcast(&mut self, event: BoardEvent) {
        self.push(event);
    }
}

/// Drives a board for a front end that animates moves before completing them.
pub struct Puzzle2048Session<B: Puzzle2048Broadcaster, R: SpawnSource = SessionRng> {
    board: Board<R>,
    broadcaster: B,
    pending: Option<PendingMove>,
    moves_made: u32,
}

impl<B: Puzzle2048Broadcaster> Puzzle2048Session<B, SessionRng> {
    pub fn from_settings(settings: &Puzzle2048Settings, rng: SessionRng, broadcaster: B) -> Self {
        log_debug!("Creating 2048 session with seed {}", rng.seed());
        Self::new(Board::new(rng, settings.target_value), broadcaster)
    }
}

impl<B: Puzzle2048Broadcaster, R: SpawnSource> Puzzle2048Session<B, R> {
    pub fn new(board: Board<R>, broadcaster: B) -> Self {
        Self {
            board,
            broadcaster,
            pending: None,
            moves_made: 0,
        }
    }

    pub fn start(&mut self) {
        self.pending = None;
        self.moves_made = 0;
        let spawned = self.board.reset();

        self.broadcaster.broadcast(BoardEvent::Reset);
        for tile in spawned {
            self.broadcaster.broadcast(BoardEvent::Spawned(tile));
        }
        log!("New game started");
    }

    /// Returns whether any tile moved. Moves during an animation are dropped.
    pub fn handle_move(&mut self, direction: Direction) -> bool {
        let result = match self.board.move_tiles(direction) {
            MoveOutcome::Moved(result) => result,
            MoveOutcome::Busy => {
                log_debug!("Ignoring {:?}, previous move still settling", direction);
                return false;
            }
            MoveOutcome::Unchanged => return false,
        };

        self.moves_made += 1;
        self.pending = Some(result.pending);
        self.broadcaster.broadcast(BoardEvent::TilesMoved(result.moves));

        if let Some(cell) = result.reached_target {
            let value = self.board.target_value();
            log!("Reached {} at {} after {} moves", value, cell, self.moves_made);
            self.broadcaster.broadcast(BoardEvent::Won { cell, value });
        }
        true
    }

    /// Completion callback for the move in flight, if any.
    pub fn finish_animation(&mut self) -> Result<Option<Completion>, BoardError> {
        let Some(pending) = self.pending.take() else {
            return Ok(None);
        };

        let completion = self.board.complete_move(pending)?;
        self.broadcaster.broadcast(BoardEvent::Spawned(completion.spawned));

        if completion.game_over {
            let highest_tile = self.board.highest_tile();
            log!(
                "Game over (board is deadlocked), highest tile {} after {} moves",
                highest_tile,
                self.moves_made
            );
            self.broadcaster.broadcast(BoardEvent::GameOver { highest_tile });
        }
        Ok(Some(completion))
    }

    pub fn is_busy(&self) -> bool {
        self.board.is_settling()
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn board(&self) -> &Board<R> {
        &self.board
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut B {
        &mut self.broadcaster
    }
}
