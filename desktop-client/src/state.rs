use common::games::puzzle2048::{BoardEvent, Direction};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Move(Direction),
    /// The slide animation of the last move is over; the game may spawn.
    AnimationFinished,
    NewGame,
}

/// Hand-off point between the game task and the UI thread.
///
/// The game task only pushes events, the UI only drains them. Neither side
/// sees the other's board.
pub struct SharedState {
    events: Arc<Mutex<VecDeque<BoardEvent>>>,
    error: Arc<Mutex<Option<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::new())),
            error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn push_event(&self, event: BoardEvent) {
        self.events.lock().unwrap().push_back(event);
    }

    pub fn drain_events(&self) -> Vec<BoardEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap() = Some(error);
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
            error: Arc::clone(&self.error),
        }
    }
}
