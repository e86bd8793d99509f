use common::games::puzzle2048::{BoardEvent, Puzzle2048Broadcaster};
use crate::state::SharedState;

pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl Puzzle2048Broadcaster for LocalBroadcaster {
    fn broadcast(&mut self, event: BoardEvent) {
        self.shared_state.push_event(event);
    }
}
