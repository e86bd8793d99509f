use common::games::SessionRng;
use common::games::puzzle2048::{Puzzle2048Session, Puzzle2048Settings};
use common::{log, log_debug};
use tokio::sync::mpsc;

use crate::state::{ClientCommand, SharedState};

use super::LocalBroadcaster;

/// Owns the game for the lifetime of the window. Ends when the UI drops its sender.
pub async fn local_game_task(
    settings: Puzzle2048Settings,
    seed: Option<u64>,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let rng = seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log!("Starting offline game, seed {}", rng.seed());

    let broadcaster = LocalBroadcaster::new(shared_state.clone());
    let mut session = Puzzle2048Session::from_settings(&settings, rng, broadcaster);
    session.start();

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::Move(direction) => {
                if session.handle_move(direction) {
                    log_debug!("Moved {:?}", direction);
                }
            }
            ClientCommand::AnimationFinished => {
                if let Err(e) = session.finish_animation() {
                    log!("Board state corrupted: {}", e);
                    shared_state.set_error(format!("Board state corrupted: {}", e));
                    break;
                }
            }
            ClientCommand::NewGame => session.start(),
        }
    }

    log!("Offline game finished after {} moves", session.moves_made());
}
