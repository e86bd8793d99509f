mod broadcaster;
mod local_game;

pub use broadcaster::LocalBroadcaster;
pub use local_game::local_game_task;
