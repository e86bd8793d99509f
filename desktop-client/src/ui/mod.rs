mod app;
mod board_view;
mod input;

pub use app::Tiles2048App;
