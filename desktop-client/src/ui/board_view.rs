use common::games::puzzle2048::{BOARD_SIZE, BoardEvent, Cell, TileMove};
use eframe::egui;
use std::time::{Duration, Instant};

const SPACING_RATIO: f32 = 0.03;

type Grid = [[Option<u32>; BOARD_SIZE]; BOARD_SIZE];

/// The UI's copy of the board, rebuilt purely from broadcast events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileGrid {
    cells: Grid,
    won: bool,
    game_over: Option<u32>,
}

impl TileGrid {
    pub fn apply(&mut self, event: &BoardEvent) {
        match event {
            BoardEvent::Reset => *self = Self::default(),
            BoardEvent::TilesMoved(moves) => {
                // Replaying in resolution order never overwrites a tile that has yet to move.
                for tile_move in moves {
                    let Some(value) = self.cells[tile_move.from.x][tile_move.from.y].take() else {
                        continue;
                    };
                    self.cells[tile_move.to.x][tile_move.to.y] =
                        Some(tile_move.merged_value.unwrap_or(value));
                }
            }
            BoardEvent::Spawned(tile) => {
                self.cells[tile.cell.x][tile.cell.y] = Some(tile.number);
            }
            BoardEvent::Won { .. } => self.won = true,
            BoardEvent::GameOver { highest_tile } => self.game_over = Some(*highest_tile),
        }
    }

    pub fn value(&self, cell: Cell) -> Option<u32> {
        self.cells[cell.x][cell.y]
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn game_over(&self) -> Option<u32> {
        self.game_over
    }
}

struct SlideAnimation {
    started: Instant,
    before: Grid,
    moves: Vec<TileMove>,
}

pub struct BoardView {
    grid: TileGrid,
    animation: Option<SlideAnimation>,
    duration: Duration,
}

impl BoardView {
    pub fn new(duration: Duration) -> Self {
        Self {
            grid: TileGrid::default(),
            animation: None,
            duration,
        }
    }

    pub fn apply(&mut self, event: &BoardEvent, now: Instant) {
        if let BoardEvent::TilesMoved(moves) = event {
            self.animation = Some(SlideAnimation {
                started: now,
                before: self.grid.cells,
                moves: moves.clone(),
            });
        }
        if matches!(event, BoardEvent::Reset) {
            self.animation = None;
        }
        self.grid.apply(event);
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// True exactly once per animation, on the first frame after it ends.
    pub fn take_finished(&mut self, now: Instant) -> bool {
        let finished = self
            .animation
            .as_ref()
            .is_some_and(|animation| now.duration_since(animation.started) >= self.duration);
        if finished {
            self.animation = None;
        }
        finished
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn render(&self, ui: &mut egui::Ui, now: Instant) {
        let available = ui.available_size();
        let side = available.x.min(available.y).clamp(160.0, 600.0);
        let (board_rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
        let painter = ui.painter_at(board_rect);

        let spacing = side * SPACING_RATIO;
        let cell_size = (side - spacing * (BOARD_SIZE as f32 + 1.0)) / BOARD_SIZE as f32;

        // Board y grows upward, screen y grows downward.
        let cell_origin = |cell: Cell| {
            board_rect.min
                + egui::vec2(
                    spacing + cell.x as f32 * (cell_size + spacing),
                    spacing + (BOARD_SIZE - 1 - cell.y) as f32 * (cell_size + spacing),
                )
        };

        painter.rect_filled(board_rect, 8.0, egui::Color32::from_rgb(187, 173, 160));
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let rect = egui::Rect::from_min_size(
                    cell_origin(Cell::new(x, y)),
                    egui::vec2(cell_size, cell_size),
                );
                painter.rect_filled(rect, 6.0, tile_colors(0).0);
            }
        }

        match &self.animation {
            Some(animation) => {
                let t = (now.duration_since(animation.started).as_secs_f32()
                    / self.duration.as_secs_f32().max(f32::EPSILON))
                .min(1.0);

                for x in 0..BOARD_SIZE {
                    for y in 0..BOARD_SIZE {
                        let cell = Cell::new(x, y);
                        let moving = animation.moves.iter().any(|m| m.from == cell);
                        if let Some(value) = animation.before[x][y]
                            && !moving
                        {
                            draw_tile(&painter, cell_origin(cell), cell_size, value);
                        }
                    }
                }
                for tile_move in &animation.moves {
                    let Some(value) = animation.before[tile_move.from.x][tile_move.from.y] else {
                        continue;
                    };
                    let pos = cell_origin(tile_move.from).lerp(cell_origin(tile_move.to), t);
                    draw_tile(&painter, pos, cell_size, value);
                }
            }
            None => {
                for x in 0..BOARD_SIZE {
                    for y in 0..BOARD_SIZE {
                        let cell = Cell::new(x, y);
                        if let Some(value) = self.grid.value(cell) {
                            draw_tile(&painter, cell_origin(cell), cell_size, value);
                        }
                    }
                }
            }
        }
    }
}

fn draw_tile(painter: &egui::Painter, min: egui::Pos2, cell_size: f32, value: u32) {
    let (bg, text_color) = tile_colors(value);
    let rect = egui::Rect::from_min_size(min, egui::vec2(cell_size, cell_size));
    painter.rect_filled(rect, 6.0, bg);

    let font_size = if value >= 1000 {
        cell_size * 0.3
    } else if value >= 100 {
        cell_size * 0.38
    } else {
        cell_size * 0.5
    };
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        value.to_string(),
        egui::FontId::proportional(font_size),
        text_color,
    );
}

fn tile_colors(value: u32) -> (egui::Color32, egui::Color32) {
    let dark_text = egui::Color32::from_rgb(119, 110, 101);
    let light_text = egui::Color32::from_rgb(249, 246, 242);

    match value {
        0 => (egui::Color32::from_rgb(204, 192, 180), egui::Color32::TRANSPARENT),
        2 => (egui::Color32::from_rgb(238, 228, 218), dark_text),
        4 => (egui::Color32::from_rgb(237, 224, 200), dark_text),
        8 => (egui::Color32::from_rgb(242, 177, 121), light_text),
        16 => (egui::Color32::from_rgb(245, 149, 99), light_text),
        32 => (egui::Color32::from_rgb(246, 124, 95), light_text),
        64 => (egui::Color32::from_rgb(246, 94, 59), light_text),
        128 => (egui::Color32::from_rgb(237, 207, 114), light_text),
        256 => (egui::Color32::from_rgb(237, 204, 97), light_text),
        512 => (egui::Color32::from_rgb(237, 200, 80), light_text),
        1024 => (egui::Color32::from_rgb(237, 197, 63), light_text),
        2048 => (egui::Color32::from_rgb(237, 194, 46), light_text),
        _ => (egui::Color32::from_rgb(60, 58, 50), light_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::puzzle2048::SpawnedTile;

    fn spawned(x: usize, y: usize, number: u32) -> BoardEvent {
        BoardEvent::Spawned(SpawnedTile {
            cell: Cell::new(x, y),
            number,
        })
    }

    #[test]
    fn test_grid_replays_slides_and_merges() {
        let mut grid = TileGrid::default();
        for event in [spawned(0, 0, 2), spawned(1, 0, 2), spawned(2, 0, 2)] {
            grid.apply(&event);
        }

        grid.apply(&BoardEvent::TilesMoved(vec![
            TileMove {
                from: Cell::new(2, 0),
                to: Cell::new(3, 0),
                merged_value: None,
            },
            TileMove {
                from: Cell::new(1, 0),
                to: Cell::new(3, 0),
                merged_value: Some(4),
            },
            TileMove {
                from: Cell::new(0, 0),
                to: Cell::new(2, 0),
                merged_value: None,
            },
        ]));

        let row: Vec<Option<u32>> = (0..4).map(|x| grid.value(Cell::new(x, 0))).collect();
        assert_eq!(row, vec![None, None, Some(2), Some(4)]);
    }

    #[test]
    fn test_grid_tracks_flags_and_reset() {
        let mut grid = TileGrid::default();
        grid.apply(&spawned(1, 1, 2));
        grid.apply(&BoardEvent::Won {
            cell: Cell::new(1, 1),
            value: 2048,
        });
        grid.apply(&BoardEvent::GameOver { highest_tile: 2048 });
        assert!(grid.won());
        assert_eq!(grid.game_over(), Some(2048));

        grid.apply(&BoardEvent::Reset);
        assert_eq!(grid, TileGrid::default());
    }

    #[test]
    fn test_animation_finishes_once() {
        let mut view = BoardView::new(Duration::from_millis(250));
        let start = Instant::now();
        view.apply(&spawned(0, 0, 2), start);
        view.apply(
            &BoardEvent::TilesMoved(vec![TileMove {
                from: Cell::new(0, 0),
                to: Cell::new(3, 0),
                merged_value: None,
            }]),
            start,
        );

        assert!(view.is_animating());
        assert!(!view.take_finished(start + Duration::from_millis(100)));
        assert!(view.take_finished(start + Duration::from_millis(300)));
        assert!(!view.take_finished(start + Duration::from_millis(400)));
        assert_eq!(view.grid().value(Cell::new(3, 0)), Some(2));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut view = BoardView::new(Duration::ZERO);
        let now = Instant::now();
        view.apply(&BoardEvent::TilesMoved(vec![]), now);
        assert!(view.take_finished(now));
    }
}
