use common::games::puzzle2048::{Direction, SwipeAdapter};
use eframe::egui;

pub fn direction_for_key(key: egui::Key) -> Option<Direction> {
    Direction::from_key_name(key.name())
}

/// Collects keyboard presses and mouse/touch drags into directions.
pub struct InputTracker {
    swipe: SwipeAdapter,
    drag_start: Option<egui::Pos2>,
}

impl InputTracker {
    pub fn new(swipe_min_distance: f32) -> Self {
        Self {
            swipe: SwipeAdapter::new(swipe_min_distance),
            drag_start: None,
        }
    }

    pub fn poll(&mut self, ctx: &egui::Context) -> Option<Direction> {
        ctx.input(|i| {
            let pressed = i.events.iter().find_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => direction_for_key(*key),
                _ => None,
            });
            let released = i.pointer.any_released();
            let swiped = self.track_pointer(
                i.pointer.interact_pos().filter(|_| i.pointer.any_pressed()),
                i.pointer.latest_pos().filter(|_| released),
                released,
            );
            pressed.or(swiped)
        })
    }

    /// Feeds one frame of pointer state. A release always ends the drag.
    fn track_pointer(
        &mut self,
        pressed_at: Option<egui::Pos2>,
        released_at: Option<egui::Pos2>,
        released: bool,
    ) -> Option<Direction> {
        if pressed_at.is_some() {
            self.drag_start = pressed_at;
        }
        if !released {
            return None;
        }
        let start = self.drag_start.take()?;
        self.swipe_direction(start, released_at?)
    }

    fn swipe_direction(&self, start: egui::Pos2, end: egui::Pos2) -> Option<Direction> {
        // Screen y points down; the board's points up.
        self.swipe.direction((start.x, -start.y), (end.x, -end.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_map_to_directions() {
        assert_eq!(direction_for_key(egui::Key::ArrowUp), Some(Direction::Up));
        assert_eq!(direction_for_key(egui::Key::S), Some(Direction::Down));
        assert_eq!(direction_for_key(egui::Key::A), Some(Direction::Left));
        assert_eq!(direction_for_key(egui::Key::ArrowRight), Some(Direction::Right));
        assert_eq!(direction_for_key(egui::Key::Space), None);
    }

    #[test]
    fn test_release_always_clears_drag_start() {
        let mut tracker = InputTracker::new(20.0);
        assert_eq!(tracker.track_pointer(Some(egui::pos2(0.0, 0.0)), None, false), None);
        assert_eq!(
            tracker.track_pointer(None, Some(egui::pos2(100.0, 0.0)), true),
            Some(Direction::Right)
        );
        // A release with no press in between must not reuse the old start.
        assert_eq!(tracker.track_pointer(None, Some(egui::pos2(200.0, 0.0)), true), None);
    }

    #[test]
    fn test_screen_swipe_is_flipped_to_board_space() {
        let tracker = InputTracker::new(20.0);
        let up_on_screen = tracker.swipe_direction(egui::pos2(100.0, 200.0), egui::pos2(105.0, 120.0));
        assert_eq!(up_on_screen, Some(Direction::Up));
        let right = tracker.swipe_direction(egui::pos2(10.0, 10.0), egui::pos2(80.0, 30.0));
        assert_eq!(right, Some(Direction::Right));
        let tap = tracker.swipe_direction(egui::pos2(10.0, 10.0), egui::pos2(12.0, 11.0));
        assert_eq!(tap, None);
    }
}
