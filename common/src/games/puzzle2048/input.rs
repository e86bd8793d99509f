use super::types::Direction;

pub const DEFAULT_SWIPE_MIN_DISTANCE: f32 = 20.0;

impl Direction {
    /// Accepts only the four axis-aligned unit vectors.
    pub fn from_vector(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, 1) => Some(Direction::Up),
            (0, -1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    /// Arrow keys (with or without the `arrow` prefix) and WASD, case-insensitive.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "up" | "arrowup" | "w" => Some(Direction::Up),
            "down" | "arrowdown" | "s" => Some(Direction::Down),
            "left" | "arrowleft" | "a" => Some(Direction::Left),
            "right" | "arrowright" | "d" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Turns a drag gesture into a direction.
///
/// Coordinates use the board convention: y grows upward. Callers working in
/// screen space must flip y before asking.
#[derive(Clone, Copy, Debug)]
pub struct SwipeAdapter {
    min_distance: f32,
}

impl SwipeAdapter {
    pub fn new(min_distance: f32) -> Self {
        Self { min_distance }
    }

    pub fn direction(&self, start: (f32, f32), end: (f32, f32)) -> Option<Direction> {
        let dx = end.0 - start.0;
        let dy = end.1 - start.1;
        if dx.hypot(dy) < self.min_distance {
            return None;
        }

        // Snap to the dominant axis; a perfect diagonal counts as vertical.
        let (ux, uy) = if dx.abs() > dy.abs() {
            (dx.signum() as i32, 0)
        } else {
            (0, dy.signum() as i32)
        };
        Direction::from_vector(ux, uy)
    }
}

impl Default for SwipeAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_MIN_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vector_accepts_unit_vectors_only() {
        assert_eq!(Direction::from_vector(0, 1), Some(Direction::Up));
        assert_eq!(Direction::from_vector(1, 0), Some(Direction::Right));
        assert_eq!(Direction::from_vector(1, 1), None);
        assert_eq!(Direction::from_vector(0, 0), None);
        assert_eq!(Direction::from_vector(2, 0), None);
    }

    #[test]
    fn test_vector_round_trips_for_every_direction() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.vector();
            assert_eq!(Direction::from_vector(dx as i32, dy as i32), Some(direction));
        }
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Direction::from_key_name("Up"), Some(Direction::Up));
        assert_eq!(Direction::from_key_name("a"), Some(Direction::Left));
        assert_eq!(Direction::from_key_name("D"), Some(Direction::Right));
        assert_eq!(Direction::from_key_name("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key_name("space"), None);
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let adapter = SwipeAdapter::default();
        assert_eq!(adapter.direction((0.0, 0.0), (10.0, 12.0)), None);
    }

    #[test]
    fn test_swipe_snaps_to_dominant_axis() {
        let adapter = SwipeAdapter::default();
        assert_eq!(adapter.direction((0.0, 0.0), (50.0, 10.0)), Some(Direction::Right));
        assert_eq!(adapter.direction((0.0, 0.0), (-50.0, 49.0)), Some(Direction::Left));
        assert_eq!(adapter.direction((10.0, 10.0), (0.0, -40.0)), Some(Direction::Down));
        assert_eq!(adapter.direction((0.0, 0.0), (30.0, 30.0)), Some(Direction::Up));
    }

    #[test]
    fn test_custom_threshold() {
        let adapter = SwipeAdapter::new(100.0);
        assert_eq!(adapter.direction((0.0, 0.0), (60.0, 0.0)), None);
        assert_eq!(adapter.direction((0.0, 0.0), (0.0, 120.0)), Some(Direction::Up));
    }
}
