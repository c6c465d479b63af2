//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::level::Level;
use crate::consts::{FPS_WINDOW, SQUARE_START_SIZE};
use crate::tuning::Tuning;

/// 24-bit fill color with a CSS hex form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS hex string, e.g. "#ff8080"
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Fill colors squares cycle through at spawn
pub const BASE_COLORS: [Rgb; 4] = [
    Rgb(0xff, 0x80, 0x80),
    Rgb(0x80, 0xc0, 0xff),
    Rgb(0xa0, 0xe0, 0x80),
    Rgb(0xe0, 0xa0, 0xff),
];

/// Applied to every square on pointer release
pub const PRESSED_COLOR: Rgb = Rgb(0xff, 0x00, 0x00);

/// Applied to every square when the pointer leaves the canvas
pub const FADED_COLOR: Rgb = Rgb(0xce, 0xce, 0xce);

/// Drawn instead of the square's own color while it overlaps another
pub const CONTACT_COLOR: Rgb = Rgb(0xff, 0xff, 0x00);

/// A bouncing square entity
#[derive(Debug, Clone)]
pub struct Square {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Edge lengths; shrinks geometrically on clicks, never reaches zero
    pub size: Vec2,
    /// Velocity in px/s
    pub vel: Vec2,
    /// Current fill color
    pub color: Rgb,
    /// Times this square has been clicked
    pub score: u32,
    /// Set while overlapping another square this frame
    pub contact: bool,
}

impl Square {
    pub fn new(id: u32, color: Rgb) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            size: Vec2::splat(SQUARE_START_SIZE),
            vel: Vec2::ZERO,
            color,
            score: 0,
            contact: false,
        }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Half-open hit test used for click credit
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.right()
            && point.y >= self.pos.y
            && point.y < self.bottom()
    }

    /// Throw the square to a fresh position and velocity inside the level
    ///
    /// Spawn positions are floored to whole pixels, top-left kept inside
    /// the bounds.
    pub fn randomize(&mut self, level: &Level, tuning: &Tuning, rng: &mut Pcg32) {
        self.vel = Vec2::new(
            rng.random_range(-1.0..1.0) * tuning.max_launch_speed.x,
            rng.random_range(-1.0..1.0) * tuning.max_launch_speed.y,
        );
        self.pos = Vec2::new(
            (level.x + rng.random_range(0.0..1.0) * (level.width - self.size.x)).floor(),
            (level.y + rng.random_range(0.0..1.0) * (level.height - self.size.y)).floor(),
        );
    }

    /// Shrink on click; the factor is < 1
    pub fn shrink(&mut self, factor: f32) {
        self.size *= factor;
    }
}

/// Frames-per-second readout over a windowed accumulator
#[derive(Debug, Clone, Copy, Default)]
pub struct FpsCounter {
    accumulator: f32,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    /// Fold one frame delta into the accumulator
    ///
    /// The readout refreshes once more than `FPS_WINDOW` worth of time has
    /// accumulated; the window is checked before the current frame counts.
    pub fn update(&mut self, dt: f32) {
        if self.accumulator > FPS_WINDOW {
            self.fps = (self.frames as f32 / self.accumulator).round() as u32;
            self.accumulator = 0.0;
            self.frames = 0;
        }
        self.accumulator += dt;
        self.frames += 1;
    }

    /// Most recent readout
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// All randomness flows through this
    pub(crate) rng: Pcg32,
    /// Balance values
    pub tuning: Tuning,
    /// Playable area
    pub level: Level,
    /// The squares (stable order by id)
    pub squares: Vec<Square>,
    /// Aggregate click score across all squares
    pub score: u64,
    /// Frame counter
    pub time_ticks: u64,
    /// FPS readout state
    pub fps: FpsCounter,
}

impl GameState {
    /// Create a game state with `tuning.square_count` squares randomized
    /// inside the level
    pub fn new(seed: u64, level: Level, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut squares = Vec::with_capacity(tuning.square_count);
        for i in 0..tuning.square_count {
            let mut square = Square::new(i as u32 + 1, BASE_COLORS[i % BASE_COLORS.len()]);
            square.randomize(&level, &tuning, &mut rng);
            squares.push(square);
        }

        Self {
            seed,
            rng,
            tuning,
            level,
            squares,
            score: 0,
            time_ticks: 0,
            fps: FpsCounter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_level() -> Level {
        Level::from_canvas(600.0, 400.0)
    }

    #[test]
    fn test_new_spawns_squares_in_bounds() {
        let state = GameState::new(12345, test_level(), Tuning::default());
        assert_eq!(state.squares.len(), 4);
        for (i, square) in state.squares.iter().enumerate() {
            assert_eq!(square.id, i as u32 + 1);
            assert!(square.pos.x >= state.level.x);
            assert!(square.right() <= state.level.right());
            assert!(square.pos.y >= state.level.y);
            assert!(square.bottom() <= state.level.bottom());
        }
    }

    #[test]
    fn test_randomize_whole_pixel_positions() {
        let level = test_level();
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut square = Square::new(1, BASE_COLORS[0]);

        for _ in 0..100 {
            square.randomize(&level, &tuning, &mut rng);
            assert_eq!(square.pos.x.fract(), 0.0);
            assert_eq!(square.pos.y.fract(), 0.0);
            assert!(square.pos.x >= level.x && square.right() <= level.right());
            assert!(square.pos.y >= level.y && square.bottom() <= level.bottom());
            assert!(square.vel.x.abs() <= tuning.max_launch_speed.x);
            assert!(square.vel.y.abs() <= tuning.max_launch_speed.y);
        }
    }

    #[test]
    fn test_shrink_strictly_decreases() {
        let mut square = Square::new(1, BASE_COLORS[0]);
        let before = square.size;
        square.shrink(0.95);
        assert!(square.size.x < before.x);
        assert!(square.size.y < before.y);
        assert!(square.size.x > 0.0 && square.size.y > 0.0);
    }

    #[test]
    fn test_contains_half_open() {
        let mut square = Square::new(1, BASE_COLORS[0]);
        square.pos = Vec2::new(10.0, 20.0);
        square.size = Vec2::splat(80.0);

        assert!(square.contains(Vec2::new(10.0, 20.0)));
        assert!(square.contains(Vec2::new(89.9, 99.9)));
        // Far edges are exclusive
        assert!(!square.contains(Vec2::new(90.0, 50.0)));
        assert!(!square.contains(Vec2::new(50.0, 100.0)));
        assert!(!square.contains(Vec2::new(9.9, 50.0)));
    }

    #[test]
    fn test_fps_counter_refreshes_after_window() {
        let mut fps = FpsCounter::default();

        // Three frames accumulate 0.3s but the readout only refreshes on
        // the next update after the window is exceeded
        fps.update(0.1);
        fps.update(0.1);
        fps.update(0.1);
        assert_eq!(fps.fps(), 0);

        fps.update(0.1);
        assert_eq!(fps.fps(), 10);

        // Accumulator was reset before folding the fourth frame
        assert!((fps.accumulator - 0.1).abs() < 1e-6);
        assert_eq!(fps.frames, 1);
    }

    #[test]
    fn test_rgb_to_css() {
        assert_eq!(Rgb(0xff, 0x80, 0x80).to_css(), "#ff8080");
        assert_eq!(Rgb(0, 0, 0).to_css(), "#000000");
    }
}
