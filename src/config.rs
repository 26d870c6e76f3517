/// Tunable simulation parameters.
///
/// Everything that varied across the classic builds of this game (field
/// size, bullet lifetime, starting asteroid count, ...) is collected
/// here with one canonical set of defaults, so a variant is a field
/// change rather than a fork.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    /// Number of asteroids seeded at level start.
    pub fn initial_asteroids(&self) -> usize {
        match self {
            Level::Easy => 3,
            Level::Medium => 4,
            Level::Hard => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Play-field width in world units. Positions wrap at this bound.
    pub width: f64,
    /// Play-field height in world units.
    pub height: f64,
    /// Fixed bullet pool capacity (ring-buffer allocation).
    pub bullet_slots: usize,
    /// Fixed asteroid pool capacity.
    pub asteroid_slots: usize,
    /// Ticks a bullet survives before it expires on its own.
    pub bullet_lifetime: u32,
    /// Speed added on top of the ship's speed when a bullet is fired.
    pub bullet_boost: f64,
    /// Ship triangle scale; also the nose offset for bullet spawns.
    pub ship_size: f64,
    /// Per-tick pull of the ship's speed toward zero.
    pub ship_drag: f64,
    /// Thrust stops increasing the ship's speed at this magnitude.
    pub max_speed: f64,
    /// Degrees of rotation per tick while a turn key is held.
    pub turn_rate: f64,
    /// Live asteroids seeded at level start.
    pub initial_asteroids: usize,
    /// Radius of a freshly seeded asteroid.
    pub asteroid_size: f64,
    /// Speed of a freshly seeded asteroid.
    pub asteroid_speed: f64,
    /// An asteroid halved below this radius dies instead of splitting.
    pub min_asteroid_size: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 1600.0,
            height: 900.0,
            bullet_slots: 32,
            asteroid_slots: 32,
            bullet_lifetime: 60,
            bullet_boost: 10.0,
            ship_size: 40.0,
            ship_drag: 0.04,
            max_speed: 10.0,
            turn_rate: 10.0,
            initial_asteroids: 4,
            asteroid_size: 80.0,
            asteroid_speed: 5.0,
            min_asteroid_size: 20.0,
        }
    }
}

impl Config {
    /// Canonical config with the starting asteroid count set by difficulty.
    pub fn for_level(level: Level) -> Self {
        Config {
            initial_asteroids: level.initial_asteroids(),
            ..Config::default()
        }
    }
}
