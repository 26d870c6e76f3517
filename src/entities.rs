/// All game entity types — pure data, no logic.

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    /// World is seeded and rendered, waiting for the start key.
    WaitingToStart,
    Playing,
    Won,
    Lost,
}

/// Sound cues produced by a tick (or a fire action) — fire-and-forget,
/// consumed by the frontend and regenerated every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    BulletFired,
    /// An asteroid was hit and broke into two fragments.
    AsteroidSplit,
    /// An asteroid was hit and was already too small to split.
    AsteroidDestroyed,
}

/// Snapshot of the held directional keys, applied once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    pub reverse: bool,
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spaceship {
    pub x: f64,
    pub y: f64,
    /// Triangle scale: the nose sits this far from the centre.
    pub size: f64,
    /// Heading in degrees, kept in [0, 360).
    pub rot: f64,
    /// Signed scalar speed along the heading.
    pub vel: f64,
}

/// One slot of the fixed bullet pool. A dead slot is skipped by
/// movement, drawing and collision until the fire cursor reuses it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bullet {
    pub alive: bool,
    pub x: f64,
    pub y: f64,
    /// Heading in degrees, fixed at fire time.
    pub rot: f64,
    pub vel: f64,
    /// Ticks since fired.
    pub age: u32,
}

/// One slot of the fixed asteroid pool. `size` doubles as the
/// collision radius.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Asteroid {
    pub alive: bool,
    pub x: f64,
    pub y: f64,
    /// Heading in degrees, kept in [0, 360).
    pub rot: f64,
    pub vel: f64,
    pub size: f64,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation context. Cloneable so pure update functions
/// can return a new copy without mutating the original.
///
/// Both pools are fixed-length (`config.bullet_slots` /
/// `config.asteroid_slots`) and never resized; allocation is a wrapping
/// write cursor that unconditionally overwrites its slot.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub ship: Spaceship,
    pub bullets: Vec<Bullet>,
    /// Next bullet slot the fire action will overwrite.
    pub bullet_cursor: usize,
    pub asteroids: Vec<Asteroid>,
    /// Advanced (then used) whenever a split needs a fragment slot.
    pub asteroid_cursor: usize,
    pub status: GameStatus,
    /// Cues from the most recent tick/fire, cleared on the next tick.
    pub events: Vec<GameEvent>,
    pub tick_count: u64,
    pub config: Config,
}
