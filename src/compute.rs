/// Pure simulation functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a
/// brand-new `GameState`. Side effects are limited to the injected RNG,
/// so a seeded RNG makes every run reproducible.

use rand::Rng;

use crate::config::Config;
use crate::entities::{
    Asteroid, Bullet, GameEvent, GameState, GameStatus, InputState, Spaceship,
};

// ── Angle & wrap helpers ─────────────────────────────────────────────────────

/// Unit vector for a heading given in degrees.
pub fn heading_vec(deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (rad.cos(), rad.sin())
}

/// Normalize a heading into [0, 360).
pub fn norm_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Toroidal wrap of a coordinate into [0, bound). Modulo semantics:
/// motion continues across the seam, never clamps against it.
pub fn wrap(coord: f64, bound: f64) -> f64 {
    coord.rem_euclid(bound)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: ship at the field centre, the starting
/// asteroids scattered at random positions that do not already touch
/// the ship, everything else dead.
pub fn init_state(config: Config, rng: &mut impl Rng) -> GameState {
    let ship = Spaceship {
        x: config.width / 2.0,
        y: config.height / 2.0,
        size: config.ship_size,
        rot: 0.0,
        vel: 0.0,
    };

    let bullets = vec![Bullet::default(); config.bullet_slots];
    let mut asteroids = vec![Asteroid::default(); config.asteroid_slots];

    for slot in asteroids.iter_mut().take(config.initial_asteroids) {
        slot.alive = true;
        slot.size = config.asteroid_size;
        slot.vel = config.asteroid_speed;
        slot.rot = rng.gen_range(0..360) as f64;
        // Rejection-sample a spawn point clear of the ship.
        loop {
            slot.x = rng.gen_range(0.0..config.width);
            slot.y = rng.gen_range(0.0..config.height);
            if !ship_hits_asteroid(&ship, slot) {
                break;
            }
        }
    }

    GameState {
        ship,
        bullets,
        bullet_cursor: 0,
        asteroids,
        asteroid_cursor: config.initial_asteroids % config.asteroid_slots,
        status: GameStatus::WaitingToStart,
        events: Vec::new(),
        tick_count: 0,
        config,
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

/// Leave the start screen. No-op in any other state.
pub fn start_game(state: &GameState) -> GameState {
    if state.status != GameStatus::WaitingToStart {
        return state.clone();
    }
    GameState {
        status: GameStatus::Playing,
        ..state.clone()
    }
}

/// Fire a bullet from the ship's nose.
///
/// The destination slot comes from the wrapping bullet cursor and is
/// overwritten regardless of liveness, so firing never fails — a full
/// pool just evicts the oldest-by-cursor bullet.
pub fn fire(state: &GameState) -> GameState {
    let (dx, dy) = heading_vec(state.ship.rot);
    let mut bullets = state.bullets.clone();
    bullets[state.bullet_cursor] = Bullet {
        alive: true,
        x: wrap(state.ship.x + dx * state.ship.size, state.config.width),
        y: wrap(state.ship.y + dy * state.ship.size, state.config.height),
        rot: state.ship.rot,
        vel: state.ship.vel + state.config.bullet_boost,
        age: 0,
    };
    let mut events = state.events.clone();
    events.push(GameEvent::BulletFired);
    GameState {
        bullets,
        bullet_cursor: (state.bullet_cursor + 1) % state.bullets.len(),
        events,
        ..state.clone()
    }
}

// ── Collision detection ──────────────────────────────────────────────────────

/// Strict point-in-circle test. Dead asteroids never collide; a point
/// exactly on the rim (distance == size) does not collide.
pub fn point_in_asteroid(x: f64, y: f64, asteroid: &Asteroid) -> bool {
    asteroid.alive && (x - asteroid.x).hypot(y - asteroid.y) < asteroid.size
}

/// The ship's three triangle vertices in world space, derived fresh on
/// every call: nose at `size` along the heading, the two rear corners
/// 120° either side at `size / 2`.
pub fn ship_vertices(ship: &Spaceship) -> [(f64, f64); 3] {
    let nose = heading_vec(ship.rot);
    let rear_a = heading_vec(ship.rot + 120.0);
    let rear_b = heading_vec(ship.rot + 240.0);
    let half = ship.size / 2.0;
    [
        (ship.x + nose.0 * ship.size, ship.y + nose.1 * ship.size),
        (ship.x + rear_a.0 * half, ship.y + rear_a.1 * half),
        (ship.x + rear_b.0 * half, ship.y + rear_b.1 * half),
    ]
}

/// Vertex-only hull test: the ship collides if any of its three
/// corners lies inside the asteroid's circle. A circle that overlaps
/// the hull between two corners goes undetected — that approximation
/// is part of the game's behaviour and is kept as-is.
pub fn ship_hits_asteroid(ship: &Spaceship, asteroid: &Asteroid) -> bool {
    ship_vertices(ship)
        .iter()
        .any(|&(x, y)| point_in_asteroid(x, y, asteroid))
}

// ── Asteroid splitting ───────────────────────────────────────────────────────

/// Halve `src`. Below the minimum size it dies outright and `dst` is
/// left untouched. Otherwise `dst` is unconditionally overwritten with
/// a fragment carrying the halved size, position and speed, and the two
/// fragments diverge: a random integer offset d in [10, 59] is drawn,
/// the fragment turns to heading − d and the source to heading + d.
///
/// The wrapping cursor can hand us `dst == src`; then there is no
/// second fragment and the source just keeps its halved size.
fn split_asteroid(
    asteroids: &mut [Asteroid],
    src: usize,
    dst: usize,
    min_size: f64,
    rng: &mut impl Rng,
) -> GameEvent {
    asteroids[src].size /= 2.0;
    if asteroids[src].size < min_size {
        asteroids[src].alive = false;
        return GameEvent::AsteroidDestroyed;
    }
    let diff = rng.gen_range(10..60) as f64;
    if dst != src {
        asteroids[dst] = Asteroid {
            alive: true,
            rot: norm_deg(asteroids[src].rot - diff),
            ..asteroids[src]
        };
    }
    asteroids[src].rot = norm_deg(asteroids[src].rot + diff);
    GameEvent::AsteroidSplit
}

// ── Per-entity motion ────────────────────────────────────────────────────────

fn move_spaceship(ship: &mut Spaceship, config: &Config) {
    let (dx, dy) = heading_vec(ship.rot);
    ship.x = wrap(ship.x + dx * ship.vel, config.width);
    ship.y = wrap(ship.y + dy * ship.vel, config.height);
    // Linear drag: speed creeps toward zero but never crosses it.
    ship.vel = ship.vel.signum() * (ship.vel.abs() - config.ship_drag).max(0.0);
}

fn move_bullet(bullet: &mut Bullet, config: &Config) {
    if !bullet.alive {
        return;
    }
    bullet.age += 1;
    if bullet.age > config.bullet_lifetime {
        bullet.alive = false;
        return;
    }
    let (dx, dy) = heading_vec(bullet.rot);
    bullet.x = wrap(bullet.x + dx * bullet.vel, config.width);
    bullet.y = wrap(bullet.y + dy * bullet.vel, config.height);
}

fn move_asteroid(asteroid: &mut Asteroid, config: &Config) {
    if !asteroid.alive {
        return;
    }
    let (dx, dy) = heading_vec(asteroid.rot);
    asteroid.x = wrap(asteroid.x + dx * asteroid.vel, config.width);
    asteroid.y = wrap(asteroid.y + dy * asteroid.vel, config.height);
}

// ── Per-frame tick (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by one fixed step (implicit dt = 1).
///
/// Outside `Playing` this only clears the event list. In `Playing` the
/// order is: held input, then bullets (age, move, resolve hits), then
/// the ship, then asteroids (move, then hull check). A hull hit ends
/// the round on the spot — asteroids after the colliding one keep
/// their pre-tick positions. With no live asteroids left the round is
/// won.
pub fn tick(state: &GameState, input: &InputState, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Playing {
        return GameState {
            events: Vec::new(),
            ..state.clone()
        };
    }

    let config = state.config;
    let mut ship = state.ship;
    let mut bullets = state.bullets.clone();
    let mut asteroids = state.asteroids.clone();
    let mut asteroid_cursor = state.asteroid_cursor;
    let mut events = Vec::new();

    // ── 1. Held input → thrust and rotation ──────────────────────────────────
    if input.thrust && ship.vel < config.max_speed {
        ship.vel += 1.0;
    }
    if input.reverse && ship.vel > -config.max_speed {
        ship.vel -= 1.0;
    }
    if input.left {
        ship.rot = norm_deg(ship.rot - config.turn_rate);
    }
    if input.right {
        ship.rot = norm_deg(ship.rot + config.turn_rate);
    }

    // ── 2. Bullets: age, move, resolve hits ──────────────────────────────────
    // One bullet causes at most one split. The same asteroid may still
    // be hit again by a later bullet in this same scan.
    for bullet in bullets.iter_mut() {
        move_bullet(bullet, &config);
        if !bullet.alive {
            continue;
        }
        for target in 0..asteroids.len() {
            if point_in_asteroid(bullet.x, bullet.y, &asteroids[target]) {
                asteroid_cursor = (asteroid_cursor + 1) % asteroids.len();
                events.push(split_asteroid(
                    &mut asteroids,
                    target,
                    asteroid_cursor,
                    config.min_asteroid_size,
                    rng,
                ));
                bullet.alive = false;
                break;
            }
        }
    }

    // ── 3. Ship motion ───────────────────────────────────────────────────────
    move_spaceship(&mut ship, &config);

    // ── 4. Asteroid motion + hull check ──────────────────────────────────────
    let mut status = GameStatus::Playing;
    for asteroid in asteroids.iter_mut() {
        move_asteroid(asteroid, &config);
        if ship_hits_asteroid(&ship, asteroid) {
            status = GameStatus::Lost;
            break;
        }
    }

    // ── 5. Win check ─────────────────────────────────────────────────────────
    if status == GameStatus::Playing && asteroids.iter().all(|a| !a.alive) {
        status = GameStatus::Won;
    }

    GameState {
        ship,
        bullets,
        asteroids,
        asteroid_cursor,
        status,
        events,
        tick_count: state.tick_count + 1,
        ..state.clone()
    }
}
