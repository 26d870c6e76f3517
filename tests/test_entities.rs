use asteroids::config::Config;
use asteroids::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::Lost);
    assert_ne!(GameStatus::Won, GameStatus::Lost);
    assert_eq!(GameEvent::BulletFired, GameEvent::BulletFired);
    assert_ne!(GameEvent::AsteroidSplit, GameEvent::AsteroidDestroyed);

    // Clone must produce an equal value
    let status = GameStatus::WaitingToStart;
    assert_eq!(status.clone(), GameStatus::WaitingToStart);
}

#[test]
fn default_pool_slots_are_dead() {
    assert!(!Bullet::default().alive);
    assert!(!Asteroid::default().alive);
    assert_eq!(Bullet::default().age, 0);
    assert_eq!(Asteroid::default().size, 0.0);
}

#[test]
fn default_input_is_idle() {
    let input = InputState::default();
    assert!(!input.left && !input.right && !input.thrust && !input.reverse);
}

#[test]
fn game_state_clone_is_independent() {
    let config = Config::default();
    let original = GameState {
        ship: Spaceship { x: 800.0, y: 450.0, size: 40.0, rot: 0.0, vel: 0.0 },
        bullets: vec![Bullet::default(); config.bullet_slots],
        bullet_cursor: 0,
        asteroids: vec![Asteroid::default(); config.asteroid_slots],
        asteroid_cursor: 0,
        status: GameStatus::Playing,
        events: Vec::new(),
        tick_count: 0,
        config,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.ship.x = 99.0;
    cloned.bullets[0].alive = true;
    cloned.asteroids[5].size = 80.0;
    cloned.events.push(GameEvent::BulletFired);

    assert_eq!(original.ship.x, 800.0);
    assert!(!original.bullets[0].alive);
    assert_eq!(original.asteroids[5].size, 0.0);
    assert!(original.events.is_empty());
}
