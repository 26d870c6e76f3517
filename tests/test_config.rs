use asteroids::config::{Config, Level};

#[test]
fn default_config_canonical_values() {
    let cfg = Config::default();
    assert_eq!(cfg.width, 1600.0);
    assert_eq!(cfg.height, 900.0);
    assert_eq!(cfg.bullet_slots, 32);
    assert_eq!(cfg.asteroid_slots, 32);
    assert_eq!(cfg.bullet_lifetime, 60);
    assert_eq!(cfg.bullet_boost, 10.0);
    assert_eq!(cfg.ship_size, 40.0);
    assert_eq!(cfg.ship_drag, 0.04);
    assert_eq!(cfg.max_speed, 10.0);
    assert_eq!(cfg.turn_rate, 10.0);
    assert_eq!(cfg.initial_asteroids, 4);
    assert_eq!(cfg.asteroid_size, 80.0);
    assert_eq!(cfg.asteroid_speed, 5.0);
    assert_eq!(cfg.min_asteroid_size, 20.0);
}

#[test]
fn level_sets_initial_asteroid_count() {
    assert_eq!(Config::for_level(Level::Easy).initial_asteroids, 3);
    assert_eq!(Config::for_level(Level::Medium).initial_asteroids, 4);
    assert_eq!(Config::for_level(Level::Hard).initial_asteroids, 6);
}

#[test]
fn level_leaves_other_fields_canonical() {
    let cfg = Config::for_level(Level::Hard);
    let base = Config::default();
    assert_eq!(cfg.width, base.width);
    assert_eq!(cfg.bullet_lifetime, base.bullet_lifetime);
    assert_eq!(cfg.min_asteroid_size, base.min_asteroid_size);
}
