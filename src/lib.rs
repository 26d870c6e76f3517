//! Simulation core for a terminal Asteroids clone.
//!
//! The library is pure: `compute` holds step functions that take the
//! current [`entities::GameState`] (plus an injected RNG) and return a
//! brand-new state, `entities` holds the data they operate on and
//! `config` the tunable constants. All terminal I/O lives in the
//! binary.

pub mod compute;
pub mod config;
pub mod entities;
