/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state. No game logic is performed; this module only scales
/// world coordinates onto the character grid and translates state into
/// terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use asteroids::compute::{heading_vec, ship_vertices};
use asteroids::entities::{Asteroid, GameState, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SHIP: Color = Color::White;
const C_BULLET: Color = Color::Cyan;
const C_ASTEROID: Color = Color::Grey;
const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_PROMPT: Color = Color::White;
const C_WON: Color = Color::Green;
const C_LOST: Color = Color::Red;

/// Degrees between sampled points of an asteroid's outline.
const OUTLINE_STEP: usize = 20;

// ── World → grid mapping ──────────────────────────────────────────────────────

/// Map a (wrapped) world position onto the character grid. Row 0 is
/// reserved for the HUD; the field occupies everything below it.
fn to_cell(state: &GameState, cols: u16, rows: u16, x: f64, y: f64) -> (u16, u16) {
    let field_rows = rows.saturating_sub(1).max(1);
    let cx = (x / state.config.width * f64::from(cols)) as u16;
    let cy = (y / state.config.height * f64::from(field_rows)) as u16;
    (cx.min(cols.saturating_sub(1)), 1 + cy.min(field_rows - 1))
}

fn plot<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
    x: f64,
    y: f64,
    glyph: &str,
) -> std::io::Result<()> {
    let (cx, cy) = to_cell(state, cols, rows, x, y);
    out.queue(cursor::MoveTo(cx, cy))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state, cols)?;

    out.queue(style::SetForegroundColor(C_ASTEROID))?;
    for asteroid in &state.asteroids {
        draw_asteroid(out, state, cols, rows, asteroid)?;
    }

    out.queue(style::SetForegroundColor(C_BULLET))?;
    for bullet in state.bullets.iter().filter(|b| b.alive) {
        plot(out, state, cols, rows, bullet.x, bullet.y, "•")?;
    }

    draw_ship(out, state, cols, rows)?;
    draw_overlay(out, state, cols, rows)?;
    draw_controls_hint(out, rows)?;

    // One bell covers however many cues the tick produced.
    if !state.events.is_empty() {
        out.queue(Print("\u{0007}"))?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, cols: u16) -> std::io::Result<()> {
    let rocks = state.asteroids.iter().filter(|a| a.alive).count();
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Rocks:{:>3}", rocks)))?;

    let speed_str = format!("Speed:{:>5.1}", state.ship.vel);
    let rx = cols.saturating_sub(speed_str.len() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(speed_str))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_SHIP))?;
    let [nose, rear_a, rear_b] = ship_vertices(&state.ship);
    plot(out, state, cols, rows, rear_a.0, rear_a.1, "▪")?;
    plot(out, state, cols, rows, rear_b.0, rear_b.1, "▪")?;
    plot(out, state, cols, rows, nose.0, nose.1, "▲")?;
    Ok(())
}

/// Sample the circle's rim and plot each point, wrapped so an asteroid
/// straddling the seam shows up on both sides.
fn draw_asteroid<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
    asteroid: &Asteroid,
) -> std::io::Result<()> {
    if !asteroid.alive {
        return Ok(());
    }
    for deg in (0..360).step_by(OUTLINE_STEP) {
        let (dx, dy) = heading_vec(deg as f64);
        let x = (asteroid.x + dx * asteroid.size).rem_euclid(state.config.width);
        let y = (asteroid.y + dy * asteroid.size).rem_euclid(state.config.height);
        plot(out, state, cols, rows, x, y, "o")?;
    }
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    msg: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (cols / 2).saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, rows / 2))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(msg))?;
    Ok(())
}

fn draw_overlay<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    match state.status {
        GameStatus::WaitingToStart => {
            draw_centered(out, cols, rows, "Press SPACE to start", C_PROMPT)
        }
        GameStatus::Won => {
            draw_centered(out, cols, rows, "You won. You'll make your mom proud", C_WON)?;
            draw_hint_row(out, cols, rows)
        }
        GameStatus::Lost => {
            draw_centered(out, cols, rows, "You crashed, lol", C_LOST)?;
            draw_hint_row(out, cols, rows)
        }
        GameStatus::Playing => Ok(()),
    }
}

fn draw_hint_row<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let hint = "R - Play Again  Q - Quit";
    let col = (cols / 2).saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, rows / 2 + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → : Rotate   ↑ ↓ : Thrust   SPACE : Fire   Q : Quit"))?;
    Ok(())
}
