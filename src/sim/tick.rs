//! Per-frame simulation step
//!
//! `update` is the single entry point a host calls once per frame.

use glam::Vec2;
use rand::Rng;

use super::collision::{crossed_goal, hits_paddle, hits_wall};
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game by one frame (no-op while paused)
pub fn update(state: &mut GameState) {
    state.events.clear();

    if state.is_paused() {
        return;
    }

    move_paddles(state);
    move_ball(state);
    state.frame += 1;
}

/// Apply each paddle's velocity and keep it on the surface
pub fn move_paddles(state: &mut GameState) {
    let height = state.surface.y;
    for paddle in [&mut state.left, &mut state.right] {
        paddle.pos.y += paddle.dy;
        paddle.pos.y = paddle.pos.y.min(height - paddle.size.y).max(0.0);
    }
}

/// Move the ball, then handle walls, paddles and goals in that order
pub fn move_ball(state: &mut GameState) {
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // No positional correction: the ball may sit past the edge for a frame
    if hits_wall(ball, state.surface.y) {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::WallBounce);
        log::debug!("Wall bounce at ({:.1}, {:.1})", ball.pos.x, ball.pos.y);
    }

    // A single flip even if both paddles report a hit
    if hits_paddle(ball, &state.left) || hits_paddle(ball, &state.right) {
        ball.vel.x = -ball.vel.x;
        state.events.push(GameEvent::PaddleHit);
        log::debug!("Paddle hit at ({:.1}, {:.1})", ball.pos.x, ball.pos.y);
    }

    if let Some(goal) = crossed_goal(ball, state.surface.x) {
        let scorer = goal.opponent();
        state.paddle_mut(scorer).score += 1;
        state.events.push(GameEvent::Scored(scorer));
        let (p1, p2) = state.scores();
        log::info!("Player {} scores ({p1} - {p2})", scorer.player_number());
        reset_ball(state);
    }
}

/// Center the ball and serve it in a random diagonal direction
pub fn reset_ball(state: &mut GameState) {
    let speed = state.ball.speed;
    let sx = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let sy = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };

    state.ball.pos = state.center();
    state.ball.vel = Vec2::new(sx * speed, sy * speed);
}

/// Zero both scores and re-serve
pub fn reset_game(state: &mut GameState) {
    state.left.score = 0;
    state.right.score = 0;
    reset_ball(state);
    log::info!("Game reset");
}

/// Flip between running and paused, returning the new phase
pub fn toggle_pause(state: &mut GameState) -> GamePhase {
    state.phase = match state.phase {
        GamePhase::Running => GamePhase::Paused,
        GamePhase::Paused => GamePhase::Running,
    };
    log::info!("Game {:?}", state.phase);
    state.phase
}
