//! Axis-aligned collision tests
//!
//! Plain box checks against the ball's extent. None of these reposition the
//! ball; callers only flip velocity signs.

use super::state::{Ball, Paddle, Side};

/// Ball's vertical extent is past the top or bottom edge
pub fn hits_wall(ball: &Ball, surface_height: f32) -> bool {
    ball.pos.y + ball.radius > surface_height || ball.pos.y - ball.radius < 0.0
}

/// Ball's horizontal edge has crossed the paddle's near face
pub fn past_width(ball: &Ball, paddle: &Paddle) -> bool {
    match paddle.side {
        Side::Left => ball.pos.x - ball.radius < paddle.right(),
        Side::Right => ball.pos.x + ball.radius > paddle.left(),
    }
}

/// Ball's center is strictly between the paddle's top and bottom
pub fn past_height(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y > paddle.top() && ball.pos.y < paddle.bottom()
}

/// Ball overlaps the paddle's face
///
/// Does not consider direction of travel, so a ball already behind the
/// paddle still counts.
pub fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    past_width(ball, paddle) && past_height(ball, paddle)
}

/// Side whose goal line the ball's edge has crossed, if any
///
/// The left goal is checked first.
pub fn crossed_goal(ball: &Ball, surface_width: f32) -> Option<Side> {
    if ball.pos.x - ball.radius < 0.0 {
        Some(Side::Left)
    } else if ball.pos.x + ball.radius > surface_width {
        Some(Side::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(x, y), &Settings::default());
        ball.radius = 10.0;
        ball
    }

    fn paddles() -> (Paddle, Paddle) {
        let settings = Settings::default();
        let mut left = Paddle::new(Side::Left, &settings);
        let mut right = Paddle::new(Side::Right, &settings);
        left.pos.y = 200.0;
        right.pos.y = 200.0;
        (left, right)
    }

    #[test]
    fn test_walls() {
        assert!(hits_wall(&ball_at(100.0, 5.0), 400.0));
        assert!(hits_wall(&ball_at(100.0, 395.0), 400.0));
        assert!(!hits_wall(&ball_at(100.0, 10.0), 400.0));
        assert!(!hits_wall(&ball_at(100.0, 390.0), 400.0));
    }

    #[test]
    fn test_left_paddle_face() {
        let (left, _) = paddles();
        assert!(hits_paddle(&ball_at(11.0, 250.0), &left));
        // Edge exactly on the face is not past it
        assert!(!hits_paddle(&ball_at(20.0, 250.0), &left));
        // Outside the vertical span
        assert!(!hits_paddle(&ball_at(11.0, 199.0), &left));
        // Strict bounds
        assert!(!hits_paddle(&ball_at(11.0, 200.0), &left));
        assert!(!hits_paddle(&ball_at(11.0, 300.0), &left));
    }

    #[test]
    fn test_right_paddle_face() {
        let (_, right) = paddles();
        assert!(hits_paddle(&ball_at(785.0, 250.0), &right));
        assert!(!hits_paddle(&ball_at(780.0, 250.0), &right));
    }

    #[test]
    fn test_ball_behind_paddle_still_hits() {
        let (left, _) = paddles();
        assert!(hits_paddle(&ball_at(-30.0, 250.0), &left));
    }

    #[test]
    fn test_goals() {
        assert_eq!(crossed_goal(&ball_at(5.0, 200.0), 800.0), Some(Side::Left));
        assert_eq!(crossed_goal(&ball_at(795.0, 200.0), 800.0), Some(Side::Right));
        assert_eq!(crossed_goal(&ball_at(10.0, 200.0), 800.0), None);
        assert_eq!(crossed_goal(&ball_at(790.0, 200.0), 800.0), None);
    }
}
