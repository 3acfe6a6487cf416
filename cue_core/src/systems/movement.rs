use crate::{Ball, Config, Time};
use glam::Vec2;
use hecs::World;

/// Advance every uncaptured ball along its velocity, then clamp slow balls
/// to a dead stop so the end-of-turn check can compare against exact zero.
pub fn move_balls(world: &mut World, time: &Time, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.captured {
            continue;
        }

        ball.pos += ball.vel * time.dt;

        if ball.vel.length_squared() < config.stop_speed * config.stop_speed {
            ball.vel = Vec2::ZERO;
        }
    }
}
