use crate::{Ball, Config, Events, Impact, ImpactKind, Params, Table};
use glam::Vec2;
use hecs::World;

/// Capture any uncaptured ball whose center has entered a pocket zone.
pub fn resolve_pockets(world: &mut World, table: &Table, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        resolve_pocket(ball, table, config, events);
    }
}

/// Pocket collision response for one ball. On capture the ball is snapped to
/// the pocket's rest coordinate, stopped dead, and excluded from every later
/// phase. Calling this again on a captured ball is a no-op.
pub fn resolve_pocket(ball: &mut Ball, table: &Table, config: &Config, events: &mut Events) {
    if ball.captured {
        return;
    }

    let Some(pocket) = table.classify_pocket(ball.pos, ball.radius) else {
        return;
    };

    let entry_pos = ball.pos; // where the ball dropped, for the step-mode marker
    let speed = ball.vel.length();

    ball.captured = true;
    ball.pos = table.rest_position(pocket);
    ball.vel = Vec2::ZERO;

    let volume = (speed / Params::POCKET_VOLUME_SCALE).clamp(Params::POCKET_VOLUME_FLOOR, 1.0);
    events.push(Impact {
        kind: ImpactKind::Pocket,
        pos: ball.pos,
        volume,
    });

    if config.step_mode {
        events.toi_markers.push(entry_pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pocket;

    fn setup() -> (Table, Config, Events) {
        (Table::default(), Config::new(), Events::new())
    }

    #[test]
    fn test_top_left_capture_snaps_to_rest_position() {
        let (table, config, mut events) = setup();
        let b = table.rail_bounds(1.5 * 16.0); // hpw-inset pocket bounds

        let mut ball = Ball::new(Vec2::new(b.left - 1.0, b.top + 1.0), 16.0);
        ball.vel = Vec2::new(-12.0, 16.0);

        resolve_pocket(&mut ball, &table, &config, &mut events);

        assert!(ball.captured);
        assert_eq!(ball.pos, table.rest_position(Pocket::TopLeft));
        assert_eq!(ball.vel, Vec2::ZERO);
        assert!(events.any(ImpactKind::Pocket));
    }

    #[test]
    fn test_capture_is_idempotent() {
        let (table, config, mut events) = setup();
        let b = table.rail_bounds(1.5 * 16.0);

        let mut ball = Ball::new(Vec2::new(b.left - 1.0, b.top + 1.0), 16.0);
        ball.vel = Vec2::new(-5.0, 5.0);

        resolve_pocket(&mut ball, &table, &config, &mut events);
        let after_first = ball;
        let impacts_after_first = events.impacts.len();

        resolve_pocket(&mut ball, &table, &config, &mut events);

        assert_eq!(ball.pos, after_first.pos, "second call changes nothing");
        assert_eq!(ball.vel, after_first.vel);
        assert_eq!(events.impacts.len(), impacts_after_first, "no new event");
    }

    #[test]
    fn test_ball_in_open_play_is_untouched() {
        let (table, config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(512.0, 256.0), 16.0);
        ball.vel = Vec2::new(40.0, -25.0);
        let before = ball;

        resolve_pocket(&mut ball, &table, &config, &mut events);

        assert!(!ball.captured);
        assert_eq!(ball.pos, before.pos);
        assert_eq!(ball.vel, before.vel);
        assert!(events.impacts.is_empty());
    }

    #[test]
    fn test_pocket_volume_uses_pre_capture_speed() {
        let (table, config, mut events) = setup();
        let b = table.rail_bounds(1.5 * 16.0);

        // Speed 20 over scale 20 gives full volume
        let mut ball = Ball::new(Vec2::new(b.left - 1.0, b.top + 1.0), 16.0);
        ball.vel = Vec2::new(-12.0, 16.0);
        resolve_pocket(&mut ball, &table, &config, &mut events);
        assert!((events.impacts[0].volume - 1.0).abs() < 1e-4);

        // A trickling ball still gets the volume floor
        events.clear();
        let mut ball = Ball::new(Vec2::new(b.left - 1.0, b.bottom - 1.0), 16.0);
        ball.vel = Vec2::new(0.0, -1.0);
        resolve_pocket(&mut ball, &table, &config, &mut events);
        assert!((events.impacts[0].volume - Params::POCKET_VOLUME_FLOOR).abs() < 1e-4);
    }

    #[test]
    fn test_center_pocket_capture() {
        let (table, config, mut events) = setup();
        let b = table.rail_bounds(1.5 * 16.0);

        let mut ball = Ball::new(Vec2::new(table.width / 2.0 + 3.0, b.bottom - 1.0), 16.0);
        ball.vel = Vec2::new(0.0, -30.0);

        resolve_pocket(&mut ball, &table, &config, &mut events);

        assert!(ball.captured);
        assert_eq!(ball.pos, table.rest_position(Pocket::BottomCenter));
    }
}
