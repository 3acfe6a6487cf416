pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;
pub mod table;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use table::*;

use glam::Vec2;
use hecs::{Entity, World};
use systems::*;

/// Run one step of the billiards simulation.
///
/// Later phases depend on state written by earlier ones within the same
/// frame (capture removes a ball from rail and pair checks, reflection moves
/// it before the pair sweep), so the order here is fixed.
pub fn step(
    world: &mut World,
    time: &mut Time,
    table: &Table,
    config: &Config,
    events: &mut Events,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(config.max_dt);
    let step_time = Time::new(clamped_dt, time.now);

    // Clear events at start of frame
    events.clear();

    // 1. Advance balls along their velocities
    move_balls(world, &step_time, config);

    // 2. Pocket capture (captured balls drop out of all later phases)
    resolve_pockets(world, table, config, events);

    // 3. Rail reflection
    resolve_rails(world, table, config, events);

    // 4. Ball-ball collision: broad-phase gate, then TOI narrow phase
    check_ball_collisions(world, config, events);

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a ball entity
pub fn spawn_ball(world: &mut World, kind: BallKind, pos: Vec2, radius: f32) -> Entity {
    world.spawn((Ball::new(pos, radius), kind))
}

/// Start a fresh rack: despawn everything, then place the cue ball on the
/// head spot and the object ball on the foot spot.
pub fn spawn_rack(world: &mut World, table: &Table, config: &Config) -> (Entity, Entity) {
    world.clear();
    let cue = spawn_ball(world, BallKind::Cue, table.head_spot(), config.ball_radius);
    let object = spawn_ball(world, BallKind::Object, table.foot_spot(), config.ball_radius);
    (cue, object)
}

/// Shoot the cue ball with an impulse of the given magnitude along `angle`
/// radians.
pub fn shoot(world: &mut World, angle: f32, impulse: f32) {
    for (_entity, (ball, kind)) in world.query_mut::<(&mut Ball, &BallKind)>() {
        if *kind == BallKind::Cue && !ball.captured {
            ball.deliver_impulse(angle, impulse);
        }
    }
}

/// Move the cue ball up or down the baseline, stopping at the table edges.
pub fn adjust_cue_ball(world: &mut World, table: &Table, dy: f32) {
    for (_entity, (ball, kind)) in world.query_mut::<(&mut Ball, &BallKind)>() {
        if *kind == BallKind::Cue && !ball.captured {
            let r = ball.radius;
            ball.pos.y = (ball.pos.y + dy).clamp(r, table.height - r);
        }
    }
}

/// Angle from the cue ball's center to the object ball's center, for the
/// default aim. None if either ball is missing.
pub fn aim_at_object(world: &World) -> Option<f32> {
    let (cue, object) = find_pair(world)?;
    let v = object.pos - cue.pos;
    Some(v.y.atan2(v.x))
}

/// Where the cue ball's center will be when it first contacts the object
/// ball, were it shot along `angle` at the configured impulse. None if the
/// shot misses or either ball is missing.
pub fn predict_cue_contact(world: &World, config: &Config, angle: f32) -> Option<Vec2> {
    let (cue, object) = find_pair(world)?;
    let probe_vel = config.cue_impulse * Vec2::new(angle.cos(), angle.sin());
    predict_contact(&object, &cue, probe_vel, config.contact_epsilon)
}

/// Is any ball down a pocket?
pub fn any_captured(world: &World) -> bool {
    world.query::<&Ball>().iter().any(|(_entity, ball)| ball.captured)
}

/// Is the cue ball down a pocket?
pub fn cue_captured(world: &World) -> bool {
    world
        .query::<(&Ball, &BallKind)>()
        .iter()
        .any(|(_entity, (ball, kind))| *kind == BallKind::Cue && ball.captured)
}

/// Have all balls stopped moving? The kinematic advance clamps slow balls to
/// exactly zero, so an exact comparison is reliable here.
pub fn all_stopped(world: &World) -> bool {
    world
        .query::<&Ball>()
        .iter()
        .all(|(_entity, ball)| ball.vel == Vec2::ZERO)
}

fn find_pair(world: &World) -> Option<(Ball, Ball)> {
    let mut cue = None;
    let mut object = None;
    for (_entity, (ball, kind)) in world.query::<(&Ball, &BallKind)>().iter() {
        match kind {
            BallKind::Cue => cue = Some(*ball),
            BallKind::Object => object = Some(*ball),
        }
    }
    Some((cue?, object?))
}
