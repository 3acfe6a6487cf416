use crate::{Ball, Config, Events, Impact, ImpactKind, Params};
use glam::Vec2;
use hecs::World;

/// Result of sweeping two circles through the step's relative motion.
#[derive(Debug, Clone, Copy)]
pub struct Sweep {
    /// Time between the moment of impact and the end of the step. Negative
    /// when the impact lies in the future (prediction from a probe velocity).
    pub t_back: f32,
    /// Center of the first circle at the moment of impact.
    pub pos_a: Vec2,
    /// Center of the second circle at the moment of impact.
    pub pos_b: Vec2,
    /// Relative velocity `vel_b - vel_a`.
    pub rel_vel: Vec2,
}

/// A resolved ball-ball collision.
#[derive(Debug, Clone, Copy)]
pub struct PairHit {
    /// Speed along the line of centers, for effect intensity.
    pub impact_speed: f32,
    pub toi_a: Vec2,
    pub toi_b: Vec2,
}

/// Analytic time-of-impact sweep for two circles under constant velocity.
///
/// Solves for the instant the separation first equals the combined radii
/// (padded by `contact_margin` so surfaces read as touching slightly early).
/// Returns None when the relative speed is zero or the relative path never
/// comes within contact distance.
pub fn sweep_circles(
    pos_a: Vec2,
    vel_a: Vec2,
    r_a: f32,
    pos_b: Vec2,
    vel_b: Vec2,
    r_b: f32,
    contact_margin: f32,
) -> Option<Sweep> {
    let r = r_a + r_b + contact_margin;

    let v = vel_b - vel_a; // relative velocity
    let speed = v.length();
    if speed == 0.0 {
        return None; // identical velocities never converge
    }
    let vhat = v / speed;

    let c = pos_a - pos_b; // separation at the start of the step
    let cdotvhat = c.dot(vhat); // separation projected onto the relative motion

    let delta = cdotvhat * cdotvhat - c.length_squared() + r * r;
    if delta < 0.0 {
        return None; // paths never come within contact distance
    }

    // Entry-side root: the moment separation first equals r
    let d = -cdotvhat + delta.sqrt();
    let t_back = d / speed;

    Some(Sweep {
        t_back,
        pos_a: pos_a - t_back * vel_a,
        pos_b: pos_b - t_back * vel_b,
        rel_vel: v,
    })
}

/// Continuous collision response for a pair of balls.
///
/// Rolls both balls back to their positions at the time of impact, exchanges
/// the velocity component along the line of centers (equal-mass elastic
/// impulse, tangential components untouched), then re-advances both through
/// the remainder of the step with their new velocities.
pub fn resolve_pair(a: &mut Ball, b: &mut Ball, contact_margin: f32) -> Option<PairHit> {
    let sweep = sweep_circles(
        a.pos,
        a.vel,
        a.radius,
        b.pos,
        b.vel,
        b.radius,
        contact_margin,
    )?;

    // Move balls back to their positions at TOI
    a.pos = sweep.pos_a;
    b.pos = sweep.pos_b;
    let toi_a = a.pos;
    let toi_b = b.pos;

    // Impulse along the line of centers
    let nhat = (a.pos - b.pos).normalize();
    let s = sweep.rel_vel.dot(nhat);
    let dv = s * nhat;
    a.vel += dv; // what one ball gains
    b.vel -= dv; // the other one loses

    // Move by the correct amount after impact
    a.pos += sweep.t_back * a.vel;
    b.pos += sweep.t_back * b.vel;

    Some(PairHit {
        impact_speed: s,
        toi_a,
        toi_b,
    })
}

/// Where the cue ball's center will be at the moment it contacts the object
/// ball, were it moving with `probe_vel`. Same sweep as [`resolve_pair`] with
/// a hypothetical velocity in place of the real one; mutates nothing. Used
/// for the aim preview.
pub fn predict_contact(
    object: &Ball,
    cue: &Ball,
    probe_vel: Vec2,
    contact_margin: f32,
) -> Option<Vec2> {
    let sweep = sweep_circles(
        object.pos,
        object.vel,
        object.radius,
        cue.pos,
        probe_vel,
        cue.radius,
        contact_margin,
    )?;
    Some(sweep.pos_b)
}

/// Broad-phase gate and narrow-phase dispatch for every uncaptured pair.
///
/// Pairs are enumerated in ascending entity order so results are reproducible
/// run to run. The narrow phase runs only when the bounding circles already
/// overlap; each invocation is counted in `events.narrow_phase_calls`.
pub fn check_ball_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let mut entities: Vec<hecs::Entity> = world
        .query_mut::<&Ball>()
        .into_iter()
        .filter(|(_entity, ball)| !ball.captured)
        .map(|(entity, _ball)| entity)
        .collect();
    entities.sort_unstable_by_key(|entity| entity.to_bits());

    for i in 0..entities.len() {
        for j in (i + 1)..entities.len() {
            let a = match world.get::<&Ball>(entities[i]) {
                Ok(ball) => *ball,
                Err(_) => continue,
            };
            let b = match world.get::<&Ball>(entities[j]) {
                Ok(ball) => *ball,
                Err(_) => continue,
            };

            // Broad phase: bounding circles must already overlap
            let d = a.radius + b.radius;
            if a.pos.distance_squared(b.pos) >= d * d {
                continue;
            }

            events.narrow_phase_calls += 1;

            let mut a2 = a;
            let mut b2 = b;
            let Some(hit) = resolve_pair(&mut a2, &mut b2, config.contact_epsilon) else {
                continue;
            };

            if let Ok(mut ball) = world.get::<&mut Ball>(entities[i]) {
                *ball = a2;
            }
            if let Ok(mut ball) = world.get::<&mut Ball>(entities[j]) {
                *ball = b2;
            }

            let volume = (hit.impact_speed / Params::BALL_VOLUME_SCALE).min(1.0);
            events.push(Impact {
                kind: ImpactKind::BallBall,
                pos: a2.pos,
                volume,
            });

            if config.step_mode {
                events.toi_markers.push(hit.toi_a);
                events.toi_markers.push(hit.toi_b);
            }
        }
    }
}
