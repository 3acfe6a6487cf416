use crate::{Ball, Config, Events, HRail, Impact, ImpactKind, Params, Table, VRail};
use glam::Vec2;
use hecs::World;

/// Reflect every uncaptured ball off any rail plane its center has crossed.
pub fn resolve_rails(world: &mut World, table: &Table, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        resolve_rail(ball, table, config, events);
    }
}

/// Rail collision response for one ball.
///
/// The contact point is found by back-interpolating along the velocity from
/// the overshot position to the rail plane, the overshot coordinate is
/// mirrored about the plane, and the velocity on each crossed axis is negated
/// and damped by the restitution coefficient. Position correction applies to
/// the first crossed rail only, in priority order left, right, top, bottom;
/// a corner hit still reflects velocity on both axes.
pub fn resolve_rail(ball: &mut Ball, table: &Table, config: &Config, events: &mut Events) {
    if ball.captured {
        return;
    }

    let r = ball.radius;
    let crossing = table.classify_rail(ball.pos, r);
    let b = table.rail_bounds(r);
    let p = ball.pos;
    let v = ball.vel; // pre-reflection velocity, used for back-interpolation

    // Ball center at the moment of rail contact
    let contact = match (crossing.vertical, crossing.horizontal) {
        (Some(side), _) => {
            let plane = match side {
                VRail::Left => b.left,
                VRail::Right => b.right,
            };
            let y = if v.x.abs() > Params::VEL_EPSILON {
                p.y - v.y * (p.x - plane) / v.x
            } else {
                p.y // moving parallel to the rail normal's axis, no interpolation
            };
            ball.pos.x = 2.0 * plane - p.x; // position after bounce
            Vec2::new(plane, y)
        }
        (None, Some(side)) => {
            let plane = match side {
                HRail::Top => b.top,
                HRail::Bottom => b.bottom,
            };
            let x = if v.y.abs() > Params::VEL_EPSILON {
                p.x - v.x * (p.y - plane) / v.y
            } else {
                p.x
            };
            ball.pos.y = 2.0 * plane - p.y;
            Vec2::new(x, plane)
        }
        (None, None) => return,
    };

    // Flip ball velocity and slow down
    if crossing.vertical.is_some() {
        ball.vel.x = -config.restitution * ball.vel.x;
    }
    if crossing.horizontal.is_some() {
        ball.vel.y = -config.restitution * ball.vel.y;
    }

    let volume = (ball.vel.length() / Params::RAIL_VOLUME_SCALE).min(1.0);
    events.push(Impact {
        kind: ImpactKind::Rail,
        pos: contact,
        volume,
    });

    if config.step_mode {
        events.toi_markers.push(contact);
    }
}
