use glam::Vec2;

/// Which ball an entity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    Cue,
    Object,
}

/// Ball component - a circular body on the table
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub captured: bool,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            captured: false,
        }
    }

    /// Deliver an impulse of the given magnitude along `angle` radians.
    pub fn deliver_impulse(&mut self, angle: f32, magnitude: f32) {
        self.vel += magnitude * Vec2::new(angle.cos(), angle.sin());
    }
}
