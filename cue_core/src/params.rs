/// Tuning parameters for the billiards simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table
    pub const TABLE_WIDTH: f32 = 1024.0;
    pub const TABLE_HEIGHT: f32 = 512.0;
    pub const TABLE_MARGIN: f32 = 78.0;

    // Balls
    pub const BALL_RADIUS: f32 = 16.0;
    pub const CUE_IMPULSE: f32 = 1800.0; // 30 units per 60 Hz frame

    // Physics
    pub const RESTITUTION: f32 = 0.8; // how bouncy the rails are
    pub const CONTACT_EPSILON: f32 = 1.0; // treat surfaces as touching slightly early
    pub const VEL_EPSILON: f32 = 1e-6; // guard for rail back-interpolation divisors
    pub const STOP_SPEED: f32 = 6.0; // below this, velocity clamps to zero
    pub const MAX_DT: f32 = 0.1; // clamp to prevent large jumps

    // Impact volume scales
    pub const RAIL_VOLUME_SCALE: f32 = 10.0;
    pub const POCKET_VOLUME_SCALE: f32 = 20.0;
    pub const POCKET_VOLUME_FLOOR: f32 = 0.2;
    pub const BALL_VOLUME_SCALE: f32 = 50.0;
}
