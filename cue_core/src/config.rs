use crate::{Params, Table};

/// Session configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub table_width: f32,
    pub table_height: f32,
    pub table_margin: f32,
    pub ball_radius: f32,
    pub cue_impulse: f32,
    pub restitution: f32,
    pub contact_epsilon: f32,
    pub stop_speed: f32,
    pub max_dt: f32,
    /// Step mode records cosmetic time-of-impact markers; physics is unchanged.
    pub step_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_width: Params::TABLE_WIDTH,
            table_height: Params::TABLE_HEIGHT,
            table_margin: Params::TABLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            cue_impulse: Params::CUE_IMPULSE,
            restitution: Params::RESTITUTION,
            contact_epsilon: Params::CONTACT_EPSILON,
            stop_speed: Params::STOP_SPEED,
            max_dt: Params::MAX_DT,
            step_mode: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table geometry this configuration describes.
    pub fn table(&self) -> Table {
        Table::new(self.table_width, self.table_height, self.table_margin)
    }
}
