use glam::Vec2;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// What a ball struck this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactKind {
    Rail,
    Pocket,
    BallBall,
}

/// One collision surfaced to the audio and particle collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub kind: ImpactKind,
    pub pos: Vec2,
    /// Playback intensity in [0, 1].
    pub volume: f32,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub impacts: Vec<Impact>,
    /// Cosmetic time-of-impact markers, recorded in step mode only.
    pub toi_markers: Vec<Vec2>,
    /// How many pairs reached the narrow phase this frame.
    pub narrow_phase_calls: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.impacts.clear();
        self.toi_markers.clear();
        self.narrow_phase_calls = 0;
    }

    pub fn push(&mut self, impact: Impact) {
        self.impacts.push(impact);
    }

    pub fn any(&self, kind: ImpactKind) -> bool {
        self.impacts.iter().any(|i| i.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.push(Impact {
            kind: ImpactKind::Rail,
            pos: Vec2::new(94.0, 200.0),
            volume: 0.8,
        });
        events.toi_markers.push(Vec2::ZERO);
        events.narrow_phase_calls = 3;

        events.clear();

        assert!(events.impacts.is_empty());
        assert!(events.toi_markers.is_empty());
        assert_eq!(events.narrow_phase_calls, 0);
    }

    #[test]
    fn test_events_any_filters_by_kind() {
        let mut events = Events::new();
        events.push(Impact {
            kind: ImpactKind::Pocket,
            pos: Vec2::ZERO,
            volume: 1.0,
        });

        assert!(events.any(ImpactKind::Pocket));
        assert!(!events.any(ImpactKind::Rail));
        assert!(!events.any(ImpactKind::BallBall));
    }
}
