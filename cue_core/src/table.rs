use crate::Params;
use glam::Vec2;

/// Vertical rails, crossed on the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VRail {
    Left,
    Right,
}

/// Horizontal rails, crossed on the y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HRail {
    Top,
    Bottom,
}

/// Which rail planes a ball's center sits beyond, at most one per axis.
///
/// A ball can cross both a vertical and a horizontal rail in the same step
/// (a corner hit), so the two axes are classified independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RailCrossing {
    pub vertical: Option<VRail>,
    pub horizontal: Option<HRail>,
}

impl RailCrossing {
    pub fn any(&self) -> bool {
        self.vertical.is_some() || self.horizontal.is_some()
    }
}

/// The six pockets, four corners plus the two side centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pocket {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Boundary planes for a ball center, inset from the playing edge.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

/// Immutable table geometry for a session
#[derive(Debug, Clone)]
pub struct Table {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pockets: [Vec2; 6],
}

impl Table {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        let cx = width / 2.0;
        // Rest coordinates for captured balls, indexed by Pocket
        let pockets = [
            Vec2::new(margin, height - margin),
            Vec2::new(cx, height - margin),
            Vec2::new(width - margin, height - margin),
            Vec2::new(margin, margin),
            Vec2::new(cx, margin),
            Vec2::new(width - margin, margin),
        ];
        Self {
            width,
            height,
            margin,
            pockets,
        }
    }

    /// Where a captured ball comes to rest.
    pub fn rest_position(&self, pocket: Pocket) -> Vec2 {
        self.pockets[pocket as usize]
    }

    fn bounds(&self, inset: f32) -> Bounds {
        Bounds {
            top: self.height - self.margin - inset,
            bottom: self.margin + inset,
            left: self.margin + inset,
            right: self.width - self.margin - inset,
        }
    }

    /// Rail planes for the center of a ball of radius `r`.
    pub fn rail_bounds(&self, r: f32) -> Bounds {
        self.bounds(r)
    }

    /// Classify which rail planes the ball's center has crossed.
    pub fn classify_rail(&self, pos: Vec2, r: f32) -> RailCrossing {
        let b = self.bounds(r);

        let vertical = if pos.x < b.left {
            Some(VRail::Left)
        } else if pos.x > b.right {
            Some(VRail::Right)
        } else {
            None
        };

        let horizontal = if pos.y > b.top {
            Some(HRail::Top)
        } else if pos.y < b.bottom {
            Some(HRail::Bottom)
        } else {
            None
        };

        RailCrossing {
            vertical,
            horizontal,
        }
    }

    /// Classify which pocket catchment zone, if any, contains the ball's
    /// center. Branch order is fixed: top band before bottom band, and within
    /// a band left, center, right. First match wins.
    pub fn classify_pocket(&self, pos: Vec2, r: f32) -> Option<Pocket> {
        let pw = 3.0 * r; // pocket width
        let hpw = pw / 2.0;
        let b = self.bounds(hpw);
        let in_center_band = (pos.x - self.width / 2.0).abs() < hpw / 2.0;

        if pos.y > b.top {
            if pos.x < b.left {
                Some(Pocket::TopLeft)
            } else if in_center_band {
                Some(Pocket::TopCenter)
            } else if pos.x > b.right {
                Some(Pocket::TopRight)
            } else {
                None
            }
        } else if pos.y < b.bottom {
            if pos.x < b.left {
                Some(Pocket::BottomLeft)
            } else if in_center_band {
                Some(Pocket::BottomCenter)
            } else if pos.x > b.right {
                Some(Pocket::BottomRight)
            } else {
                None
            }
        } else {
            None
        }
    }

    /// Break position for the cue ball.
    pub fn head_spot(&self) -> Vec2 {
        Vec2::new(self.width * 0.25, self.height * 0.5)
    }

    /// Break position for the object ball.
    pub fn foot_spot(&self) -> Vec2 {
        Vec2::new(self.width * 0.75, self.height * 0.5)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(
            Params::TABLE_WIDTH,
            Params::TABLE_HEIGHT,
            Params::TABLE_MARGIN,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f32 = 16.0;

    #[test]
    fn test_classify_rail_inside_table() {
        let table = Table::default();
        let crossing = table.classify_rail(Vec2::new(500.0, 250.0), R);
        assert_eq!(crossing, RailCrossing::default());
        assert!(!crossing.any());
    }

    #[test]
    fn test_classify_rail_each_side() {
        let table = Table::default();
        let b = table.rail_bounds(R);

        let left = table.classify_rail(Vec2::new(b.left - 1.0, 250.0), R);
        assert_eq!(left.vertical, Some(VRail::Left));
        assert_eq!(left.horizontal, None);

        let right = table.classify_rail(Vec2::new(b.right + 1.0, 250.0), R);
        assert_eq!(right.vertical, Some(VRail::Right));

        let top = table.classify_rail(Vec2::new(500.0, b.top + 1.0), R);
        assert_eq!(top.horizontal, Some(HRail::Top));

        let bottom = table.classify_rail(Vec2::new(500.0, b.bottom - 1.0), R);
        assert_eq!(bottom.horizontal, Some(HRail::Bottom));
    }

    #[test]
    fn test_classify_rail_corner_crosses_both_axes() {
        let table = Table::default();
        let b = table.rail_bounds(R);
        let crossing = table.classify_rail(Vec2::new(b.left - 2.0, b.top + 2.0), R);
        assert_eq!(crossing.vertical, Some(VRail::Left));
        assert_eq!(crossing.horizontal, Some(HRail::Top));
    }

    #[test]
    fn test_classify_pocket_six_zones() {
        let table = Table::default();
        let hpw = 1.5 * R;
        let b = table.bounds(hpw);
        let cx = table.width / 2.0;

        let cases = [
            (Vec2::new(b.left - 1.0, b.top + 1.0), Pocket::TopLeft),
            (Vec2::new(cx, b.top + 1.0), Pocket::TopCenter),
            (Vec2::new(b.right + 1.0, b.top + 1.0), Pocket::TopRight),
            (Vec2::new(b.left - 1.0, b.bottom - 1.0), Pocket::BottomLeft),
            (Vec2::new(cx, b.bottom - 1.0), Pocket::BottomCenter),
            (Vec2::new(b.right + 1.0, b.bottom - 1.0), Pocket::BottomRight),
        ];

        for (pos, expected) in cases {
            assert_eq!(
                table.classify_pocket(pos, R),
                Some(expected),
                "pocket at {pos:?}"
            );
        }
    }

    #[test]
    fn test_classify_pocket_edge_between_pockets_is_none() {
        let table = Table::default();
        let hpw = 1.5 * R;
        let b = table.bounds(hpw);
        // Past the top rail but between the left and center pockets
        let pos = Vec2::new((b.left + table.width / 2.0 - hpw / 2.0) / 2.0, b.top + 1.0);
        assert_eq!(table.classify_pocket(pos, R), None);
    }

    #[test]
    fn test_classify_pocket_center_of_table_is_none() {
        let table = Table::default();
        assert_eq!(
            table.classify_pocket(Vec2::new(512.0, 256.0), R),
            None,
            "a ball in open play is never pocketed"
        );
    }

    #[test]
    fn test_rest_positions_sit_on_the_margin() {
        let table = Table::default();
        let rest = table.rest_position(Pocket::TopLeft);
        assert_eq!(rest, Vec2::new(table.margin, table.height - table.margin));
        let rest = table.rest_position(Pocket::BottomCenter);
        assert_eq!(rest, Vec2::new(table.width / 2.0, table.margin));
    }
}
