// Doubles pad topology.
//
// Two four-panel pads side by side give eight panels. Each panel has a fixed
// 2-D position in pad units (x grows to the right, y grows toward the back
// of the screen, i.e. "down" arrows have the larger y):
//
//        P1           P2
//        ^ (1,0)      ^ (4,0)
//   < (0,1)  > (2,1) < (3,1)  > (5,1)
//        v (1,2)      v (4,2)
//
// The panel index is only an output identifier (chart columns, glyph rows);
// all geometry goes through the coordinate table.
//
// Angles are bearings from one foot to the other. Body rotation is tracked
// unwrapped (not reduced to [-π, π]), so `unwrapped_angle` picks, among all
// angles congruent to a bearing, the one closest to a reference rotation.
//
// Comparisons at the rotation thresholds (π/2, π) land exactly on boundary
// values for axis-aligned feet, so the validator and executor compare through
// `is_above`/`is_below`, which treat near-equal values as equal.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Tolerance for boundary comparisons, relative for magnitudes above 1.
pub const EPSILON: f64 = 1e-9;

/// One of the eight panels of a doubles pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Panel {
    P1Left = 0,
    P1Down = 1,
    P1Up = 2,
    P1Right = 3,
    P2Left = 4,
    P2Down = 5,
    P2Up = 6,
    P2Right = 7,
}

/// Panel coordinates, indexed by `Panel::index()`.
const COORDS: [(f64, f64); 8] = [
    (0.0, 1.0),
    (1.0, 2.0),
    (1.0, 0.0),
    (2.0, 1.0),
    (3.0, 1.0),
    (4.0, 2.0),
    (4.0, 0.0),
    (5.0, 1.0),
];

impl Panel {
    pub const ALL: [Panel; 8] = [
        Panel::P1Left,
        Panel::P1Down,
        Panel::P1Up,
        Panel::P1Right,
        Panel::P2Left,
        Panel::P2Down,
        Panel::P2Up,
        Panel::P2Right,
    ];

    /// The two center panels, in their uncrossed (left foot, right foot) order.
    pub const CENTER: [Panel; 2] = [Panel::P1Right, Panel::P2Left];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a panel by its output index.
    pub fn from_index(index: usize) -> Option<Panel> {
        Panel::ALL.get(index).copied()
    }

    pub fn x(self) -> f64 {
        COORDS[self.index()].0
    }

    pub fn y(self) -> f64 {
        COORDS[self.index()].1
    }
}

/// Euclidean distance between two panels.
pub fn distance(p1: Panel, p2: Panel) -> f64 {
    (p2.x() - p1.x()).hypot(p2.y() - p1.y())
}

/// Raw bearing from `p1` to `p2`, in (-π, π].
pub fn direction_angle(p1: Panel, p2: Panel) -> f64 {
    (p2.y() - p1.y()).atan2(p2.x() - p1.x())
}

/// Bearing from `p1` to `p2`, shifted by a multiple of 2π to lie within π of
/// `reference`.
///
/// Computed as `reference + ((raw - reference + π) mod 2π) - π` with a
/// floored remainder, so the result never differs from `reference` by more
/// than π.
pub fn unwrapped_angle(p1: Panel, p2: Panel, reference: f64) -> f64 {
    let raw = direction_angle(p1, p2);
    reference + (raw - reference + PI).rem_euclid(TAU) - PI
}

/// True when `a` and `b` are equal within tolerance.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * 1f64.max(a.abs()).max(b.abs())
}

/// Strictly greater, with near-equal values counting as equal.
pub fn is_above(a: f64, b: f64) -> bool {
    a > b && !approx_eq(a, b)
}

/// Strictly less, with near-equal values counting as equal.
pub fn is_below(a: f64, b: f64) -> bool {
    a < b && !approx_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_index_roundtrip() {
        for (i, panel) in Panel::ALL.iter().enumerate() {
            assert_eq!(panel.index(), i);
            assert_eq!(Panel::from_index(i), Some(*panel));
        }
        assert_eq!(Panel::from_index(8), None);
    }

    #[test]
    fn test_center_panels() {
        let [left, right] = Panel::CENTER;
        assert!(left.x() < right.x());
        assert_eq!(distance(left, right), 1.0);
        // No other pair of panels on different pads is closer.
        for a in &Panel::ALL[..4] {
            for b in &Panel::ALL[4..] {
                assert!(distance(*a, *b) >= distance(left, right));
            }
        }
    }

    #[test]
    fn test_distances() {
        assert_eq!(distance(Panel::P1Right, Panel::P2Left), 1.0);
        assert_eq!(distance(Panel::P1Left, Panel::P1Right), 2.0);
        assert_eq!(distance(Panel::P1Up, Panel::P1Down), 2.0);
        assert!((distance(Panel::P1Left, Panel::P1Up) - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(distance(Panel::P1Left, Panel::P2Right), 5.0);
        // Symmetric
        for a in Panel::ALL {
            for b in Panel::ALL {
                assert_eq!(distance(a, b), distance(b, a));
            }
        }
    }

    #[test]
    fn test_direction_angle() {
        assert_eq!(direction_angle(Panel::P1Right, Panel::P2Left), 0.0);
        assert_eq!(direction_angle(Panel::P2Left, Panel::P1Right), PI);
        // Up arrow is at smaller y, so the bearing from Down to Up is -π/2.
        assert_eq!(direction_angle(Panel::P1Down, Panel::P1Up), -FRAC_PI_2);
        assert_eq!(direction_angle(Panel::P1Up, Panel::P1Down), FRAC_PI_2);
    }

    #[test]
    fn test_unwrapped_angle_stays_within_half_turn() {
        let references = [-7.0, -PI, -2.0, -FRAC_PI_2, 0.0, 0.3, FRAC_PI_2, 3.0, PI, 9.5];
        for a in Panel::ALL {
            for b in Panel::ALL {
                if a == b {
                    continue;
                }
                let raw = direction_angle(a, b);
                for &reference in &references {
                    let angle = unwrapped_angle(a, b, reference);
                    assert!(
                        (angle - reference).abs() <= PI + EPSILON,
                        "{a:?}->{b:?} ref {reference}: got {angle}"
                    );
                    let wrapped = (angle - raw).rem_euclid(TAU);
                    assert!(
                        wrapped < 1e-9 || TAU - wrapped < 1e-9,
                        "{a:?}->{b:?} ref {reference}: {angle} not congruent to {raw}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_unwrapped_angle_picks_nearest_turn() {
        // Facing backwards: the reference decides which way round we went.
        assert_eq!(unwrapped_angle(Panel::P2Left, Panel::P1Right, PI), PI);
        assert_eq!(unwrapped_angle(Panel::P2Left, Panel::P1Right, 0.0), -PI);
        assert!((unwrapped_angle(Panel::P2Left, Panel::P1Right, 2.5) - PI).abs() < 1e-12);
        assert!((unwrapped_angle(Panel::P2Left, Panel::P1Right, -2.5) + PI).abs() < 1e-12);

        // Down-left bearing seen from a rotation of π continues past π.
        let angle = unwrapped_angle(Panel::P1Down, Panel::P1Right, PI);
        assert!((angle - 7.0 * PI / 4.0).abs() < 1e-12, "got {angle}");
    }

    #[test]
    fn test_boundary_comparisons() {
        assert!(!is_above(PI, PI));
        assert!(!is_below(PI, PI));
        assert!(!is_above(PI + 1e-12, PI));
        assert!(!is_below(FRAC_PI_2 - 1e-12, FRAC_PI_2));
        assert!(is_above(PI + 1e-6, PI));
        assert!(is_below(FRAC_PI_2 - 1e-6, FRAC_PI_2));
        assert!(is_above(2.0, 1.0));
        assert!(!is_above(1.0, 2.0));

        // atan2 of an axis-aligned stance produces exactly π; a recomputed π
        // with rounding noise must behave the same.
        let noisy_pi = (PI / 3.0) * 3.0;
        assert!(!is_above(noisy_pi, PI));
        assert!(!is_above(noisy_pi.abs() - PI, 0.0));
    }
}
