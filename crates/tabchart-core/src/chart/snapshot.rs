//! Serializable copy of a chart's point set.

use serde::{Deserialize, Serialize};

use super::point::ControlPoint;
use crate::config::DEFAULT_MIN_GAP;
use crate::error::ChartError;

/// Float slack on the spacing check, so sets produced by the editor's own
/// clamping always pass.
const GAP_SLACK: f64 = 1e-9;

/// Control points of one chart, without any interaction state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSnapshot {
    pub points: Vec<ControlPoint>,
}

impl CurveSnapshot {
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a snapshot against the default point spacing.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate(DEFAULT_MIN_GAP)?;
        Ok(snapshot)
    }

    /// Checks every invariant the editor relies on. Neighbours must sit at
    /// least `min_gap` apart so drag clamping always has room.
    pub fn validate(&self, min_gap: f64) -> Result<(), ChartError> {
        let points = &self.points;
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Err(ChartError::TooFewPoints(points.len()));
        };
        if points.len() < 2 {
            return Err(ChartError::TooFewPoints(points.len()));
        }
        if first.x != 0.0 || last.x != 100.0 {
            return Err(ChartError::EndpointNotPinned);
        }

        let last_index = points.len() - 1;
        for (index, point) in points.iter().enumerate() {
            let is_endpoint = index == 0 || index == last_index;
            if point.is_x_restricted != is_endpoint {
                return Err(ChartError::RestrictionMismatch(index));
            }
            if !point.x.is_finite() || !(0.0..=100.0).contains(&point.x) {
                return Err(ChartError::OutOfRange { index, field: "x" });
            }
            if !point.y.is_finite() || !(0.0..=100.0).contains(&point.y) {
                return Err(ChartError::OutOfRange { index, field: "y" });
            }
            if !point.interpolation_factor.is_finite()
                || !(0.0..=1.0).contains(&point.interpolation_factor)
            {
                return Err(ChartError::OutOfRange {
                    index,
                    field: "interpolation_factor",
                });
            }
            if index > 0 {
                let left = points[index - 1].x;
                if point.x <= left {
                    return Err(ChartError::Unsorted(index));
                }
                if left + min_gap > point.x + GAP_SLACK {
                    return Err(ChartError::TooClose(index));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::point::default_points;

    fn snapshot(points: Vec<ControlPoint>) -> CurveSnapshot {
        CurveSnapshot { points }
    }

    #[test]
    fn test_default_points_are_valid() {
        assert!(snapshot(default_points()).validate(DEFAULT_MIN_GAP).is_ok());
    }

    #[test]
    fn test_json_skips_midpoint_cache() {
        let mut points = default_points();
        points[0].mid_point = Some(glam::DVec2::new(1.0, 2.0));
        let json = snapshot(points).to_json().expect("serialize");
        assert!(!json.contains("mid_point"));

        let back = CurveSnapshot::from_json(&json).expect("parse");
        assert_eq!(back.points.len(), 3);
        assert_eq!(back.points[0].mid_point, None);
    }

    #[test]
    fn test_rejects_broken_sets() {
        assert!(matches!(
            snapshot(vec![ControlPoint::pinned(0.0, 0.0)]).validate(DEFAULT_MIN_GAP),
            Err(ChartError::TooFewPoints(1))
        ));
        assert!(matches!(
            snapshot(Vec::new()).validate(DEFAULT_MIN_GAP),
            Err(ChartError::TooFewPoints(0))
        ));

        let mut unpinned = default_points();
        unpinned[2].x = 90.0;
        assert!(matches!(
            snapshot(unpinned).validate(DEFAULT_MIN_GAP),
            Err(ChartError::EndpointNotPinned)
        ));

        let mut restricted_interior = default_points();
        restricted_interior[1].is_x_restricted = true;
        assert!(matches!(
            snapshot(restricted_interior).validate(DEFAULT_MIN_GAP),
            Err(ChartError::RestrictionMismatch(1))
        ));

        let unsorted = vec![
            ControlPoint::pinned(0.0, 0.0),
            ControlPoint::new(60.0, 10.0),
            ControlPoint::new(40.0, 10.0),
            ControlPoint::pinned(100.0, 0.0),
        ];
        assert!(matches!(
            snapshot(unsorted).validate(DEFAULT_MIN_GAP),
            Err(ChartError::Unsorted(2))
        ));

        let mut bad_factor = default_points();
        bad_factor[1].interpolation_factor = 1.5;
        assert!(matches!(
            snapshot(bad_factor).validate(DEFAULT_MIN_GAP),
            Err(ChartError::OutOfRange {
                index: 1,
                field: "interpolation_factor"
            })
        ));
    }

    #[test]
    fn test_rejects_points_closer_than_gap() {
        let crowded = vec![
            ControlPoint::pinned(0.0, 0.0),
            ControlPoint::new(50.0, 10.0),
            ControlPoint::new(50.001, 10.0),
            ControlPoint::new(50.002, 10.0),
            ControlPoint::pinned(100.0, 0.0),
        ];
        assert!(matches!(
            snapshot(crowded.clone()).validate(DEFAULT_MIN_GAP),
            Err(ChartError::TooClose(2))
        ));
        assert!(snapshot(crowded).validate(0.0).is_ok());

        let exact = vec![
            ControlPoint::pinned(0.0, 0.0),
            ControlPoint::new(50.0, 10.0),
            ControlPoint::new(50.01, 10.0),
            ControlPoint::new(50.02, 10.0),
            ControlPoint::pinned(100.0, 0.0),
        ];
        assert!(snapshot(exact).validate(DEFAULT_MIN_GAP).is_ok());
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        assert!(matches!(
            CurveSnapshot::from_json("{ not json"),
            Err(ChartError::Json(_))
        ));
    }
}
