// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Finding scales by position and by orientation.

use kurbo::{Point, Rect};

use crate::scale::{Chart, Scale};

/// Returns the first scale, in collection order, whose bounds contain `point`.
///
/// Bounds are inclusive on all four edges, unlike [`Rect::contains`]. When
/// several rectangles contain the point, the earliest scale in the chart wins.
/// Returns `None` for a missing pointer position or an empty chart.
///
/// ```rust
/// use kurbo::Point;
/// use understory_gesture_axes::{Axis, ScaleInfo, scale_under_point};
///
/// let chart = vec![
///     ScaleInfo::from_edges("x", Axis::X, 0.0, 200.0, 100.0, 220.0),
///     ScaleInfo::from_edges("y", Axis::Y, 0.0, 0.0, 20.0, 200.0),
/// ];
/// let hit = scale_under_point(Some(Point::new(10.0, 50.0)), &chart);
/// assert_eq!(hit.map(|s| s.id), Some("y"));
/// assert!(scale_under_point(Some(Point::new(500.0, 500.0)), &chart).is_none());
/// ```
#[must_use]
pub fn scale_under_point<C: Chart + ?Sized>(point: Option<Point>, chart: &C) -> Option<&C::Scale> {
    let point = point?;
    chart
        .scales()
        .find(|scale| contains_inclusive(scale.bounds(), point))
}

/// Returns the first horizontally laid out scale.
#[must_use]
pub fn x_axis<C: Chart + ?Sized>(chart: &C) -> Option<&C::Scale> {
    chart.scales().find(|scale| scale.is_horizontal())
}

/// Returns the first vertically laid out scale.
#[must_use]
pub fn y_axis<C: Chart + ?Sized>(chart: &C) -> Option<&C::Scale> {
    chart.scales().find(|scale| !scale.is_horizontal())
}

fn contains_inclusive(bounds: Rect, point: Point) -> bool {
    point.y >= bounds.y0 && point.y <= bounds.y1 && point.x >= bounds.x0 && point.x <= bounds.x1
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Point;

    use super::{scale_under_point, x_axis, y_axis};
    use crate::axis::Axis;
    use crate::scale::ScaleInfo;

    fn two_axes() -> Vec<ScaleInfo<&'static str>> {
        vec![
            ScaleInfo::from_edges("xAxis", Axis::X, 0.0, 200.0, 100.0, 220.0),
            ScaleInfo::from_edges("yAxis", Axis::Y, 0.0, 0.0, 20.0, 200.0),
        ]
    }

    fn hit(point: Point, chart: &[ScaleInfo<&'static str>]) -> Option<&'static str> {
        scale_under_point(Some(point), chart).map(|s| s.id)
    }

    #[test]
    fn point_inside_a_scale_finds_it() {
        let chart = two_axes();
        assert_eq!(hit(Point::new(10.0, 50.0), &chart), Some("yAxis"));
        assert_eq!(hit(Point::new(50.0, 210.0), &chart), Some("xAxis"));
    }

    #[test]
    fn point_outside_every_scale_finds_nothing() {
        let chart = two_axes();
        assert_eq!(hit(Point::new(500.0, 500.0), &chart), None);
        assert_eq!(hit(Point::new(50.0, 50.0), &chart), None);
    }

    #[test]
    fn bounds_are_inclusive_on_every_edge() {
        let chart = vec![ScaleInfo::from_edges("s", Axis::X, 10.0, 20.0, 30.0, 40.0)];
        for (x, y) in [(10.0, 30.0), (30.0, 30.0), (20.0, 20.0), (20.0, 40.0), (30.0, 40.0)] {
            assert_eq!(hit(Point::new(x, y), &chart), Some("s"), "({x}, {y})");
        }
        assert_eq!(hit(Point::new(9.999, 30.0), &chart), None);
        assert_eq!(hit(Point::new(20.0, 40.001), &chart), None);
    }

    #[test]
    fn first_scale_wins_on_overlap() {
        let chart = vec![
            ScaleInfo::from_edges("a", Axis::X, 0.0, 0.0, 100.0, 100.0),
            ScaleInfo::from_edges("b", Axis::Y, 0.0, 0.0, 10.0, 10.0),
        ];
        assert_eq!(hit(Point::new(5.0, 5.0), &chart), Some("a"));
        let reversed: Vec<_> = chart.into_iter().rev().collect();
        assert_eq!(hit(Point::new(5.0, 5.0), &reversed), Some("b"));
    }

    #[test]
    fn missing_point_or_empty_chart_finds_nothing() {
        let chart = two_axes();
        assert!(scale_under_point(None, &chart).is_none());
        let empty: Vec<ScaleInfo<&str>> = Vec::new();
        assert!(scale_under_point(Some(Point::ORIGIN), &empty).is_none());
    }

    #[test]
    fn axis_getters_pick_first_by_orientation() {
        let mut chart = two_axes();
        chart.push(ScaleInfo::from_edges("x2", Axis::X, 0.0, 0.0, 100.0, 10.0));
        chart.insert(0, ScaleInfo::from_edges("y2", Axis::Y, 100.0, 0.0, 120.0, 200.0));
        assert_eq!(x_axis(&chart).map(|s| s.id), Some("xAxis"));
        assert_eq!(y_axis(&chart).map(|s| s.id), Some("y2"));
    }

    #[test]
    fn axis_getters_follow_layout_not_direction() {
        let chart = vec![ScaleInfo::from_edges("r", Axis::Y, 0.0, 0.0, 10.0, 10.0).with_horizontal(true)];
        assert_eq!(x_axis(&chart).map(|s| s.id), Some("r"));
        assert!(y_axis(&chart).is_none());
    }
}
