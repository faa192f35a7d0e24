// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture options and scale selection.
//!
//! [`enabled_scales_by_point`] is the over-scale override path on its own;
//! [`gesture_scales`] combines it with the top-level direction gate the way a
//! pan or zoom handler needs it.

use core::fmt;

use kurbo::Point;
use smallvec::SmallVec;

use crate::axis::Axis;
use crate::locate::scale_under_point;
use crate::mode::{Mode, ModeContext, direction_enabled};
use crate::scale::{Chart, Scale};

/// Scales selected for one gesture, in chart collection order.
pub type EnabledScales<'a, S> = SmallVec<[&'a S; 4]>;

/// Pan or zoom configuration consulted when selecting scales.
///
/// With the `serde` feature this deserializes from a map with optional
/// `enabled`, `mode`, and `over_scale_mode` (alias `overScaleMode`) keys.
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, bound(deserialize = ""))
)]
pub struct GestureOptions<C: Chart + ?Sized> {
    /// Master switch for the gesture.
    pub enabled: bool,
    /// Directions the gesture acts on. `None` enables every direction.
    pub mode: Option<Mode<C>>,
    /// Directions that only act on the scale under the pointer.
    ///
    /// For example, with `mode = "xy"` and `over_scale_mode = "y"`, x keeps
    /// working on every scale while y only works on the y scale the pointer
    /// is over.
    #[cfg_attr(feature = "serde", serde(alias = "overScaleMode"))]
    pub over_scale_mode: Option<Mode<C>>,
}

impl<C: Chart + ?Sized> GestureOptions<C> {
    /// Creates enabled options with no modes set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            mode: None,
            over_scale_mode: None,
        }
    }

    /// Sets the master switch.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the top-level direction mode.
    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<Mode<C>>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Sets the over-scale direction mode.
    #[must_use]
    pub fn with_over_scale_mode(mut self, mode: impl Into<Mode<C>>) -> Self {
        self.over_scale_mode = Some(mode.into());
        self
    }

    /// Returns `true` if `axis` passes the top-level direction gate.
    #[must_use]
    pub fn direction_enabled(&self, axis: Axis, chart: &C) -> bool {
        direction_enabled(self.mode.as_ref(), axis, chart)
    }
}

impl<C: Chart + ?Sized> Default for GestureOptions<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Chart + ?Sized> Clone for GestureOptions<C> {
    fn clone(&self) -> Self {
        Self {
            enabled: self.enabled,
            mode: self.mode.clone(),
            over_scale_mode: self.over_scale_mode.clone(),
        }
    }
}

impl<C: Chart + ?Sized> fmt::Debug for GestureOptions<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureOptions")
            .field("enabled", &self.enabled)
            .field("mode", &self.mode)
            .field("over_scale_mode", &self.over_scale_mode)
            .finish()
    }
}

/// Selects scales through the over-scale override.
///
/// Returns `None` when the gesture is disabled or no over-scale mode is set
/// ([`Mode::Empty`] counts as unset); callers then fall back to gating every
/// scale with [`direction_enabled`] on the top-level mode. Any other mode,
/// including a string such as `"z"` that names no direction, is active.
///
/// Otherwise the over-scale mode is resolved once, with the scale under
/// `point` (if any) in its context:
/// - If a scale is under the pointer and its axis is enabled, only that scale
///   is returned.
/// - Else every scale whose axis is *not* enabled is returned. Directions
///   named by the over-scale mode are suppressed unless the pointer is right
///   over a matching scale; all other directions keep acting on every scale.
///
/// ```rust
/// use kurbo::Point;
/// use understory_gesture_axes::{Axis, GestureOptions, ScaleInfo, enabled_scales_by_point};
///
/// let chart = vec![
///     ScaleInfo::from_edges("x", Axis::X, 0.0, 200.0, 100.0, 220.0),
///     ScaleInfo::from_edges("y", Axis::Y, 0.0, 0.0, 20.0, 200.0),
/// ];
/// let options = GestureOptions::new().with_over_scale_mode("y");
///
/// let over_y = enabled_scales_by_point(&options, Some(Point::new(10.0, 50.0)), &chart).unwrap();
/// assert_eq!(over_y.iter().map(|s| s.id).collect::<Vec<_>>(), ["y"]);
///
/// let elsewhere = enabled_scales_by_point(&options, Some(Point::new(500.0, 500.0)), &chart).unwrap();
/// assert_eq!(elsewhere.iter().map(|s| s.id).collect::<Vec<_>>(), ["x"]);
/// ```
#[must_use]
pub fn enabled_scales_by_point<'a, C: Chart + ?Sized>(
    options: &GestureOptions<C>,
    point: Option<Point>,
    chart: &'a C,
) -> Option<EnabledScales<'a, C::Scale>> {
    if !options.enabled {
        return None;
    }
    let over_scale_mode = options.over_scale_mode.as_ref().filter(|m| m.is_set())?;

    let located = scale_under_point(point, chart);
    let cx = ModeContext::new(chart).with_scale(located);
    let dirs = over_scale_mode.resolve(&cx);
    let enables = |axis: Axis| dirs.is_some_and(|d| d.enables(axis));

    if let Some(scale) = located
        && enables(scale.axis())
    {
        log::trace!("gesture locked to the {} scale under the pointer", scale.axis());
        let mut only = EnabledScales::new();
        only.push(scale);
        return Some(only);
    }

    log::trace!(
        "no matching scale under the pointer (located: {}), using scales outside over-scale mode {:?}",
        located.is_some(),
        dirs,
    );
    Some(
        chart
            .scales()
            .filter(|scale| !enables(scale.axis()))
            .collect(),
    )
}

/// Selects the scales a pan or zoom gesture should transform.
///
/// Candidates are the result of [`enabled_scales_by_point`], or every scale
/// when the override does not apply. A candidate is kept when it is laid out
/// horizontally and x passes the top-level mode, or laid out vertically and y
/// passes. The top-level mode is evaluated once per direction per call.
/// A disabled gesture selects nothing.
///
/// ```rust
/// use kurbo::Point;
/// use understory_gesture_axes::{Axis, GestureOptions, ScaleInfo, gesture_scales};
///
/// let chart = vec![
///     ScaleInfo::from_edges("x", Axis::X, 0.0, 200.0, 100.0, 220.0),
///     ScaleInfo::from_edges("y", Axis::Y, 0.0, 0.0, 20.0, 200.0),
/// ];
/// let options = GestureOptions::new().with_mode("x");
/// let scales = gesture_scales(&options, Some(Point::new(50.0, 50.0)), &chart);
/// assert_eq!(scales.iter().map(|s| s.id).collect::<Vec<_>>(), ["x"]);
/// ```
#[must_use]
pub fn gesture_scales<'a, C: Chart + ?Sized>(
    options: &GestureOptions<C>,
    point: Option<Point>,
    chart: &'a C,
) -> EnabledScales<'a, C::Scale> {
    if !options.enabled {
        return EnabledScales::new();
    }
    let x_enabled = options.direction_enabled(Axis::X, chart);
    let y_enabled = options.direction_enabled(Axis::Y, chart);
    let keep = |scale: &&'a C::Scale| {
        if scale.is_horizontal() {
            x_enabled
        } else {
            y_enabled
        }
    };

    match enabled_scales_by_point(options, point, chart) {
        Some(mut candidates) => {
            candidates.retain(|scale| keep(&*scale));
            candidates
        }
        None => chart.scales().filter(keep).collect(),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use kurbo::Point;

    use super::{GestureOptions, enabled_scales_by_point, gesture_scales};
    use crate::axis::{Axis, Directions};
    use crate::mode::Mode;
    use crate::scale::ScaleInfo;

    type TestChart = Vec<ScaleInfo<&'static str>>;

    fn chart() -> TestChart {
        vec![
            ScaleInfo::from_edges("xAxis", Axis::X, 0.0, 200.0, 100.0, 220.0),
            ScaleInfo::from_edges("yAxis", Axis::Y, 0.0, 0.0, 20.0, 200.0),
        ]
    }

    fn ids(scales: Option<super::EnabledScales<'_, ScaleInfo<&'static str>>>) -> Option<Vec<&'static str>> {
        scales.map(|s| s.iter().map(|s| s.id).collect())
    }

    #[test]
    fn disabled_or_unset_override_returns_none() {
        let chart = chart();
        let p = Some(Point::new(10.0, 50.0));

        let disabled = GestureOptions::new().with_enabled(false).with_over_scale_mode("y");
        assert!(enabled_scales_by_point(&disabled, p, &chart).is_none());

        let unset = GestureOptions::<TestChart>::new();
        assert!(enabled_scales_by_point(&unset, p, &chart).is_none());

        let empty = GestureOptions::new().with_over_scale_mode("");
        assert!(enabled_scales_by_point(&empty, p, &chart).is_none());

        let mut cleared = GestureOptions::new();
        cleared.over_scale_mode = Some(Mode::Empty);
        assert!(enabled_scales_by_point(&cleared, p, &chart).is_none());
    }

    #[test]
    fn override_naming_no_direction_keeps_every_scale() {
        let chart = chart();
        let options = GestureOptions::new().with_over_scale_mode("z");
        let got = enabled_scales_by_point(&options, Some(Point::new(10.0, 50.0)), &chart);
        assert_eq!(ids(got), Some(vec!["xAxis", "yAxis"]));
        let got = enabled_scales_by_point(&options, None, &chart);
        assert_eq!(ids(got), Some(vec!["xAxis", "yAxis"]));
    }

    #[test]
    fn pointer_over_matching_scale_locks_to_it() {
        let chart = chart();
        let options = GestureOptions::new().with_over_scale_mode("y");
        let got = enabled_scales_by_point(&options, Some(Point::new(10.0, 50.0)), &chart);
        assert_eq!(ids(got), Some(vec!["yAxis"]));
    }

    #[test]
    fn pointer_over_other_scale_falls_back_to_unlisted_directions() {
        let chart = chart();
        let options = GestureOptions::new().with_over_scale_mode("y");
        let got = enabled_scales_by_point(&options, Some(Point::new(50.0, 210.0)), &chart);
        assert_eq!(ids(got), Some(vec!["xAxis"]));
    }

    #[test]
    fn pointer_off_every_scale_falls_back() {
        let chart = chart();
        let options = GestureOptions::new().with_over_scale_mode("y");
        let got = enabled_scales_by_point(&options, Some(Point::new(500.0, 500.0)), &chart);
        assert_eq!(ids(got), Some(vec!["xAxis"]));
        let got = enabled_scales_by_point(&options, None, &chart);
        assert_eq!(ids(got), Some(vec!["xAxis"]));
    }

    #[test]
    fn both_directions_listed_leaves_nothing_off_scale() {
        let chart = chart();
        let options = GestureOptions::new().with_over_scale_mode("xy");
        let got = enabled_scales_by_point(&options, Some(Point::new(500.0, 500.0)), &chart);
        assert_eq!(ids(got), Some(vec![]));
        let got = enabled_scales_by_point(&options, Some(Point::new(50.0, 210.0)), &chart);
        assert_eq!(ids(got), Some(vec!["xAxis"]));
    }

    #[test]
    fn unrecognized_override_keeps_every_scale() {
        let chart = chart();
        let mut options = GestureOptions::new();
        options.over_scale_mode = Some(Mode::Unrecognized);
        let got = enabled_scales_by_point(&options, Some(Point::new(10.0, 50.0)), &chart);
        assert_eq!(ids(got), Some(vec!["xAxis", "yAxis"]));
    }

    #[test]
    fn resolver_runs_once_and_sees_located_scale() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let chart = chart();
        let options = GestureOptions::new().with_over_scale_mode(Mode::<TestChart>::resolver(|cx| {
            CALLS.fetch_add(1, Ordering::Relaxed);
            match cx.scale {
                Some(scale) if scale.id == "yAxis" => Directions::Y,
                Some(_) => Directions::X,
                None => Directions::empty(),
            }
        }));

        let got = enabled_scales_by_point(&options, Some(Point::new(10.0, 50.0)), &chart);
        assert_eq!(ids(got), Some(vec!["yAxis"]));
        assert_eq!(CALLS.load(Ordering::Relaxed), 1);

        let got = enabled_scales_by_point(&options, Some(Point::new(50.0, 210.0)), &chart);
        assert_eq!(ids(got), Some(vec!["xAxis"]));

        // Nothing under the pointer: the resolver enables nothing, so every scale stays in play.
        let got = enabled_scales_by_point(&options, Some(Point::new(500.0, 500.0)), &chart);
        assert_eq!(ids(got), Some(vec!["xAxis", "yAxis"]));
        assert_eq!(CALLS.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn gesture_scales_without_override_gates_by_layout() {
        let chart = chart();
        let all = GestureOptions::<TestChart>::new();
        assert_eq!(ids(Some(gesture_scales(&all, None, &chart))), Some(vec!["xAxis", "yAxis"]));

        let y_only = GestureOptions::new().with_mode("y");
        assert_eq!(ids(Some(gesture_scales(&y_only, None, &chart))), Some(vec!["yAxis"]));

        let off = GestureOptions::new().with_enabled(false).with_mode("xy");
        assert!(gesture_scales(&off, None, &chart).is_empty());
    }

    #[test]
    fn gesture_scales_applies_mode_to_override_result() {
        let chart = chart();
        let options = GestureOptions::new().with_mode("xy").with_over_scale_mode("y");
        let over_y = gesture_scales(&options, Some(Point::new(10.0, 50.0)), &chart);
        assert_eq!(ids(Some(over_y)), Some(vec!["yAxis"]));
        let elsewhere = gesture_scales(&options, Some(Point::new(60.0, 60.0)), &chart);
        assert_eq!(ids(Some(elsewhere)), Some(vec!["xAxis"]));

        let y_mode = GestureOptions::new().with_mode("y").with_over_scale_mode("y");
        assert!(gesture_scales(&y_mode, Some(Point::new(60.0, 60.0)), &chart).is_empty());
    }
}
