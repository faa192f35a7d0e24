// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture_axes --heading-base-level=0

//! Understory Gesture Axes: choose which chart scales a pan or zoom gesture affects.
//!
//! This crate is a small, headless policy layer between user configuration and
//! a host chart's scales (axes). Given a direction mode, an optional
//! "over-scale" mode, and the pointer position, it decides which scales are in
//! play for the current gesture. It does **not** render, wire input events, or
//! perform any pan/zoom math; callers take the selected scales and transform
//! them however their chart requires.
//!
//! ## Concepts
//!
//! - [`Axis`]: a direction, `X` (horizontal) or `Y` (vertical).
//! - [`Directions`]: a set of enabled directions, parsed from mode strings such
//!   as `"x"`, `"y"` or `"xy"` by character membership.
//! - [`Mode`]: a fixed direction set, or a resolver callback evaluated against
//!   live chart state on every query. An absent mode enables every direction;
//!   [`Mode::Empty`] (the empty string) and [`Mode::Unrecognized`] enable
//!   none, and only [`Mode::Empty`] leaves the over-scale override inactive.
//! - [`Scale`] / [`Chart`]: read-only traits over the host's scale objects and
//!   their collection. [`ScaleInfo`] is a plain-data implementation.
//! - [`GestureOptions`]: the gesture's `enabled` switch, its top-level `mode`,
//!   and its `over_scale_mode`.
//! - [`debounce`]: a caller-clocked trailing-edge debounce for batching the
//!   follow-up work a burst of gesture events triggers.
//!
//! ## Over-scale mode
//!
//! Directions listed in the over-scale mode only act on the single scale under
//! the pointer. With `mode = "xy"` and `over_scale_mode = "y"`, zooming over a
//! y scale zooms just that scale, while x keeps zooming every x scale wherever
//! the pointer is.
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture_axes::{Axis, GestureOptions, ScaleInfo, gesture_scales};
//!
//! let chart = vec![
//!     ScaleInfo::from_edges("x", Axis::X, 0.0, 200.0, 100.0, 220.0),
//!     ScaleInfo::from_edges("left", Axis::Y, 0.0, 0.0, 20.0, 200.0),
//!     ScaleInfo::from_edges("right", Axis::Y, 100.0, 0.0, 120.0, 200.0),
//! ];
//! let options = GestureOptions::new().with_mode("xy").with_over_scale_mode("y");
//!
//! let ids = |p: Point| -> Vec<&'static str> {
//!     gesture_scales(&options, Some(p), &chart).iter().map(|s| s.id).collect()
//! };
//!
//! // Over the right y scale: only that scale.
//! assert_eq!(ids(Point::new(110.0, 50.0)), ["right"]);
//! // In the plot area: y is suppressed, x still applies.
//! assert_eq!(ids(Point::new(60.0, 60.0)), ["x"]);
//! ```
//!
//! ## Resolver modes
//!
//! A [`Mode::Resolver`] reads chart state at query time and is never cached,
//! so it runs again on every call:
//!
//! ```rust
//! use understory_gesture_axes::{Axis, Directions, Mode, ScaleInfo, direction_enabled};
//!
//! let chart = vec![ScaleInfo::from_edges("x", Axis::X, 0.0, 0.0, 100.0, 10.0)];
//! let mode = Mode::<Vec<ScaleInfo<&str>>>::resolver(|cx| {
//!     if cx.chart.len() > 1 { Directions::XY } else { Directions::X }
//! });
//! assert!(direction_enabled(Some(&mode), Axis::X, &chart));
//! assert!(!direction_enabled(Some(&mode), Axis::Y, &chart));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `serde`: deserialize [`GestureOptions`] and [`Directions`] from
//!   configuration. Empty strings, `false`, `0` and NaN become [`Mode::Empty`];
//!   other values that are not strings become [`Mode::Unrecognized`].
//!
//! Diagnostics go through the `log` facade: scale selection logs at trace
//! level, and an unrecognized mode value in configuration logs at warn level.
//! The crate never installs a logger.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
pub mod debounce;
mod locate;
mod mode;
mod scale;
mod select;
#[cfg(feature = "serde")]
mod serde_impls;

pub use axis::{Axis, Directions, ParseAxisError};
pub use locate::{scale_under_point, x_axis, y_axis};
pub use mode::{Mode, ModeContext, direction_enabled};
pub use scale::{Chart, Scale, ScaleInfo};
pub use select::{EnabledScales, GestureOptions, enabled_scales_by_point, gesture_scales};
