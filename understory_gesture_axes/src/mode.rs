// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction mode specifiers and the direction predicate.

use alloc::sync::Arc;
use core::fmt;

use crate::axis::{Axis, Directions};
use crate::scale::Chart;

/// Context handed to a [`Mode::Resolver`] callback.
pub struct ModeContext<'a, C: Chart + ?Sized> {
    /// The chart being interacted with.
    pub chart: &'a C,
    /// The scale under the pointer, when resolving an over-scale mode.
    ///
    /// Always `None` for plain direction tests via [`direction_enabled`].
    pub scale: Option<&'a C::Scale>,
}

impl<'a, C: Chart + ?Sized> ModeContext<'a, C> {
    /// Creates a context for `chart` with no scale attached.
    #[must_use]
    pub fn new(chart: &'a C) -> Self {
        Self { chart, scale: None }
    }

    /// Attaches the scale currently under the pointer.
    #[must_use]
    pub fn with_scale(mut self, scale: Option<&'a C::Scale>) -> Self {
        self.scale = scale;
        self
    }
}

impl<C: Chart + ?Sized> Clone for ModeContext<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Chart + ?Sized> Copy for ModeContext<'_, C> {}

impl<C: Chart + ?Sized> fmt::Debug for ModeContext<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeContext")
            .field("has_scale", &self.scale.is_some())
            .finish_non_exhaustive()
    }
}

/// Which directions a pan or zoom gesture may act on.
///
/// An absent mode (`Option::None` wherever a mode is accepted) enables every
/// direction.
pub enum Mode<C: Chart + ?Sized> {
    /// A fixed direction set, usually parsed from a string such as `"xy"`.
    Fixed(Directions),
    /// A callback evaluated on every query.
    ///
    /// Results are never cached, so the callback may read mutable chart state
    /// such as the current zoom level. Callers must expect it to run several
    /// times per gesture.
    Resolver(Arc<dyn Fn(&ModeContext<'_, C>) -> Directions + Send + Sync>),
    /// An empty configuration value: the empty string, or a falsy value such
    /// as `false` or `0` in deserialized configuration.
    ///
    /// Enables no direction and leaves the over-scale override inactive.
    Empty,
    /// A configuration value that was neither a string nor a callback.
    ///
    /// Enables no direction.
    Unrecognized,
}

impl<C: Chart + ?Sized> Mode<C> {
    /// Creates a [`Mode::Resolver`] from a closure.
    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn(&ModeContext<'_, C>) -> Directions + Send + Sync + 'static,
    {
        Self::Resolver(Arc::new(f))
    }

    /// Returns the directions this mode enables in `cx`.
    ///
    /// Invokes the callback of a [`Mode::Resolver`] once. Returns `None` for
    /// [`Mode::Unrecognized`].
    #[must_use]
    pub fn resolve(&self, cx: &ModeContext<'_, C>) -> Option<Directions> {
        match self {
            Self::Fixed(dirs) => Some(*dirs),
            Self::Resolver(f) => Some(f(cx)),
            Self::Empty => Some(Directions::empty()),
            Self::Unrecognized => None,
        }
    }

    /// Returns `true` if `axis` is enabled under this mode in `cx`.
    #[must_use]
    pub fn enables(&self, axis: Axis, cx: &ModeContext<'_, C>) -> bool {
        self.resolve(cx).is_some_and(|dirs| dirs.enables(axis))
    }

    /// Returns `false` for [`Mode::Empty`].
    ///
    /// An empty mode is treated as unset by
    /// [`enabled_scales_by_point`](crate::enabled_scales_by_point). A
    /// non-empty string that lists no direction, such as `"z"`, is still set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

impl<C: Chart + ?Sized> Clone for Mode<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(dirs) => Self::Fixed(*dirs),
            Self::Resolver(f) => Self::Resolver(Arc::clone(f)),
            Self::Empty => Self::Empty,
            Self::Unrecognized => Self::Unrecognized,
        }
    }
}

impl<C: Chart + ?Sized> fmt::Debug for Mode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(dirs) => f.debug_tuple("Fixed").field(dirs).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
            Self::Empty => f.write_str("Empty"),
            Self::Unrecognized => f.write_str("Unrecognized"),
        }
    }
}

impl<C: Chart + ?Sized> From<Directions> for Mode<C> {
    fn from(dirs: Directions) -> Self {
        Self::Fixed(dirs)
    }
}

impl<C: Chart + ?Sized> From<Axis> for Mode<C> {
    fn from(axis: Axis) -> Self {
        Self::Fixed(axis.directions())
    }
}

impl<C: Chart + ?Sized> From<&str> for Mode<C> {
    fn from(mode: &str) -> Self {
        if mode.is_empty() {
            Self::Empty
        } else {
            Self::Fixed(Directions::from_mode_str(mode))
        }
    }
}

/// Returns `true` if `axis` is enabled under `mode` for `chart`.
///
/// - No mode enables every direction.
/// - A fixed mode enables the directions it contains.
/// - [`Mode::Empty`] enables nothing.
/// - A resolver is called with a context carrying `chart` (and no scale), and
///   its result is tested the same way. It is called on every invocation.
/// - [`Mode::Unrecognized`] enables nothing.
///
/// ```rust
/// use understory_gesture_axes::{Axis, Mode, ScaleInfo, direction_enabled};
///
/// let chart: Vec<ScaleInfo<&str>> = Vec::new();
/// assert!(direction_enabled(None, Axis::X, &chart));
/// assert!(direction_enabled(Some(&Mode::from("yx")), Axis::X, &chart));
/// assert!(!direction_enabled(Some(&Mode::from("y")), Axis::X, &chart));
/// assert!(!direction_enabled(Some(&Mode::Unrecognized), Axis::Y, &chart));
/// ```
#[must_use]
pub fn direction_enabled<C: Chart + ?Sized>(mode: Option<&Mode<C>>, axis: Axis, chart: &C) -> bool {
    match mode {
        None => true,
        Some(mode) => mode.enables(axis, &ModeContext::new(chart)),
    }
}
