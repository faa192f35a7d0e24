// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only view of the host chart's scales.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::axis::Axis;

/// A scale (axis) owned by the host chart.
///
/// This crate never creates, mutates, or retains scales; it only reads them
/// for the duration of a single query.
pub trait Scale {
    /// Identifier type, unique within one chart.
    type Id: ?Sized;

    /// Returns the identifier of this scale.
    fn id(&self) -> &Self::Id;

    /// Returns the direction this scale runs along.
    fn axis(&self) -> Axis;

    /// Returns `true` if the scale is laid out horizontally.
    ///
    /// This is the layout classification used by the default direction gate
    /// in [`gesture_scales`](crate::gesture_scales), and may differ from
    /// [`Scale::axis`] for unusual layouts.
    fn is_horizontal(&self) -> bool {
        self.axis() == Axis::X
    }

    /// Returns the screen-space rectangle the scale occupies.
    ///
    /// `x0`/`x1` are the left and right edges, `y0`/`y1` the top and bottom
    /// edges, in the same coordinate space as pointer positions.
    fn bounds(&self) -> Rect;
}

/// The host chart's collection of scales.
pub trait Chart {
    /// Scale type exposed by the chart.
    type Scale: Scale;

    /// Iterates the chart's scales in collection order.
    ///
    /// The order is only significant for "first match wins" lookups.
    fn scales(&self) -> impl Iterator<Item = &Self::Scale>;
}

impl<S: Scale> Chart for [S] {
    type Scale = S;

    fn scales(&self) -> impl Iterator<Item = &S> {
        self.iter()
    }
}

impl<S: Scale> Chart for Vec<S> {
    type Scale = S;

    fn scales(&self) -> impl Iterator<Item = &S> {
        self.iter()
    }
}

/// Plain-data scale description.
///
/// Useful for hosts that keep their own scale objects elsewhere and only want
/// to hand this crate a snapshot of ids, directions, and bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleInfo<K> {
    /// Scale identifier.
    pub id: K,
    /// Direction the scale runs along.
    pub axis: Axis,
    /// Whether the scale is laid out horizontally.
    pub horizontal: bool,
    /// Occupied screen rectangle.
    pub bounds: Rect,
}

impl<K> ScaleInfo<K> {
    /// Creates a scale description, classifying it as horizontal when `axis` is [`Axis::X`].
    #[must_use]
    pub fn new(id: K, axis: Axis, bounds: Rect) -> Self {
        Self {
            id,
            axis,
            horizontal: axis == Axis::X,
            bounds,
        }
    }

    /// Creates a scale description from its four edges.
    #[must_use]
    pub fn from_edges(id: K, axis: Axis, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(id, axis, Rect::new(left, top, right, bottom))
    }

    /// Overrides the horizontal/vertical layout classification.
    #[must_use]
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }
}

impl<K> Scale for ScaleInfo<K> {
    type Id = K;

    fn id(&self) -> &K {
        &self.id
    }

    fn axis(&self) -> Axis {
        self.axis
    }

    fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
