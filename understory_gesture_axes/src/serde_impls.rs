// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration support behind the `serde` feature.
//!
//! Modes are written as strings (`"x"`, `"y"`, `"xy"`). An empty string and
//! the falsy values `false`, `0`, `0.0` and NaN become [`Mode::Empty`], which
//! leaves the over-scale override inactive. A mode field holding any other kind
//! of value, such as a non-zero number or a list, does not fail the whole
//! configuration: it becomes [`Mode::Unrecognized`], which enables no
//! direction.

use core::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::axis::Directions;
use crate::mode::Mode;
use crate::scale::Chart;

impl Serialize for Directions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_mode_str())
    }
}

impl<'de> Deserialize<'de> for Directions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DirectionsVisitor;

        impl Visitor<'_> for DirectionsVisitor {
            type Value = Directions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a direction string such as \"xy\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Directions, E> {
                Ok(Directions::from_mode_str(v))
            }
        }

        deserializer.deserialize_str(DirectionsVisitor)
    }
}

struct ModeVisitor;

impl ModeVisitor {
    fn empty(kind: &str) -> Kind {
        log::trace!("direction mode given as {kind}, treating it as empty");
        Kind::Empty
    }

    fn unrecognized(kind: &str) -> Kind {
        log::warn!("direction mode given as {kind}, expected a string; disabling its directions");
        Kind::Unrecognized
    }
}

/// Chart-independent result of visiting a mode value.
enum Kind {
    Fixed(Directions),
    Empty,
    Unrecognized,
}

impl<'de> Visitor<'de> for ModeVisitor {
    type Value = Kind;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a direction mode string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Kind, E> {
        if v.is_empty() {
            return Ok(Kind::Empty);
        }
        Ok(Kind::Fixed(Directions::from_mode_str(v)))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Kind, E> {
        Ok(if v {
            Self::unrecognized("a boolean")
        } else {
            Self::empty("false")
        })
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Kind, E> {
        Ok(if v == 0 {
            Self::empty("zero")
        } else {
            Self::unrecognized("a number")
        })
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Kind, E> {
        Ok(if v == 0 {
            Self::empty("zero")
        } else {
            Self::unrecognized("a number")
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Kind, E> {
        // Matches both signed zeros.
        Ok(if v == 0.0 || v.is_nan() {
            Self::empty("zero or NaN")
        } else {
            Self::unrecognized("a number")
        })
    }

    fn visit_unit<E: de::Error>(self) -> Result<Kind, E> {
        Ok(Self::empty("a unit value"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Kind, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Self::unrecognized("a sequence"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Kind, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Self::unrecognized("a map"))
    }
}

impl<'de, C: Chart + ?Sized> Deserialize<'de> for Mode<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match deserializer.deserialize_any(ModeVisitor)? {
            Kind::Fixed(dirs) => Self::Fixed(dirs),
            Kind::Empty => Self::Empty,
            Kind::Unrecognized => Self::Unrecognized,
        })
    }
}
