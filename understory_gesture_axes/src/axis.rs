// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis directions and direction sets.

use core::fmt;
use core::str::FromStr;

/// One of the two screen directions a scale can run along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal direction.
    X,
    /// Vertical direction.
    Y,
}

impl Axis {
    /// Returns the single-letter name used in mode strings (`'x'` or `'y'`).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
        }
    }

    /// Returns the direction set containing only this axis.
    #[must_use]
    pub const fn directions(self) -> Directions {
        match self {
            Self::X => Directions::X,
            Self::Y => Directions::Y,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// Error returned when parsing an [`Axis`] from anything other than `"x"` or `"y"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAxisError(());

impl fmt::Display for ParseAxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected axis \"x\" or \"y\"")
    }
}

impl core::error::Error for ParseAxisError {}

impl FromStr for Axis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            _ => Err(ParseAxisError(())),
        }
    }
}

bitflags::bitflags! {
    /// Set of enabled directions, the parsed form of a mode string such as `"xy"`.
    ///
    /// Parsing is a character membership test: `'x'` anywhere in the string
    /// enables [`Directions::X`], `'y'` anywhere enables [`Directions::Y`], and
    /// every other character is ignored. `"yx"` and `"xy"` are therefore the
    /// same set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Directions: u8 {
        /// Horizontal direction enabled.
        const X = 0b01;
        /// Vertical direction enabled.
        const Y = 0b10;
        /// Both directions enabled.
        const XY = Self::X.bits() | Self::Y.bits();
    }
}

impl Directions {
    /// Builds a direction set from a mode string.
    #[must_use]
    pub fn from_mode_str(mode: &str) -> Self {
        mode.chars().fold(Self::empty(), |dirs, c| match c {
            'x' => dirs | Self::X,
            'y' => dirs | Self::Y,
            _ => dirs,
        })
    }

    /// Returns `true` if `axis` is part of this set.
    #[must_use]
    pub const fn enables(self, axis: Axis) -> bool {
        self.contains(axis.directions())
    }

    /// Returns the canonical mode string for this set.
    #[must_use]
    pub const fn as_mode_str(self) -> &'static str {
        match (self.contains(Self::X), self.contains(Self::Y)) {
            (false, false) => "",
            (true, false) => "x",
            (false, true) => "y",
            (true, true) => "xy",
        }
    }
}

impl From<Axis> for Directions {
    fn from(axis: Axis) -> Self {
        axis.directions()
    }
}

impl From<&str> for Directions {
    fn from(mode: &str) -> Self {
        Self::from_mode_str(mode)
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mode_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Directions};

    #[test]
    fn axis_parses_single_letters_only() {
        assert_eq!("x".parse::<Axis>(), Ok(Axis::X));
        assert_eq!("y".parse::<Axis>(), Ok(Axis::Y));
        assert!("xy".parse::<Axis>().is_err());
        assert!("X".parse::<Axis>().is_err());
        assert!("".parse::<Axis>().is_err());
    }

    #[test]
    fn mode_string_is_a_membership_test() {
        for mode in ["", "x", "y", "xy", "yx", "xx", "z", "xz", "ry", "zoom-y"] {
            let dirs = Directions::from_mode_str(mode);
            for axis in [Axis::X, Axis::Y] {
                assert_eq!(
                    dirs.enables(axis),
                    mode.contains(axis.as_char()),
                    "mode {mode:?}, axis {axis}"
                );
            }
        }
    }

    #[test]
    fn order_of_letters_does_not_matter() {
        assert_eq!(Directions::from("xy"), Directions::from("yx"));
        assert_eq!(Directions::from("yx"), Directions::XY);
    }

    #[test]
    fn canonical_mode_strings() {
        assert_eq!(Directions::empty().as_mode_str(), "");
        assert_eq!(Directions::from("yyx").as_mode_str(), "xy");
        assert_eq!(Directions::from(Axis::Y).as_mode_str(), "y");
    }
}
