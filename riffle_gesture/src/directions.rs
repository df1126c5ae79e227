// Copyright 2026 the Riffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made direction vocabularies.
//!
//! Each enum maps the normalized drag angle (degrees in `[0, 360)`, up = 0,
//! clockwise) onto its variants with half-open sectors. The `from_degrees`
//! associated functions are plain `fn(f64) -> Option<Self>` items, so they
//! can be passed anywhere a
//! [`DirectionClassifier`](crate::types::DirectionClassifier) is expected.
//!
//! Applications with richer needs (dead zones, asymmetric sectors, dynamic
//! vocabularies) supply their own classifier instead.

/// Horizontal-only swipes: the classic accept/reject pair.
///
/// Right on `[45, 135)`, left on `[225, 315)`; vertical-ish drags map to
/// `None` and always snap back.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Horizontal {
    /// Swipe toward the left edge.
    Left,
    /// Swipe toward the right edge.
    Right,
}

impl Horizontal {
    /// Classify a normalized angle in degrees.
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        if (45.0..135.0).contains(&degrees) {
            Some(Self::Right)
        } else if (225.0..315.0).contains(&degrees) {
            Some(Self::Left)
        } else {
            None
        }
    }
}

/// Four-way swipes, quarter sectors centered on each axis.
///
/// Total over `[0, 360)`: every drag resolves to some direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Cardinal {
    /// Swipe toward the top edge.
    Up,
    /// Swipe toward the bottom edge.
    Down,
    /// Swipe toward the left edge.
    Left,
    /// Swipe toward the right edge.
    Right,
}

impl Cardinal {
    /// Classify a normalized angle in degrees.
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        let direction = if !(45.0..315.0).contains(&degrees) {
            Self::Up
        } else if degrees < 135.0 {
            Self::Right
        } else if degrees < 225.0 {
            Self::Down
        } else {
            Self::Left
        };
        Some(direction)
    }
}

/// Eight-way swipes, 45° sectors centered on each compass point.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Compass8 {
    /// Swipe toward the top edge.
    Up,
    /// Swipe toward the top-right corner.
    UpRight,
    /// Swipe toward the right edge.
    Right,
    /// Swipe toward the bottom-right corner.
    DownRight,
    /// Swipe toward the bottom edge.
    Down,
    /// Swipe toward the bottom-left corner.
    DownLeft,
    /// Swipe toward the left edge.
    Left,
    /// Swipe toward the top-left corner.
    UpLeft,
}

impl Compass8 {
    /// Classify a normalized angle in degrees.
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        let direction = if !(22.5..337.5).contains(&degrees) {
            Self::Up
        } else if degrees < 67.5 {
            Self::UpRight
        } else if degrees < 112.5 {
            Self::Right
        } else if degrees < 157.5 {
            Self::DownRight
        } else if degrees < 202.5 {
            Self::Down
        } else if degrees < 247.5 {
            Self::DownLeft
        } else if degrees < 292.5 {
            Self::Left
        } else {
            Self::UpLeft
        };
        Some(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_sectors_are_half_open() {
        assert_eq!(Horizontal::from_degrees(45.0), Some(Horizontal::Right));
        assert_eq!(Horizontal::from_degrees(90.0), Some(Horizontal::Right));
        assert_eq!(Horizontal::from_degrees(135.0), None);
        assert_eq!(Horizontal::from_degrees(225.0), Some(Horizontal::Left));
        assert_eq!(Horizontal::from_degrees(314.9), Some(Horizontal::Left));
        assert_eq!(Horizontal::from_degrees(315.0), None);
        assert_eq!(Horizontal::from_degrees(0.0), None);
        assert_eq!(Horizontal::from_degrees(180.0), None);
    }

    #[test]
    fn cardinal_is_total() {
        for i in 0..3600 {
            let degrees = i as f64 / 10.0;
            assert!(Cardinal::from_degrees(degrees).is_some(), "gap at {degrees}");
        }
    }

    #[test]
    fn cardinal_sector_boundaries() {
        assert_eq!(Cardinal::from_degrees(0.0), Some(Cardinal::Up));
        assert_eq!(Cardinal::from_degrees(44.9), Some(Cardinal::Up));
        assert_eq!(Cardinal::from_degrees(45.0), Some(Cardinal::Right));
        assert_eq!(Cardinal::from_degrees(135.0), Some(Cardinal::Down));
        assert_eq!(Cardinal::from_degrees(225.0), Some(Cardinal::Left));
        assert_eq!(Cardinal::from_degrees(315.0), Some(Cardinal::Up));
        assert_eq!(Cardinal::from_degrees(359.9), Some(Cardinal::Up));
    }

    #[test]
    fn compass8_sector_boundaries() {
        assert_eq!(Compass8::from_degrees(0.0), Some(Compass8::Up));
        assert_eq!(Compass8::from_degrees(22.5), Some(Compass8::UpRight));
        assert_eq!(Compass8::from_degrees(90.0), Some(Compass8::Right));
        assert_eq!(Compass8::from_degrees(157.5), Some(Compass8::Down));
        assert_eq!(Compass8::from_degrees(202.5), Some(Compass8::DownLeft));
        assert_eq!(Compass8::from_degrees(270.0), Some(Compass8::Left));
        assert_eq!(Compass8::from_degrees(292.5), Some(Compass8::UpLeft));
        assert_eq!(Compass8::from_degrees(337.5), Some(Compass8::Up));
    }
}
