// Copyright 2026 the Riffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the gesture crate: drag samples, phases, classifiers, and
//! emitted events.
//!
//! ## Overview
//!
//! These types describe the drag protocol and its inputs/outputs. They are
//! referenced by [`CardInteraction`](crate::interaction::CardInteraction) and
//! used by downstream stack controllers and rendering shells.

use kurbo::{Point, Vec2};

/// A single in-progress drag sample, in surface-local coordinates.
///
/// Fed to [`CardInteraction::drag_update`](crate::interaction::CardInteraction::drag_update)
/// for every pointer move of an active drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragUpdate {
    /// Pointer location at drag start. Consulted once per drag to latch the
    /// rotation bias; later samples may repeat the same value.
    pub origin: Point,
    /// Cumulative translation since drag start.
    pub translation: Vec2,
}

/// Phases of a card's drag lifecycle.
///
/// Reported by [`CardInteraction::phase`](crate::interaction::CardInteraction::phase).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DragPhase {
    /// No drag in progress; translation is zero.
    Idle,
    /// Pointer is down and moving; translation tracks the gesture.
    Dragging,
    /// Threshold exceeded on release; the card is leaving the surface.
    Committing,
    /// Released below threshold; the visual snap-back is playing.
    Resetting,
}

/// Tilt orientation of the rotation visual.
///
/// Latched once per drag from the first sample's [`DragUpdate::origin`]:
/// counter-clockwise when the contact starts in the upper half of the
/// surface, clockwise otherwise. Affects only the rotation sign, never the
/// resolved direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RotationBias {
    /// Positive tilt for a rightward drag.
    Clockwise,
    /// Negative tilt for a rightward drag.
    CounterClockwise,
}

impl RotationBias {
    /// Sign factor applied to the rotation visual.
    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// Continuous feedback emitted while a drag has a resolvable direction.
///
/// Produced zero or more times per drag by
/// [`CardInteraction::drag_update`](crate::interaction::CardInteraction::drag_update);
/// the direction here is resolved *without* the distance threshold so shells
/// can show intent before the swipe would commit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeChanging<D> {
    /// Direction the drag currently points at.
    pub direction: D,
    /// Cumulative drag translation at this sample.
    pub translation: Vec2,
}

/// Terminal outcome of a drag, produced exactly once per drag-end.
///
/// Releasing below the threshold is not a separate cancellation path; it is
/// the [`SnapBack`](Self::SnapBack) outcome of the same machinery.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SwipeOutcome<D> {
    /// The drag exceeded the distance threshold and resolved to a direction.
    Commit {
        /// The committed direction.
        direction: D,
        /// Offscreen offset for the exit transition: twice the final
        /// translation, continuing the gesture outward.
        exit: Vec2,
    },
    /// The drag ended without a committed direction; the card returns to
    /// rest. Logical translation is already zero when this is emitted.
    SnapBack,
}

impl<D> SwipeOutcome<D> {
    /// The committed direction, or `None` for a snap-back.
    pub fn direction(&self) -> Option<&D> {
        match self {
            Self::Commit { direction, .. } => Some(direction),
            Self::SnapBack => None,
        }
    }

    /// Consume the outcome, yielding the committed direction if any.
    pub fn into_direction(self) -> Option<D> {
        match self {
            Self::Commit { direction, .. } => Some(direction),
            Self::SnapBack => None,
        }
    }

    /// Whether the swipe committed.
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Commit { .. })
    }
}

/// Map a drag angle to an application-defined direction.
///
/// The angle is expressed in degrees within `[0, 360)`, `0` pointing straight
/// up and increasing clockwise (see
/// [`drag_degrees`](crate::interaction::drag_degrees)). Implementations must
/// be total over that range; returning `None` means the angle corresponds to
/// no direction, and a drag at such an angle always ends in a snap-back.
///
/// Any `Fn(f64) -> Option<D>` is a classifier, so plain functions and
/// closures work directly; the [`directions`](crate::directions) module
/// provides ready-made vocabularies.
pub trait DirectionClassifier {
    /// Discrete direction type produced by this classifier.
    type Direction;

    /// Classify a normalized angle in degrees.
    fn classify(&self, degrees: f64) -> Option<Self::Direction>;
}

impl<D, F> DirectionClassifier for F
where
    F: Fn(f64) -> Option<D>,
{
    type Direction = D;

    fn classify(&self, degrees: f64) -> Option<D> {
        self(degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_signs() {
        assert_eq!(RotationBias::Clockwise.sign(), 1.0);
        assert_eq!(RotationBias::CounterClockwise.sign(), -1.0);
    }

    #[test]
    fn outcome_accessors() {
        let commit = SwipeOutcome::Commit {
            direction: 7_u32,
            exit: Vec2::new(10.0, 0.0),
        };
        assert!(commit.is_commit());
        assert_eq!(commit.direction(), Some(&7));
        assert_eq!(commit.into_direction(), Some(7));

        let snap: SwipeOutcome<u32> = SwipeOutcome::SnapBack;
        assert!(!snap.is_commit());
        assert_eq!(snap.direction(), None);
        assert_eq!(snap.into_direction(), None);
    }

    #[test]
    fn closures_are_classifiers() {
        let only_right = |degrees: f64| (degrees == 90.0).then_some("right");
        assert_eq!(only_right.classify(90.0), Some("right"));
        assert_eq!(only_right.classify(270.0), None);
    }
}
