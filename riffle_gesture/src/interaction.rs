// Copyright 2026 the Riffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-card drag state machine.
//!
//! ## Overview
//!
//! [`CardInteraction`] converts a raw drag-event stream into directional
//! intent and visual feedback for exactly one card. It owns only transient
//! state (translation, rotation bias, phase); the surface size and the
//! classifier are passed in at evaluation time by the caller.
//!
//! ## Lifecycle
//!
//! `Idle → Dragging` on the first sample of a drag, then per sample an
//! unthresholded [`SwipeChanging`] is emitted whenever a direction resolves.
//! On release, [`CardInteraction::drag_end`] applies the distance threshold
//! and transitions to `Committing` (card exits) or `Resetting` (snap-back).
//! `Resetting` returns to `Idle` when the owner reports the snap-back
//! transition finished. A sample arriving in any non-`Dragging` phase starts
//! a fresh drag; prior residue is discarded.
//!
//! Logical state updates immediately at each decision. Visual interpolation
//! (exit, snap-back) is the shell's job and never gates input handling.

use kurbo::{Size, Vec2};

use crate::types::{
    DirectionClassifier, DragPhase, DragUpdate, RotationBias, SwipeChanging, SwipeOutcome,
};

/// Tilt magnitude in degrees for a drag spanning the full surface width.
const TILT_DEGREES: f64 = 25.0;

/// Angle of a drag translation, in degrees within `[0, 360)`.
///
/// Straight up maps to `0` and angles increase clockwise, so a purely
/// rightward drag is `90`, downward `180`, leftward `270`. Classifiers are
/// indexed by this convention.
pub fn drag_degrees(translation: Vec2) -> f64 {
    // atan2(dx, -dy) puts "up" at zero with clockwise-increasing angles.
    let degrees = Vec2::new(-translation.y, translation.x).atan2().to_degrees();
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}

/// Drag state machine for the single topmost card.
///
/// ## Usage
///
/// - Construct with [`CardInteraction::new`] when a card becomes topmost; the
///   instance has no identity beyond that card's top-of-stack tenure.
/// - Feed pointer moves to [`CardInteraction::drag_update`] and the release
///   to [`CardInteraction::drag_end`]; dispatch the returned events.
/// - Report the end of the snap-back animation with
///   [`CardInteraction::finish_transition`].
///
/// Non-top cards never receive drag events; their owner simply does not
/// route input to them.
#[derive(Clone, Debug)]
pub struct CardInteraction {
    swipe_threshold: f64,
    translation: Vec2,
    bias: Option<RotationBias>,
    phase: DragPhase,
}

impl CardInteraction {
    /// Create an idle interaction.
    ///
    /// `swipe_threshold` is the fraction of the shorter surface dimension a
    /// drag must exceed to commit, expected in `(0, 1]`.
    pub fn new(swipe_threshold: f64) -> Self {
        debug_assert!(
            swipe_threshold > 0.0 && swipe_threshold <= 1.0,
            "swipe_threshold must lie in (0, 1]"
        );
        Self {
            swipe_threshold,
            translation: Vec2::ZERO,
            bias: None,
            phase: DragPhase::Idle,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Cumulative drag translation. Zero outside an active drag.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Rotation bias latched for the current drag, if one has started.
    pub fn rotation_bias(&self) -> Option<RotationBias> {
        self.bias
    }

    /// Tilt of the card in degrees for the current translation.
    ///
    /// Proportional to the horizontal translation relative to the surface
    /// width, signed by the rotation bias. Zero for a degenerate width.
    pub fn rotation_degrees(&self, surface: Size) -> f64 {
        if surface.width <= 0.0 {
            return 0.0;
        }
        let sign = self.bias.unwrap_or(RotationBias::Clockwise).sign();
        (self.translation.x / surface.width) * TILT_DEGREES * sign
    }

    /// Resolve the current translation to a direction.
    ///
    /// Classification happens first; a `None` from the classifier is final
    /// regardless of `use_threshold`. With `use_threshold`, the drag distance
    /// must strictly exceed `surface.min_side() * swipe_threshold`. A
    /// non-positive shorter dimension makes the threshold unreachable rather
    /// than dividing by zero.
    pub fn resolve<C: DirectionClassifier>(
        &self,
        classifier: &C,
        surface: Size,
        use_threshold: bool,
    ) -> Option<C::Direction> {
        let direction = classifier.classify(drag_degrees(self.translation))?;
        if !use_threshold {
            return Some(direction);
        }
        let min_side = surface.min_side();
        if min_side <= 0.0 {
            return None;
        }
        (self.translation.hypot() > min_side * self.swipe_threshold).then_some(direction)
    }

    /// Apply one drag sample.
    ///
    /// The first sample of a drag (any non-`Dragging` phase) resets residue
    /// and latches the rotation bias from `update.origin`: counter-clockwise
    /// for a contact in the upper half of the surface, clockwise otherwise.
    /// Returns a [`SwipeChanging`] whenever the unthresholded direction
    /// resolves.
    pub fn drag_update<C: DirectionClassifier>(
        &mut self,
        classifier: &C,
        surface: Size,
        update: DragUpdate,
    ) -> Option<SwipeChanging<C::Direction>> {
        if self.phase != DragPhase::Dragging {
            self.phase = DragPhase::Dragging;
            self.bias = Some(if update.origin.y < surface.height / 2.0 {
                RotationBias::CounterClockwise
            } else {
                RotationBias::Clockwise
            });
        }
        self.translation = update.translation;
        self.resolve(classifier, surface, false)
            .map(|direction| SwipeChanging {
                direction,
                translation: self.translation,
            })
    }

    /// End the drag and decide its outcome.
    ///
    /// Emits exactly one [`SwipeOutcome`]: a commit with the exit offset when
    /// the thresholded direction resolves, otherwise a snap-back. On
    /// snap-back the logical translation resets to zero immediately; the
    /// phase stays `Resetting` until [`CardInteraction::finish_transition`].
    pub fn drag_end<C: DirectionClassifier>(
        &mut self,
        classifier: &C,
        surface: Size,
    ) -> SwipeOutcome<C::Direction> {
        match self.resolve(classifier, surface, true) {
            Some(direction) => {
                let exit = self.translation * 2.0;
                self.phase = DragPhase::Committing;
                SwipeOutcome::Commit { direction, exit }
            }
            None => {
                self.translation = Vec2::ZERO;
                self.bias = None;
                self.phase = DragPhase::Resetting;
                SwipeOutcome::SnapBack
            }
        }
    }

    /// Report that the snap-back transition finished, returning to `Idle`.
    ///
    /// A committing interaction is not reset here; its owner discards it
    /// when the card leaves the visible set.
    pub fn finish_transition(&mut self) {
        if self.phase == DragPhase::Resetting {
            self.phase = DragPhase::Idle;
        }
    }
}
