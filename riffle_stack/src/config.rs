// Copyright 2026 the Riffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack configuration: validated construction, defaults, transition
//! descriptors.
//!
//! Configuration is immutable once built. Invalid values are rejected here,
//! at construction, never clamped later.

use thiserror::Error;

/// Interpolation curves a rendering shell can apply to transitions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Accelerating from rest.
    EaseIn,
    /// Decelerating into rest.
    EaseOut,
    /// Accelerating then decelerating.
    #[default]
    EaseInOut,
}

/// Timing descriptor for the commit and snap-back transitions.
///
/// The core decides *what* happens and updates logical state immediately;
/// this descriptor tells the shell *how long* the visual interpolation should
/// take. It is passed through verbatim.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Duration in seconds.
    pub duration: f64,
    /// Interpolation curve.
    pub easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: 0.3,
            easing: Easing::EaseInOut,
        }
    }
}

/// Configuration rejected at construction.
#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// `max_visible_cards` was zero; at least the top card must render.
    #[error("max_visible_cards must be at least 1")]
    NoVisibleCards,
    /// `swipe_threshold` was outside `(0, 1]` (or NaN).
    #[error("swipe_threshold must lie in (0, 1], got {0}")]
    ThresholdOutOfRange(f64),
}

/// Immutable stack-wide configuration.
///
/// Built once via [`StackConfig::new`] (or [`Default`]) and handed to the
/// stack controller. Field invariants are enforced here, so downstream code
/// never re-validates.
#[derive(Clone, Debug, PartialEq)]
pub struct StackConfig {
    max_visible_cards: usize,
    card_offset: f64,
    card_scale: f64,
    swipe_threshold: f64,
    transition: Transition,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            max_visible_cards: 3,
            card_offset: 10.0,
            card_scale: 0.1,
            swipe_threshold: 0.5,
            transition: Transition::default(),
        }
    }
}

impl StackConfig {
    /// Create a validated configuration.
    ///
    /// - `max_visible_cards`: how many stacked cards render, at least 1.
    /// - `card_offset`: vertical offset per depth, in surface units.
    /// - `card_scale`: per-depth scale shrink factor.
    /// - `swipe_threshold`: fraction of the shorter surface dimension a drag
    ///   must exceed to commit, in `(0, 1]`.
    pub fn new(
        max_visible_cards: usize,
        card_offset: f64,
        card_scale: f64,
        swipe_threshold: f64,
    ) -> Result<Self, ConfigError> {
        if max_visible_cards < 1 {
            return Err(ConfigError::NoVisibleCards);
        }
        // The negated form also rejects NaN.
        if !(swipe_threshold > 0.0 && swipe_threshold <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange(swipe_threshold));
        }
        Ok(Self {
            max_visible_cards,
            card_offset,
            card_scale,
            swipe_threshold,
            transition: Transition::default(),
        })
    }

    /// Replace the transition descriptor.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Number of stacked cards that render, at least 1.
    pub fn max_visible_cards(&self) -> usize {
        self.max_visible_cards
    }

    /// Vertical stacking offset per depth.
    pub fn card_offset(&self) -> f64 {
        self.card_offset
    }

    /// Per-depth scale shrink factor.
    pub fn card_scale(&self) -> f64 {
        self.card_scale
    }

    /// Commit threshold as a fraction of the shorter surface dimension.
    pub fn swipe_threshold(&self) -> f64 {
        self.swipe_threshold
    }

    /// Transition descriptor for commit and snap-back.
    pub fn transition(&self) -> Transition {
        self.transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = StackConfig::default();
        let rebuilt = StackConfig::new(
            config.max_visible_cards(),
            config.card_offset(),
            config.card_scale(),
            config.swipe_threshold(),
        );
        assert_eq!(rebuilt, Ok(config));
    }

    #[test]
    fn zero_visible_cards_is_rejected() {
        assert_eq!(
            StackConfig::new(0, 10.0, 0.1, 0.5),
            Err(ConfigError::NoVisibleCards)
        );
    }

    #[test]
    fn threshold_bounds_are_rejected_not_clamped() {
        assert_eq!(
            StackConfig::new(3, 10.0, 0.1, 0.0),
            Err(ConfigError::ThresholdOutOfRange(0.0))
        );
        assert_eq!(
            StackConfig::new(3, 10.0, 0.1, -0.5),
            Err(ConfigError::ThresholdOutOfRange(-0.5))
        );
        assert_eq!(
            StackConfig::new(3, 10.0, 0.1, 1.5),
            Err(ConfigError::ThresholdOutOfRange(1.5))
        );
        assert!(StackConfig::new(3, 10.0, 0.1, f64::NAN).is_err());
        // The closed upper bound is allowed.
        assert!(StackConfig::new(3, 10.0, 0.1, 1.0).is_ok());
    }

    #[test]
    fn transition_override() {
        let transition = Transition {
            duration: 0.12,
            easing: Easing::EaseOut,
        };
        let config = StackConfig::default().with_transition(transition);
        assert_eq!(config.transition(), transition);
    }
}
