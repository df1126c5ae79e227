// Copyright 2026 the Riffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack controller implementation.
//!
//! ## Overview
//!
//! [`CardStack`] owns the ordered card data and the cursor into it, computes
//! the visible window with per-depth poses, routes drag events to the single
//! live interaction of the top card, and advances the cursor when a swipe
//! commits.
//!
//! ## Event flow
//!
//! The shell feeds raw drag events in and dispatches the returned values:
//! [`SwipeChange`] values stream while a drag points somewhere,
//! [`SwipeEnd`] reports the outcome once per drag. State mutation is
//! synchronous; animations play against the already-updated logical state
//! and never gate the next input event.

use alloc::vec::Vec;

use kurbo::{Size, Vec2};
use riffle_gesture::{CardInteraction, DirectionClassifier, DragUpdate};

use crate::config::StackConfig;
use crate::types::{CardPose, Keyed, SwipeChange, SwipeEnd, VisibleCard};

/// Controller for a swipeable stack of cards.
///
/// ## Usage
///
/// - Construct with [`CardStack::new`] from a validated [`StackConfig`], a
///   [`DirectionClassifier`], and the ordered elements.
/// - Render from [`CardStack::visible_cards`] each frame, painting in
///   iteration order (back-to-front).
/// - Route the top surface's drag stream to [`CardStack::drag_update`] /
///   [`CardStack::drag_end`] and forward the returned events to the host.
/// - Report transition completion via [`CardStack::transition_finished`].
///
/// The cursor only ever moves forward, one element per committed swipe;
/// there is no wraparound and no undo. Once the cursor passes the end, the
/// stack is exhausted: nothing renders and drag events become no-ops.
pub struct CardStack<T, C: DirectionClassifier> {
    config: StackConfig,
    classifier: C,
    cards: Vec<T>,
    cursor: usize,
    top: CardInteraction,
}

impl<T, C: DirectionClassifier> core::fmt::Debug for CardStack<T, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CardStack")
            .field("len", &self.cards.len())
            .field("cursor", &self.cursor)
            .field("top", &self.top)
            .finish_non_exhaustive()
    }
}

impl<T: Keyed, C: DirectionClassifier> CardStack<T, C> {
    /// Create a stack over `cards`, topmost first.
    pub fn new(config: StackConfig, classifier: C, cards: Vec<T>) -> Self {
        let top = CardInteraction::new(config.swipe_threshold());
        Self {
            config,
            classifier,
            cards,
            cursor: 0,
            top,
        }
    }

    /// The configuration this stack was built with.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Total number of elements, swiped ones included.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the stack was created without any elements.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Position of the current top card within the sequence.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of cards not yet swiped away.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Whether every card has been swiped away.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.cards.len()
    }

    /// The current top element, if the stack is not exhausted.
    pub fn top_element(&self) -> Option<&T> {
        self.cards.get(self.cursor)
    }

    /// Read-only view of the top card's interaction state.
    pub fn top_interaction(&self) -> &CardInteraction {
        &self.top
    }

    fn window_len(&self) -> usize {
        self.config.max_visible_cards().min(self.remaining())
    }

    fn pose(&self, depth: usize, surface: Size) -> CardPose {
        let d = depth as f64;
        let (translation, rotation) = if depth == 0 {
            (self.top.translation(), self.top.rotation_degrees(surface))
        } else {
            (Vec2::ZERO, 0.0)
        };
        CardPose {
            y_offset: d * self.config.card_offset(),
            scale: 1.0 - self.config.card_scale() * d,
            translation,
            rotation,
        }
    }

    /// The visible window, back-to-front.
    ///
    /// Yields `min(max_visible_cards, remaining)` entries: deepest first,
    /// top card last, so a shell painting in iteration order gets correct
    /// occlusion. The top entry carries the live thresholded direction for
    /// overlay feedback; `surface` is the top card's measured size.
    pub fn visible_cards(
        &self,
        surface: Size,
    ) -> impl Iterator<Item = VisibleCard<'_, T, C::Direction>> {
        (0..self.window_len()).rev().map(move |depth| {
            let direction = (depth == 0)
                .then(|| self.top.resolve(&self.classifier, surface, true))
                .flatten();
            VisibleCard {
                element: &self.cards[self.cursor + depth],
                depth,
                pose: self.pose(depth, surface),
                direction,
            }
        })
    }

    /// Route one drag sample to the top card.
    ///
    /// Returns live feedback whenever the drag currently points at a
    /// direction. A no-op returning `None` when the stack is exhausted.
    pub fn drag_update(
        &mut self,
        surface: Size,
        update: DragUpdate,
    ) -> Option<SwipeChange<'_, T, C::Direction>> {
        if self.is_exhausted() {
            return None;
        }
        let change = self.top.drag_update(&self.classifier, surface, update)?;
        Some(SwipeChange {
            element: &self.cards[self.cursor],
            direction: change.direction,
            translation: change.translation,
        })
    }

    /// End the drag on the top card and decide the outcome.
    ///
    /// Always produces one [`SwipeEnd`] for the dragged element — commit or
    /// snap-back — unless the stack is exhausted, in which case the event is
    /// dropped. The cursor advances by exactly one iff the swipe committed;
    /// the next card then starts from a fresh interaction with no residue.
    pub fn drag_end(&mut self, surface: Size) -> Option<SwipeEnd<'_, T, C::Direction>> {
        if self.is_exhausted() {
            return None;
        }
        let outcome = self.top.drag_end(&self.classifier, surface);
        let index = self.cursor;
        if outcome.is_commit() {
            self.cursor += 1;
            self.top = CardInteraction::new(self.config.swipe_threshold());
        }
        Some(SwipeEnd {
            element: &self.cards[index],
            outcome,
        })
    }

    /// Report that the shell finished playing the snap-back transition.
    pub fn transition_finished(&mut self) {
        self.top.finish_transition();
    }
}
