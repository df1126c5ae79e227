// Copyright 2026 the Riffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the stack controller: identity, poses, visible entries,
//! and the events forwarded to the host.

use kurbo::Vec2;
use riffle_gesture::SwipeOutcome;

/// Stable identity for shell-side diffing and animation continuity.
///
/// The shell matches visible cards across renders by key, so keys must be
/// unique within a stack and stable for the lifetime of an element. Scalar
/// and string types are their own keys out of the box; application element
/// types implement this over their id field.
pub trait Keyed {
    /// Stable unique identifier type.
    type Key: Clone + Eq + core::hash::Hash;

    /// This element's identifier.
    fn key(&self) -> Self::Key;
}

macro_rules! self_keyed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keyed for $ty {
                type Key = Self;
                fn key(&self) -> Self::Key {
                    self.clone()
                }
            }
        )*
    };
}

self_keyed!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, &'static str,
    alloc::string::String,
);

/// Presentation-ready placement for one visible card.
///
/// A deterministic function of depth, configuration, and (for the top card)
/// live drag state. The scale is anchored at the bottom edge, producing the
/// receding-stack illusion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardPose {
    /// Vertical stacking offset: `depth * card_offset`.
    pub y_offset: f64,
    /// Uniform scale: `1 - card_scale * depth`, anchored at the bottom edge.
    pub scale: f64,
    /// Drag translation; zero on every card but the dragged top card.
    pub translation: Vec2,
    /// Tilt in degrees; zero on every card but the dragged top card.
    pub rotation: f64,
}

/// One entry of the visible window.
///
/// Yielded back-to-front by
/// [`CardStack::visible_cards`](crate::stack::CardStack::visible_cards):
/// deepest card first, top card last, so painting in iteration order gives
/// correct occlusion without explicit z-ordering.
#[derive(Clone, Debug)]
pub struct VisibleCard<'a, T, D> {
    /// The card's element.
    pub element: &'a T,
    /// Depth behind the top card (0 = top).
    pub depth: usize,
    /// Placement for the rendering shell.
    pub pose: CardPose,
    /// Live thresholded direction for overlay feedback. Always `None` off
    /// the top card, and `None` on the top card until a drag would commit.
    pub direction: Option<D>,
}

impl<T, D> VisibleCard<'_, T, D> {
    /// Whether this is the topmost, gesture-live card.
    pub fn is_top(&self) -> bool {
        self.depth == 0
    }
}

impl<T: Keyed, D> VisibleCard<'_, T, D> {
    /// Stable identity of the element, for diffing across renders.
    pub fn key(&self) -> T::Key {
        self.element.key()
    }
}

/// Continuous feedback while the top card is being dragged.
///
/// Forwarded from the top card's interaction with the element attached;
/// emitted only while an (unthresholded) direction resolves.
#[derive(Copy, Clone, Debug)]
pub struct SwipeChange<'a, T, D> {
    /// The top element under the pointer.
    pub element: &'a T,
    /// Direction the drag currently points at.
    pub direction: D,
    /// Cumulative drag translation.
    pub translation: Vec2,
}

/// Terminal report for a completed drag on the top card.
///
/// Produced exactly once per drag-end. The stack has already advanced (on
/// commit) or re-posed the same card at zero translation (on snap-back) by
/// the time the host sees this.
#[derive(Copy, Clone, Debug)]
pub struct SwipeEnd<'a, T, D> {
    /// The element the drag ended on.
    pub element: &'a T,
    /// Commit (threshold exceeded) or snap-back.
    pub outcome: SwipeOutcome<D>,
}

impl<T, D> SwipeEnd<'_, T, D> {
    /// The committed direction, or `None` for a snap-back.
    pub fn direction(&self) -> Option<&D> {
        self.outcome.direction()
    }
}
