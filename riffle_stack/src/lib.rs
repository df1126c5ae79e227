// Copyright 2026 the Riffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=riffle_stack --heading-base-level=0

//! Riffle Stack: a headless controller for swipeable card stacks.
//!
//! ## Overview
//!
//! This crate owns the card sequence and the cursor into it, decides which
//! cards are visible at which depth, and drives the top card's
//! `riffle_gesture` interaction. It renders nothing: a shell reads the
//! visible window each frame and dispatches the returned events, diffing
//! cards by their stable [`Keyed`](crate::types::Keyed) identity.
//!
//! ## Windowing
//!
//! A card at sequence position `i` renders iff `0 <= i - cursor <
//! max_visible_cards`. [`CardStack::visible_cards`](crate::stack::CardStack::visible_cards)
//! yields the window back-to-front with per-depth poses (vertical offset and
//! bottom-anchored scale shrink), so painting in iteration order gives
//! correct occlusion.
//!
//! ## Advancement
//!
//! Each completed drag on the top card yields exactly one
//! [`SwipeEnd`](crate::types::SwipeEnd). The cursor advances by exactly one
//! element iff the swipe committed; a snap-back leaves the same card on top
//! at zero translation. Advancement is forward-only: no wraparound, no undo.
//! When the cursor passes the end the stack is exhausted — nothing renders
//! and further drag events are silent no-ops.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use riffle_gesture::DragUpdate;
//! use riffle_gesture::directions::Horizontal;
//! use riffle_stack::{CardStack, StackConfig};
//!
//! let mut stack = CardStack::new(
//!     StackConfig::default(),
//!     Horizontal::from_degrees,
//!     vec!["amber", "birch", "cedar"],
//! );
//! let surface = Size::new(300.0, 400.0);
//!
//! // Drag the top card well past the threshold, pointing right.
//! stack.drag_update(
//!     surface,
//!     DragUpdate {
//!         origin: Point::new(150.0, 300.0),
//!         translation: Vec2::new(250.0, 0.0),
//!     },
//! );
//! let end = stack.drag_end(surface).unwrap();
//! assert_eq!(*end.element, "amber");
//! assert_eq!(end.direction(), Some(&Horizontal::Right));
//! assert_eq!(stack.position(), 1);
//!
//! // "birch" is now on top, with "cedar" receding behind it.
//! let visible: Vec<_> = stack.visible_cards(surface).map(|c| c.key()).collect();
//! assert_eq!(visible, vec!["cedar", "birch"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod stack;
pub mod types;

pub use config::{ConfigError, Easing, StackConfig, Transition};
pub use stack::CardStack;
pub use types::{CardPose, Keyed, SwipeChange, SwipeEnd, VisibleCard};
