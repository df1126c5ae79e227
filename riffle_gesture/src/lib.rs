// Copyright 2026 the Riffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=riffle_gesture --heading-base-level=0

//! Riffle Gesture: a deterministic, `no_std` swipe state machine for card UIs.
//!
//! ## Overview
//!
//! This crate turns a raw drag-event stream into a discrete directional
//! decision for a single card. It does not render, hit-test, or animate.
//! Feed it [`DragUpdate`](crate::types::DragUpdate) samples and a drag-end,
//! and it emits live [`SwipeChanging`](crate::types::SwipeChanging) feedback
//! plus exactly one terminal [`SwipeOutcome`](crate::types::SwipeOutcome)
//! per drag: commit (the card exits) or snap-back (it returns to rest).
//!
//! ## Inputs
//!
//! The surface's measured size and a
//! [`DirectionClassifier`](crate::types::DirectionClassifier) are supplied at
//! evaluation time. The classifier maps the drag angle — degrees in
//! `[0, 360)`, up = 0, clockwise — onto an application-defined direction
//! type; any `Fn(f64) -> Option<D>` qualifies, and
//! [`directions`](crate::directions) ships the common vocabularies.
//!
//! ## Decision rule
//!
//! A drag commits iff the classifier resolves its angle *and* the drag
//! distance strictly exceeds `min(width, height) * swipe_threshold`. Live
//! feedback skips the distance test so shells can show intent early.
//!
//! ## Layering
//!
//! One interaction serves exactly one card, the topmost. A stack controller
//! (see `riffle_stack`) owns the card sequence, routes input to the top
//! interaction, and replaces it wholesale whenever the top card changes.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use riffle_gesture::directions::Horizontal;
//! use riffle_gesture::{CardInteraction, DragUpdate, SwipeOutcome};
//!
//! let surface = Size::new(300.0, 400.0);
//! let mut card = CardInteraction::new(0.5);
//!
//! let change = card.drag_update(
//!     &Horizontal::from_degrees,
//!     surface,
//!     DragUpdate {
//!         origin: Point::new(150.0, 350.0),
//!         translation: Vec2::new(200.0, 10.0),
//!     },
//! );
//! assert_eq!(change.map(|c| c.direction), Some(Horizontal::Right));
//!
//! match card.drag_end(&Horizontal::from_degrees, surface) {
//!     SwipeOutcome::Commit { direction, .. } => assert_eq!(direction, Horizontal::Right),
//!     SwipeOutcome::SnapBack => unreachable!("the drag crossed the threshold"),
//! }
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod directions;
pub mod interaction;
pub mod types;

pub use interaction::{CardInteraction, drag_degrees};
pub use types::{
    DirectionClassifier, DragPhase, DragUpdate, RotationBias, SwipeChanging, SwipeOutcome,
};
