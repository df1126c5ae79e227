// Copyright 2026 the Riffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live swipe feedback.
//!
//! This example replays a curving drag sample-by-sample and prints the
//! continuous feedback a shell would use for overlay icons and card tilt:
//! the unthresholded changing events, the thresholded render direction, and
//! the rotation derived from the contact point's half of the surface.
//!
//! Run:
//! - `cargo run -p riffle_demos --example swipe_feedback`

use kurbo::{Point, Size, Vec2};
use riffle_gesture::DragUpdate;
use riffle_gesture::directions::Cardinal;
use riffle_stack::{CardStack, StackConfig};

const SURFACE: Size = Size::new(320.0, 480.0);

fn replay(stack: &mut CardStack<u32, fn(f64) -> Option<Cardinal>>, origin: Point, path: &[Vec2]) {
    println!("== Drag from {origin:?} ==");
    for &translation in path {
        let change = stack.drag_update(SURFACE, DragUpdate {
            origin,
            translation,
        });
        let live = change.map(|c| c.direction);
        let top = stack
            .visible_cards(SURFACE)
            .last()
            .expect("stack is not exhausted");
        println!(
            "  translation=({:>6.1}, {:>6.1})  live={:?}  overlay={:?}  tilt={:>5.1}°",
            translation.x, translation.y, live, top.direction, top.pose.rotation
        );
    }
    let end = stack.drag_end(SURFACE).expect("stack is not exhausted");
    println!("  ended: {:?}\n", end.outcome);
}

fn main() {
    let mut stack: CardStack<u32, fn(f64) -> Option<Cardinal>> = CardStack::new(
        StackConfig::default(),
        Cardinal::from_degrees,
        vec![1, 2, 3],
    );

    // Grabbed in the lower half: tilts clockwise, drifts right, commits.
    replay(
        &mut stack,
        Point::new(160.0, 400.0),
        &[
            Vec2::new(30.0, -5.0),
            Vec2::new(90.0, -10.0),
            Vec2::new(180.0, -20.0),
        ],
    );

    // Grabbed in the upper half: same rightward drift, opposite tilt, but
    // released early — snaps back.
    replay(
        &mut stack,
        Point::new(160.0, 80.0),
        &[Vec2::new(40.0, 0.0), Vec2::new(110.0, 10.0)],
    );
    stack.transition_finished();

    println!("top card after both drags: {:?}", stack.top_element());
}
