// Copyright 2026 the Riffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack basics.
//!
//! This minimal example scripts three drags against a stack of named cards:
//! a committed swipe right, a snap-back, and a committed swipe left, then
//! drains the rest of the deck to exhaustion.
//!
//! Run:
//! - `cargo run -p riffle_demos --example stack_basics`

use kurbo::{Point, Size, Vec2};
use riffle_gesture::DragUpdate;
use riffle_gesture::directions::Horizontal;
use riffle_stack::{CardStack, StackConfig};

const SURFACE: Size = Size::new(320.0, 480.0);

fn drag(stack: &mut CardStack<&'static str, fn(f64) -> Option<Horizontal>>, translation: Vec2) {
    stack.drag_update(
        SURFACE,
        DragUpdate {
            origin: Point::new(160.0, 400.0),
            translation,
        },
    );
    if let Some(end) = stack.drag_end(SURFACE) {
        println!("  swipe ended on {:?}: {:?}", end.element, end.direction());
    } else {
        println!("  drag ignored: stack is exhausted");
    }
}

fn print_window(stack: &CardStack<&'static str, fn(f64) -> Option<Horizontal>>) {
    println!("== Visible window (back-to-front) ==");
    for card in stack.visible_cards(SURFACE) {
        println!(
            "  depth={} element={:?} y_offset={} scale={}",
            card.depth, card.element, card.pose.y_offset, card.pose.scale
        );
    }
}

fn main() {
    let mut stack: CardStack<&'static str, fn(f64) -> Option<Horizontal>> = CardStack::new(
        StackConfig::default(),
        Horizontal::from_degrees,
        vec!["amber", "birch", "cedar", "dahlia"],
    );

    print_window(&stack);

    // Threshold on this surface is min(320, 480) * 0.5 = 160.
    println!("== A long drag right commits ==");
    drag(&mut stack, Vec2::new(220.0, 10.0));
    print_window(&stack);

    println!("== A short drag snaps back ==");
    drag(&mut stack, Vec2::new(60.0, 0.0));
    stack.transition_finished();
    print_window(&stack);

    println!("== A long drag left commits ==");
    drag(&mut stack, Vec2::new(-240.0, -20.0));
    print_window(&stack);

    println!("== Draining the deck ==");
    while !stack.is_exhausted() {
        drag(&mut stack, Vec2::new(220.0, 0.0));
    }
    print_window(&stack);

    // One more drag after exhaustion is a silent no-op.
    drag(&mut stack, Vec2::new(220.0, 0.0));
}
