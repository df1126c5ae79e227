// Copyright 2026 the Riffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use riffle_gesture::directions::{Cardinal, Compass8, Horizontal};
use riffle_gesture::{CardInteraction, DragUpdate, drag_degrees};
use riffle_stack::{CardStack, StackConfig};

const SURFACE: Size = Size::new(320.0, 480.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Drag samples scattered over the surface, both halves, all angles.
fn gen_samples(count: usize) -> Vec<DragUpdate> {
    let mut rng = Rng::new(0x5eed_cafe);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let origin = Point::new(
            rng.next_f64() * SURFACE.width,
            rng.next_f64() * SURFACE.height,
        );
        let translation = Vec2::new(
            (rng.next_f64() - 0.5) * 2.0 * SURFACE.width,
            (rng.next_f64() - 0.5) * 2.0 * SURFACE.height,
        );
        out.push(DragUpdate {
            origin,
            translation,
        });
    }
    out
}

fn bench_degrees(c: &mut Criterion) {
    let samples = gen_samples(4096);
    let mut group = c.benchmark_group("drag_degrees");
    group.throughput(Throughput::Elements(samples.len() as u64));
    group.bench_function("atan2_normalized", |b| {
        b.iter(|| {
            let mut acc = 0.0_f64;
            for s in &samples {
                acc += drag_degrees(black_box(s.translation));
            }
            acc
        });
    });
    group.finish();
}

fn bench_drag_updates(c: &mut Criterion) {
    let samples = gen_samples(4096);
    let mut group = c.benchmark_group("drag_update");
    group.throughput(Throughput::Elements(samples.len() as u64));

    group.bench_function("horizontal", |b| {
        b.iter(|| {
            let mut card = CardInteraction::new(0.5);
            let mut live = 0_usize;
            for &s in &samples {
                if card
                    .drag_update(&Horizontal::from_degrees, SURFACE, black_box(s))
                    .is_some()
                {
                    live += 1;
                }
            }
            live
        });
    });

    group.bench_function("compass8", |b| {
        b.iter(|| {
            let mut card = CardInteraction::new(0.5);
            let mut live = 0_usize;
            for &s in &samples {
                if card
                    .drag_update(&Compass8::from_degrees, SURFACE, black_box(s))
                    .is_some()
                {
                    live += 1;
                }
            }
            live
        });
    });

    group.finish();
}

fn bench_visible_window(c: &mut Criterion) {
    let cards: Vec<u32> = (0..10_000).collect();
    let config = StackConfig::new(5, 10.0, 0.05, 0.5).unwrap();
    let stack: CardStack<u32, fn(f64) -> Option<Cardinal>> =
        CardStack::new(config, Cardinal::from_degrees, cards);

    let mut group = c.benchmark_group("visible_window");
    group.bench_function("iterate_poses", |b| {
        b.iter(|| {
            let mut acc = 0.0_f64;
            for card in stack.visible_cards(black_box(SURFACE)) {
                acc += card.pose.y_offset + card.pose.scale;
            }
            acc
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_degrees,
    bench_drag_updates,
    bench_visible_window
);
criterion_main!(benches);
