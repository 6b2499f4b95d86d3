// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_toast::{
    ContentNode, DismissTimer, Host, HostId, OverlayFlags, Position, Settings, ShowOptions,
    Toaster, Transition,
};

/// Host that completes nothing by itself; the bench loop delivers tokens.
struct NullHost {
    id: HostId,
    fades: Vec<Transition>,
    timers: Vec<DismissTimer>,
}

impl NullHost {
    fn new(id: u64) -> Self {
        Self {
            id: HostId(id),
            fades: Vec::new(),
            timers: Vec::new(),
        }
    }
}

impl Host for NullHost {
    type View = u32;

    fn id(&self) -> HostId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 390.0, 844.0)
    }

    fn attach(&mut self, view: u32, center: Point, _: OverlayFlags) {
        black_box((view, center));
    }

    fn detach(&mut self, view: u32) {
        black_box(view);
    }

    fn fade(&mut self, _: u32, _: f64, _: Duration, transition: Transition) {
        self.fades.push(transition);
    }

    fn start_timer(&mut self, _: Duration, timer: DismissTimer) {
        self.timers.push(timer);
    }

    fn cancel_timer(&mut self, timer: DismissTimer) {
        self.timers.retain(|t| *t != timer);
    }
}

fn node(view: u32) -> ContentNode<u32> {
    ContentNode {
        view,
        size: Size::new(200.0, 48.0),
    }
}

/// Deliver fades until idle, then fire timers; repeat until nothing is left.
fn drain(toaster: &mut Toaster<u32>, host: &mut NullHost) {
    loop {
        while !host.fades.is_empty() {
            for t in std::mem::take(&mut host.fades) {
                toaster.animation_finished(host, t);
            }
        }
        if host.timers.is_empty() {
            break;
        }
        for t in std::mem::take(&mut host.timers) {
            toaster.timer_fired(host, t);
        }
    }
}

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_drain");
    for &n in &[16_u32, 256, 4096] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("fifo_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut toaster = Toaster::with_settings(Settings {
                        queue_enabled: true,
                        ..Settings::default()
                    });
                    let mut host = NullHost::new(1);
                    for view in 0..n {
                        toaster.show_toast(&mut host, node(view), ShowOptions::new());
                    }
                    (toaster, host)
                },
                |(mut toaster, mut host)| {
                    drain(&mut toaster, &mut host);
                    black_box(toaster.queued_toasts(host.id))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_hide_all");
    for &n in &[16_u32, 256] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("hide_all_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut toaster = Toaster::new();
                    let mut host = NullHost::new(1);
                    for view in 0..n {
                        toaster.show_toast(
                            &mut host,
                            node(view),
                            ShowOptions::new().at(Position::Top),
                        );
                    }
                    (toaster, host)
                },
                |(mut toaster, mut host)| {
                    toaster.hide_all_toasts(&mut host, true, true);
                    drain(&mut toaster, &mut host);
                    black_box(toaster.active_toasts(host.id).count())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_queue, bench_overlap);
criterion_main!(benches);
