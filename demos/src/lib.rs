// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A console host with a virtual clock, shared by the demos.
//!
//! Fades and timers are scheduled on a simulated event loop instead of a real
//! toolkit; [`ConsoleHost::run`] advances time and hands every token back to
//! the toaster, logging what a real host would draw.

use std::time::Duration;

use kurbo::{Point, Rect, Size};
use log::info;
use understory_toast::{
    ContentBuilder, ContentNode, DismissTimer, Host, HostId, OverlayFlags, Style, ToastContent,
    Toaster, Transition,
};

/// Something the simulated event loop will deliver later.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A fade finished.
    Faded(Transition),
    /// A dismissal timer expired.
    Timer(DismissTimer),
    /// The user tapped a view.
    Tap(u32),
}

/// A host that prints instead of drawing.
#[derive(Debug)]
pub struct ConsoleHost {
    id: HostId,
    bounds: Rect,
    now: Duration,
    seq: u64,
    next_view: u32,
    pending: Vec<(Duration, u64, Event)>,
}

impl ConsoleHost {
    /// A `width × height` host with the given id.
    pub fn new(id: u64, width: f64, height: f64) -> Self {
        Self {
            id: HostId(id),
            bounds: Rect::new(0.0, 0.0, width, height),
            now: Duration::ZERO,
            seq: 0,
            next_view: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Deliver `event` once `delay` has passed.
    pub fn schedule(&mut self, delay: Duration, event: Event) {
        self.seq += 1;
        self.pending.push((self.now + delay, self.seq, event));
    }

    /// Run the event loop until nothing is left to deliver.
    pub fn run(&mut self, toaster: &mut Toaster<u32>) {
        while let Some(event) = self.pop() {
            match event {
                Event::Faded(transition) => toaster.animation_finished(self, transition),
                Event::Timer(timer) => toaster.timer_fired(self, timer),
                Event::Tap(view) => {
                    info!("[{:>5}ms] tap on #{view}", self.now.as_millis());
                    toaster.toast_tapped(self, view);
                }
            }
        }
    }

    fn pop(&mut self) -> Option<Event> {
        let next = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, (at, seq, _))| (*at, *seq))
            .map(|(i, _)| i)?;
        let (at, _, event) = self.pending.swap_remove(next);
        self.now = self.now.max(at);
        Some(event)
    }

    fn stamp(&self) -> u128 {
        self.now.as_millis()
    }
}

impl Host for ConsoleHost {
    type View = u32;

    fn id(&self) -> HostId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn attach(&mut self, view: u32, center: Point, flags: OverlayFlags) {
        info!(
            "[{:>5}ms] attach #{view} at ({:.0}, {:.0}) {flags:?}",
            self.stamp(),
            center.x,
            center.y
        );
    }

    fn detach(&mut self, view: u32) {
        info!("[{:>5}ms] detach #{view}", self.stamp());
    }

    fn fade(&mut self, view: u32, to: f64, duration: Duration, transition: Transition) {
        info!("[{:>5}ms] fade #{view} to {to}", self.stamp());
        self.schedule(duration, Event::Faded(transition));
    }

    fn start_timer(&mut self, delay: Duration, timer: DismissTimer) {
        self.schedule(delay, Event::Timer(timer));
    }

    fn cancel_timer(&mut self, timer: DismissTimer) {
        self.pending.retain(|(_, _, event)| *event != Event::Timer(timer));
    }
}

impl ContentBuilder for ConsoleHost {
    type Image = &'static str;

    fn build_toast(
        &mut self,
        content: ToastContent<&'static str>,
        style: &Style,
    ) -> ContentNode<u32> {
        self.next_view += 1;
        let chars = content
            .message_text()
            .map_or(0, str::len)
            .max(content.title_text().map_or(0, str::len));
        let text_width = chars as f64 * style.message_font.size * 0.5;
        let image_width = content.image().map_or(0.0, |_| style.image_size.width);
        let width = (text_width + image_width + 2.0 * style.horizontal_padding)
            .min(self.bounds.width() * style.max_width_percentage());
        let lines = usize::from(content.title_text().is_some())
            + usize::from(content.message_text().is_some());
        let height = (lines as f64 * style.message_font.size * 1.2 + 2.0 * style.vertical_padding)
            .max(content.image().map_or(0.0, |_| style.image_size.height));
        info!(
            "[{:>5}ms] built #{} {:?}: {:?}",
            self.stamp(),
            self.next_view,
            content.title_text(),
            content.message_text()
        );
        ContentNode {
            view: self.next_view,
            size: Size::new(width, height),
        }
    }

    fn build_activity(&mut self, style: &Style) -> ContentNode<u32> {
        self.next_view += 1;
        ContentNode {
            view: self.next_view,
            size: style.activity_size,
        }
    }
}
