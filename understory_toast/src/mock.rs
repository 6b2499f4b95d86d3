// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording host used by unit tests.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Insets, Point, Rect, Size};

use crate::content::{ContentBuilder, ContentNode, ToastContent};
use crate::host::{DismissTimer, Host, HostId, OverlayFlags, Transition};
use crate::style::Style;
use crate::toaster::Toaster;

/// A 320×480 host that records every call and never completes anything on its own.
#[derive(Debug)]
pub(crate) struct MockHost {
    pub(crate) id: HostId,
    pub(crate) bounds: Rect,
    pub(crate) insets: Insets,
    /// Currently attached views.
    pub(crate) attached: Vec<(u32, Point, OverlayFlags)>,
    pub(crate) detached: Vec<u32>,
    /// Fades started and not yet delivered.
    pub(crate) fades: Vec<(u32, f64, Duration, Transition)>,
    pub(crate) fade_outs: usize,
    /// Timers armed and neither fired nor cancelled.
    pub(crate) timers: Vec<(Duration, DismissTimer)>,
    pub(crate) cancelled: Vec<DismissTimer>,
    pub(crate) built: usize,
    pub(crate) built_activity: usize,
    pub(crate) last_style: Option<Style>,
    next_view: u32,
}

impl MockHost {
    pub(crate) const TOAST_SIZE: Size = Size::new(100.0, 40.0);
    pub(crate) const ACTIVITY_SIZE: Size = Size::new(100.0, 100.0);

    pub(crate) fn new(id: u64) -> Self {
        Self {
            id: HostId(id),
            bounds: Rect::new(0.0, 0.0, 320.0, 480.0),
            insets: Insets::ZERO,
            attached: Vec::new(),
            detached: Vec::new(),
            fades: Vec::new(),
            fade_outs: 0,
            timers: Vec::new(),
            cancelled: Vec::new(),
            built: 0,
            built_activity: 0,
            last_style: None,
            next_view: 0,
        }
    }

    fn fresh_view(&mut self) -> u32 {
        self.next_view += 1;
        self.next_view
    }

    /// A toast-sized node with a fresh view, bypassing the builder.
    pub(crate) fn node(&mut self) -> ContentNode<u32> {
        ContentNode {
            view: self.fresh_view(),
            size: Self::TOAST_SIZE,
        }
    }

    pub(crate) fn is_attached(&self, view: u32) -> bool {
        self.attached.iter().any(|(v, ..)| *v == view)
    }

    pub(crate) fn attached_at(&self, view: u32) -> Option<Point> {
        self.attached
            .iter()
            .find(|(v, ..)| *v == view)
            .map(|(_, center, _)| *center)
    }

    pub(crate) fn flags_of(&self, view: u32) -> Option<OverlayFlags> {
        self.attached
            .iter()
            .find(|(v, ..)| *v == view)
            .map(|(.., flags)| *flags)
    }

    pub(crate) fn take_fades(&mut self) -> Vec<Transition> {
        core::mem::take(&mut self.fades)
            .into_iter()
            .map(|(.., t)| t)
            .collect()
    }
}

impl Host for MockHost {
    type View = u32;

    fn id(&self) -> HostId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn safe_area(&self) -> Insets {
        self.insets
    }

    fn attach(&mut self, view: u32, center: Point, flags: OverlayFlags) {
        self.attached.push((view, center, flags));
    }

    fn detach(&mut self, view: u32) {
        self.attached.retain(|(v, ..)| *v != view);
        self.detached.push(view);
    }

    fn fade(&mut self, view: u32, to: f64, duration: Duration, transition: Transition) {
        if to == 0.0 {
            self.fade_outs += 1;
        }
        self.fades.push((view, to, duration, transition));
    }

    fn start_timer(&mut self, delay: Duration, timer: DismissTimer) {
        self.timers.push((delay, timer));
    }

    fn cancel_timer(&mut self, timer: DismissTimer) {
        self.timers.retain(|(_, t)| *t != timer);
        self.cancelled.push(timer);
    }
}

impl ContentBuilder for MockHost {
    type Image = &'static str;

    fn build_toast(&mut self, _: ToastContent<&'static str>, style: &Style) -> ContentNode<u32> {
        self.built += 1;
        self.last_style = Some(*style);
        ContentNode {
            view: self.fresh_view(),
            size: Self::TOAST_SIZE,
        }
    }

    fn build_activity(&mut self, _: &Style) -> ContentNode<u32> {
        self.built_activity += 1;
        ContentNode {
            view: self.fresh_view(),
            size: Self::ACTIVITY_SIZE,
        }
    }
}

/// Complete every fade, including ones started by earlier completions, until idle.
pub(crate) fn settle(toaster: &mut Toaster<u32>, host: &mut MockHost) {
    while !host.fades.is_empty() {
        for transition in host.take_fades() {
            toaster.animation_finished(host, transition);
        }
    }
}

/// Fire every armed timer in arming order.
pub(crate) fn fire_timers(toaster: &mut Toaster<u32>, host: &mut MockHost) {
    for (_, timer) in core::mem::take(&mut host.timers) {
        toaster.timer_fired(host, timer);
    }
}
